// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("upstream request failed: {0}")]
    Upstream(String),

    #[error("upstream responded with status {0}")]
    UpstreamStatus(u16),

    #[error("upstream request timed out")]
    Timeout,

    #[error("failed to decode upstream response: {0}")]
    Decode(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// Whether the failure came from the visitor's input rather than from us
    /// or the news provider.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Domain(_) | Self::Validation(_))
    }
}
