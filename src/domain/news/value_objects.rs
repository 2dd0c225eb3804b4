use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Free-text query typed by the visitor. Empty terms are allowed and are
/// forwarded upstream unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SearchTerm> for String {
    fn from(value: SearchTerm) -> Self {
        value.0
    }
}

/// 1-based page number requested from the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(u32);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    pub fn new(page: u32) -> DomainResult<Self> {
        if page == 0 {
            Err(DomainError::Validation("page must be at least 1".into()))
        } else {
            Ok(Self(page))
        }
    }

    /// Parses the raw `page` query value. Missing or empty input means the
    /// first page.
    pub fn parse(raw: Option<&str>) -> DomainResult<Self> {
        let raw = match raw {
            Some(value) if !value.is_empty() => value,
            _ => return Ok(Self::FIRST),
        };

        let page = raw
            .parse::<u32>()
            .map_err(|_| DomainError::Validation(format!("invalid page number: {raw:?}")))?;
        Self::new(page)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
