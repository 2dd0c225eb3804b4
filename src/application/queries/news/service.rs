use std::sync::Arc;

use crate::application::ports::news::NewsSource;

pub struct NewsQueryService {
    pub(super) source: Arc<dyn NewsSource>,
}

impl NewsQueryService {
    pub fn new(source: Arc<dyn NewsSource>) -> Self {
        Self { source }
    }
}
