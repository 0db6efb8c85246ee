use std::sync::Arc;

use crate::domain::title::TitleReadRepository;

pub struct TitleQueryService {
    pub(super) read_repo: Arc<dyn TitleReadRepository>,
}

impl TitleQueryService {
    pub fn new(read_repo: Arc<dyn TitleReadRepository>) -> Self {
        Self { read_repo }
    }
}
