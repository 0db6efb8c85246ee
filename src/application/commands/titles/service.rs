// src/application/commands/titles/service.rs
use std::sync::Arc;

use chrono::Datelike;

use crate::{
    application::{
        error::ApplicationResult, ports::time::Clock, references::SlugReferenceCodec,
    },
    domain::title::{ReleaseYear, TitleReadRepository, TitleWriteRepository},
};

pub struct TitleCommandService {
    pub(super) write_repo: Arc<dyn TitleWriteRepository>,
    pub(super) read_repo: Arc<dyn TitleReadRepository>,
    pub(super) codec: Arc<SlugReferenceCodec>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TitleCommandService {
    pub fn new(
        write_repo: Arc<dyn TitleWriteRepository>,
        read_repo: Arc<dyn TitleReadRepository>,
        codec: Arc<SlugReferenceCodec>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            codec,
            clock,
        }
    }

    pub(super) fn release_year(&self, year: i32) -> ApplicationResult<ReleaseYear> {
        Ok(ReleaseYear::new(year, self.clock.now().year())?)
    }
}
