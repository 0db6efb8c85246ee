use super::TitleQueryService;
use crate::{
    application::{
        dto::TitleReadDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::title::TitleId,
};

pub struct GetTitleQuery {
    pub id: i64,
}

impl TitleQueryService {
    pub async fn get_title(&self, query: GetTitleQuery) -> ApplicationResult<TitleReadDto> {
        let id = TitleId::new(query.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("title not found"))
    }
}
