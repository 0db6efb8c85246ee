use super::TitleQueryService;
use crate::{
    application::{dto::TitleReadDto, error::ApplicationResult},
    domain::{catalog::Slug, title::TitleFilter},
};

#[derive(Debug, Default)]
pub struct ListTitlesQuery {
    pub category: Option<String>,
    pub genre: Option<String>,
    pub name: Option<String>,
    pub year: Option<i32>,
}

impl TitleQueryService {
    pub async fn list_titles(
        &self,
        query: ListTitlesQuery,
    ) -> ApplicationResult<Vec<TitleReadDto>> {
        let Some(filter) = build_filter(query) else {
            return Ok(Vec::new());
        };
        let titles = self.read_repo.list(&filter).await?;
        Ok(titles.into_iter().map(Into::into).collect())
    }
}

/// `None` when a slug filter is malformed and therefore cannot match.
fn build_filter(query: ListTitlesQuery) -> Option<TitleFilter> {
    let slug = |raw: Option<String>| match raw {
        Some(value) => Slug::new(value).ok().map(Some),
        None => Some(None),
    };

    Some(TitleFilter {
        category: slug(query.category)?,
        genre: slug(query.genre)?,
        name: query.name.filter(|n| !n.trim().is_empty()),
        year: query.year,
    })
}
