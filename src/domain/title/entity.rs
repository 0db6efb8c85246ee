// src/domain/title/entity.rs
use crate::domain::catalog::{Category, Genre, Slug};
use crate::domain::title::value_objects::{Rating, ReleaseYear, TitleId, TitleName};

#[derive(Debug, Clone)]
pub struct Title {
    pub id: TitleId,
    pub name: TitleName,
    pub year: ReleaseYear,
    pub description: Option<String>,
    /// `None` once the referenced category has been deleted.
    pub category: Option<Category>,
    pub genres: Vec<Genre>,
    pub rating: Option<Rating>,
}

#[derive(Debug, Clone)]
pub struct NewTitle {
    pub name: TitleName,
    pub year: ReleaseYear,
    pub description: Option<String>,
    pub category: Category,
    pub genres: Vec<Genre>,
}

#[derive(Debug, Clone)]
pub struct TitleUpdate {
    pub id: TitleId,
    pub name: Option<TitleName>,
    pub year: Option<ReleaseYear>,
    pub description: Option<Option<String>>,
    pub category: Option<Category>,
    pub genres: Option<Vec<Genre>>,
}

impl TitleUpdate {
    pub const fn new(id: TitleId) -> Self {
        Self {
            id,
            name: None,
            year: None,
            description: None,
            category: None,
            genres: None,
        }
    }

    pub fn with_name(mut self, name: TitleName) -> Self {
        self.name = Some(name);
        self
    }

    pub const fn with_year(mut self, year: ReleaseYear) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_genres(mut self, genres: Vec<Genre>) -> Self {
        self.genres = Some(genres);
        self
    }

    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.year.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.genres.is_none()
    }
}

/// Listing filter; every present field narrows the result.
#[derive(Debug, Clone, Default)]
pub struct TitleFilter {
    pub category: Option<Slug>,
    pub genre: Option<Slug>,
    pub name: Option<String>,
    pub year: Option<i32>,
}

impl TitleFilter {
    /// In-process evaluation of the filter, used by non-SQL repositories.
    pub fn matches(&self, title: &Title) -> bool {
        if let Some(slug) = &self.category {
            if title.category.as_ref().map(|c| &c.slug) != Some(slug) {
                return false;
            }
        }
        if let Some(slug) = &self.genre {
            if !title.genres.iter().any(|g| &g.slug == slug) {
                return false;
            }
        }
        if let Some(name) = &self.name {
            if !title
                .name
                .as_str()
                .to_lowercase()
                .contains(&name.to_lowercase())
            {
                return false;
            }
        }
        if let Some(year) = self.year {
            if title.year.value() != year {
                return false;
            }
        }
        true
    }
}
