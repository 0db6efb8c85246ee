use crate::application::references::SlugReferenceCodec;
use crate::domain::title::Title;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use super::catalog::{CategoryDto, GenreDto};

/// Outgoing representation of a title: references expanded, rating derived.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TitleReadDto {
    pub id: i64,
    pub name: String,
    pub year: i32,
    #[schema(minimum = 1, maximum = 10)]
    pub rating: Option<u8>,
    pub description: Option<String>,
    pub genre: Vec<GenreDto>,
    pub category: Option<CategoryDto>,
}

impl From<Title> for TitleReadDto {
    fn from(title: Title) -> Self {
        Self {
            id: title.id.into(),
            name: title.name.into_inner(),
            year: title.year.value(),
            rating: title.rating.map(|r| r.value()),
            description: title.description,
            genre: title.genres.iter().map(SlugReferenceCodec::render).collect(),
            category: title.category.as_ref().map(SlugReferenceCodec::render),
        }
    }
}

/// Incoming representation of a title: references as slugs, no rating.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TitleWriteDto {
    pub name: String,
    pub year: i32,
    #[serde(default)]
    pub description: Option<String>,
    pub genre: Vec<String>,
    pub category: String,
}

/// Partial [`TitleWriteDto`] for PATCH requests.
///
/// `description` distinguishes an absent key (`None`) from an explicit
/// `null` (`Some(None)`), which clears the stored description.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TitlePatchDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, nullable)]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub genre: Option<Vec<String>>,
    #[serde(default)]
    pub category: Option<String>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
