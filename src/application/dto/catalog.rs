use crate::domain::catalog::CatalogEntry;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Nested rendering of a category or genre. The surrogate id is never part
/// of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReferenceDto {
    pub name: String,
    pub slug: String,
}

pub type CategoryDto = ReferenceDto;
pub type GenreDto = ReferenceDto;

impl ReferenceDto {
    pub fn from_entry<T: CatalogEntry>(entry: &T) -> Self {
        Self {
            name: entry.name().as_str().to_owned(),
            slug: entry.slug().as_str().to_owned(),
        }
    }
}

/// Payload for creating a category or genre. The slug is derived from the
/// name when omitted.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CatalogEntryWriteDto {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{CatalogName, Category, CategoryId, Genre, GenreId, Slug};

    #[test]
    fn nested_rendering_omits_surrogate_id() {
        let category = Category {
            id: CategoryId::new(42).unwrap(),
            slug: Slug::new("books").unwrap(),
            name: CatalogName::new("Books").unwrap(),
        };
        let json = serde_json::to_value(ReferenceDto::from_entry(&category)).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(!object.contains_key("id"));
        assert_eq!(object["slug"], "books");
        assert_eq!(object["name"], "Books");
    }

    #[test]
    fn genre_renders_identically() {
        let genre = Genre {
            id: GenreId::new(7).unwrap(),
            slug: Slug::new("fantasy").unwrap(),
            name: CatalogName::new("Fantasy").unwrap(),
        };
        assert_eq!(
            ReferenceDto::from_entry(&genre),
            ReferenceDto {
                name: "Fantasy".into(),
                slug: "fantasy".into()
            }
        );
    }
}
