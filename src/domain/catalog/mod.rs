pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{CatalogEntry, CatalogKind, Category, Genre, NewCatalogEntry};
pub use repository::CatalogRepository;
pub use value_objects::{CatalogName, CategoryId, GenreId, Slug};
