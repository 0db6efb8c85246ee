pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewTitle, Title, TitleFilter, TitleUpdate};
pub use repository::{TitleReadRepository, TitleWriteRepository};
pub use value_objects::{Rating, ReleaseYear, TitleId, TitleName};
