pub mod auth;
pub mod catalog;
pub mod comments;
pub mod reviews;
pub mod serde_time;
pub mod titles;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use catalog::{CatalogEntryWriteDto, CategoryDto, GenreDto, ReferenceDto};
pub use comments::{CommentDto, CommentWriteDto};
pub use reviews::{ReviewDto, ReviewPatchDto, ReviewWriteDto};
pub use titles::{TitlePatchDto, TitleReadDto, TitleWriteDto};
pub use users::UserDto;
