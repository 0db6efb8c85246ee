pub mod entity;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{NewReview, Review, ReviewUpdate};
pub use repository::ReviewRepository;
pub use services::{DUPLICATE_REVIEW_MESSAGE, ReviewUniquenessGuard, duplicate_review};
pub use value_objects::{ReviewId, ReviewText, Score};
