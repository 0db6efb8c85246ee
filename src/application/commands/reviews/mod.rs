// src/application/commands/reviews/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateReviewCommand;
pub use delete::DeleteReviewCommand;
pub use service::ReviewCommandService;
pub use update::UpdateReviewCommand;
