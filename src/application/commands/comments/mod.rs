// src/application/commands/comments/mod.rs
mod create;
mod modify;
mod service;

pub use create::CreateCommentCommand;
pub use modify::{DeleteCommentCommand, UpdateCommentCommand};
pub use service::CommentCommandService;
