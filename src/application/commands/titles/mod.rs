// src/application/commands/titles/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use delete::DeleteTitleCommand;
pub use service::TitleCommandService;
pub use update::UpdateTitleCommand;
