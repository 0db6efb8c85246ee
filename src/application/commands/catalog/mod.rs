// src/application/commands/catalog/mod.rs
mod create;
mod delete;
mod service;

pub use create::CreateCatalogEntryCommand;
pub use delete::DeleteCatalogEntryCommand;
pub use service::CatalogCommandService;
