mod list;
mod service;

pub use list::ListCatalogQuery;
pub use service::CatalogQueryService;
