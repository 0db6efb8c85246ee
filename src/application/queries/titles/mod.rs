mod get;
mod list;
mod service;

pub use get::GetTitleQuery;
pub use list::ListTitlesQuery;
pub use service::TitleQueryService;
