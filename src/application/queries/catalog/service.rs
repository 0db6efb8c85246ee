use std::sync::Arc;

use crate::domain::catalog::{CatalogRepository, Category, Genre};

pub struct CatalogQueryService {
    pub(super) categories: Arc<dyn CatalogRepository<Category>>,
    pub(super) genres: Arc<dyn CatalogRepository<Genre>>,
}

impl CatalogQueryService {
    pub fn new(
        categories: Arc<dyn CatalogRepository<Category>>,
        genres: Arc<dyn CatalogRepository<Genre>>,
    ) -> Self {
        Self { categories, genres }
    }
}
