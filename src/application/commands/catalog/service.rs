// src/application/commands/catalog/service.rs
use std::sync::Arc;

use crate::{
    application::ports::util::SlugGenerator,
    domain::catalog::{CatalogRepository, Category, Genre},
};

pub struct CatalogCommandService {
    pub(super) categories: Arc<dyn CatalogRepository<Category>>,
    pub(super) genres: Arc<dyn CatalogRepository<Genre>>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
}

impl CatalogCommandService {
    pub fn new(
        categories: Arc<dyn CatalogRepository<Category>>,
        genres: Arc<dyn CatalogRepository<Genre>>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            categories,
            genres,
            slugger,
        }
    }
}
