//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use crate::{
    cat::{CatBackend, Catalog},
    pagination::PaginationConfig,
};

/// The state of the server.
#[derive(Clone)]
pub struct AppState {
    /// The REST service that owns the cat records.
    pub backend: Arc<dyn CatBackend>,

    /// The cached cat list and the user's filter, search, tab and page.
    pub catalog: Arc<Mutex<Catalog>>,

    /// The config that controls how to display pages of cats.
    pub pagination_config: PaginationConfig,
}

impl AppState {
    /// Create a new [AppState] with an empty catalog backed by `backend`.
    ///
    /// The catalog is filled the first time the catalog page is opened.
    pub fn new(backend: impl CatBackend + 'static, pagination_config: PaginationConfig) -> Self {
        let mut catalog = Catalog::new(pagination_config.page_size);
        catalog.set_page(pagination_config.default_page);

        Self {
            backend: Arc::new(backend),
            catalog: Arc::new(Mutex::new(catalog)),
            pagination_config,
        }
    }
}
