//! The state shared by the catalog's route handlers.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::FromRef,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    alert::Alert,
    cat::{CatBackend, Catalog, catalog_page::catalog_section_view},
    html::DIALOG_CONTAINER_ID,
};

/// The state needed by the catalog pages and endpoints.
#[derive(Clone)]
pub struct CatalogState {
    pub backend: Arc<dyn CatBackend>,
    pub catalog: Arc<Mutex<Catalog>>,
    pub max_pages: u64,
}

impl FromRef<AppState> for CatalogState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            backend: state.backend.clone(),
            catalog: state.catalog.clone(),
            max_pages: state.pagination_config.max_pages,
        }
    }
}

impl CatalogState {
    pub(crate) fn lock_catalog(&self) -> Result<MutexGuard<'_, Catalog>, Error> {
        self.catalog
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire catalog lock: {error}"))
            .map_err(|_| Error::CatalogLockError)
    }

    /// Apply `change` to the catalog and render the catalog section.
    ///
    /// The lock is released before this returns, so it is never held across
    /// a request to the backend.
    pub(crate) fn change_and_render(
        &self,
        change: impl FnOnce(&mut Catalog),
    ) -> Result<Markup, Error> {
        let mut catalog = self.lock_catalog()?;
        change(&mut catalog);

        Ok(catalog_section_view(&catalog, self.max_pages))
    }
}

/// The response to a successful mutation: the new catalog section, a success
/// alert and an empty dialog container to close any open form.
pub(crate) fn mutation_success_response(section: Markup, message: &str) -> Response {
    let alert = Alert::SuccessSimple {
        message: message.to_owned(),
    }
    .into_oob_html();

    html!(
        (section)
        (alert)
        div id=(DIALOG_CONTAINER_ID) hx-swap-oob="true" {}
    )
    .into_response()
}
