//! Endpoints that change what the catalog shows without contacting the backend.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::cat::{BreedFilter, Catalog, CatalogState, CatalogTab};

/// The form sent by the breed select.
#[derive(Debug, Deserialize)]
pub struct BreedForm {
    /// A breed name, or "all" to show every breed.
    pub breed: String,
}

/// The form sent by the search box.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    /// The term to match against names and breeds.
    #[serde(default)]
    pub search: String,
}

/// The form sent by the pagination buttons.
#[derive(Debug, Deserialize)]
pub struct PageForm {
    /// The 1-based page to show.
    pub page: u64,
}

/// The form sent by the tab buttons.
#[derive(Debug, Deserialize)]
pub struct TabForm {
    /// The tab to show.
    pub tab: CatalogTab,
}

/// Filter the catalog by breed.
pub async fn set_breed_filter_endpoint(
    State(state): State<CatalogState>,
    Form(form): Form<BreedForm>,
) -> Response {
    let breed_filter = BreedFilter::from_form_value(&form.breed);
    render_view_change(&state, |catalog| catalog.set_breed_filter(breed_filter))
}

/// Search the catalog by name or breed.
pub async fn set_search_endpoint(
    State(state): State<CatalogState>,
    Form(form): Form<SearchForm>,
) -> Response {
    render_view_change(&state, |catalog| catalog.set_search(&form.search))
}

/// Show another page of the catalog.
pub async fn set_page_endpoint(
    State(state): State<CatalogState>,
    Form(form): Form<PageForm>,
) -> Response {
    render_view_change(&state, |catalog| catalog.set_page(form.page))
}

/// Switch between all cats and favorites.
pub async fn set_tab_endpoint(
    State(state): State<CatalogState>,
    Form(form): Form<TabForm>,
) -> Response {
    render_view_change(&state, |catalog| catalog.set_tab(form.tab))
}

fn render_view_change(state: &CatalogState, change: impl FnOnce(&mut Catalog)) -> Response {
    match state.change_and_render(change) {
        Ok(section) => section.into_response(),
        Err(error) => error.into_alert_response("Could not update the catalog"),
    }
}
