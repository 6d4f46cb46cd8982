//! Cat records, the client for the cat REST service, the cached catalog and
//! the pages and endpoints for browsing and editing it.

mod catalog;
mod catalog_page;
mod client;
mod create;
mod delete;
mod domain;
mod edit;
mod favorite;
mod form;
mod state;
mod view_endpoints;

pub use catalog::{ALL_BREEDS, BreedFilter, Catalog, CatalogTab, CatalogView};
pub use catalog_page::{get_catalog_page, get_index_page};
pub use client::{CatBackend, HttpCatBackend};
pub use create::{create_cat_endpoint, get_new_cat_form};
pub use delete::delete_cat_endpoint;
pub use domain::{Cat, CatFormData, CatId, CatUpdate, NewCat, PLACEHOLDER_IMAGE_URL};
pub use edit::{get_edit_cat_form, update_cat_endpoint};
pub use favorite::{add_favorite_endpoint, remove_favorite_endpoint};
pub use state::CatalogState;
pub use view_endpoints::{
    BreedForm, PageForm, SearchForm, TabForm, set_breed_filter_endpoint, set_page_endpoint,
    set_search_endpoint, set_tab_endpoint,
};
