use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::cat::{CatId, CatalogState, state::mutation_success_response};

/// Delete a cat in the backend and drop it from the catalog.
pub async fn delete_cat_endpoint(
    Path(cat_id): Path<CatId>,
    State(state): State<CatalogState>,
) -> Response {
    if let Err(error) = state
        .backend
        .delete_cat(cat_id)
        .await
        .inspect_err(|error| tracing::error!("Could not delete cat {cat_id}: {error}"))
    {
        return error.into_alert_response("Failed to delete cat");
    }

    match state.change_and_render(|catalog| {
        catalog.remove(cat_id);
    }) {
        Ok(section) => mutation_success_response(section, "Cat deleted successfully"),
        Err(error) => error.into_alert_response("Failed to delete cat"),
    }
}
