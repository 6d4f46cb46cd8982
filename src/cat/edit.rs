//! The form and endpoint for editing a cat.

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    cat::{
        CatFormData, CatId, CatalogState,
        form::{CatForm, cat_dialog_view},
        state::mutation_success_response,
    },
};

/// Render the dialog for editing a cat, filled in from the cached record.
pub async fn get_edit_cat_form(
    Path(cat_id): Path<CatId>,
    State(state): State<CatalogState>,
) -> Response {
    let catalog = match state.lock_catalog() {
        Ok(catalog) => catalog,
        Err(error) => return error.into_alert_response("Could not edit cat"),
    };

    match catalog.get(cat_id) {
        Some(cat) => cat_dialog_view(CatForm::Edit(cat)).into_response(),
        None => {
            tracing::warn!("Tried to edit cat {cat_id} which is not in the catalog");
            Error::NotFound.into_alert_response("Could not edit cat")
        }
    }
}

/// Send the edited fields to the backend and apply the returned record.
pub async fn update_cat_endpoint(
    Path(cat_id): Path<CatId>,
    State(state): State<CatalogState>,
    Form(form): Form<CatFormData>,
) -> Response {
    let cat = match state
        .backend
        .update_cat(cat_id, form.into_update())
        .await
        .inspect_err(|error| tracing::error!("Could not update cat {cat_id}: {error}"))
    {
        Ok(cat) => cat,
        Err(error) => return error.into_alert_response("Failed to update cat"),
    };

    match state.change_and_render(|catalog| {
        catalog.apply_update(cat);
    }) {
        Ok(section) => mutation_success_response(section, "Cat updated successfully"),
        Err(error) => error.into_alert_response("Failed to update cat"),
    }
}
