//! The form and endpoint for adding a cat.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::cat::{
    CatFormData, CatalogState,
    form::{CatForm, cat_dialog_view},
    state::mutation_success_response,
};

/// Render the dialog for adding a cat.
pub async fn get_new_cat_form() -> Response {
    cat_dialog_view(CatForm::Create).into_response()
}

/// Create a cat in the backend and add the created record to the catalog.
pub async fn create_cat_endpoint(
    State(state): State<CatalogState>,
    Form(form): Form<CatFormData>,
) -> Response {
    let cat = match state
        .backend
        .create_cat(form.into_new_cat())
        .await
        .inspect_err(|error| tracing::error!("Could not create cat: {error}"))
    {
        Ok(cat) => cat,
        Err(error) => return error.into_alert_response("Failed to add cat"),
    };

    match state.change_and_render(|catalog| catalog.insert(cat)) {
        Ok(section) => mutation_success_response(section, "Cat added successfully"),
        Err(error) => error.into_alert_response("Failed to add cat"),
    }
}
