//! The dialog with the form for creating or editing a cat.

use maud::{Markup, html};

use crate::{
    cat::{Cat, catalog_page::CATALOG_ID},
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, DIALOG_CONTAINER_ID, FORM_CHECKBOX_STYLE,
        FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, loading_spinner,
    },
};

/// Which form the dialog shows.
pub(crate) enum CatForm<'a> {
    /// An empty form that creates a new cat.
    Create,
    /// A form filled in with the details of an existing cat.
    Edit(&'a Cat),
}

impl CatForm<'_> {
    fn title(&self) -> &'static str {
        match self {
            CatForm::Create => "Add New Cat",
            CatForm::Edit(_) => "Edit Cat",
        }
    }

    fn cat(&self) -> Option<&Cat> {
        match self {
            CatForm::Create => None,
            CatForm::Edit(cat) => Some(cat),
        }
    }
}

pub(crate) fn cat_dialog_view(form: CatForm<'_>) -> Markup {
    let (create_url, update_url) = match &form {
        CatForm::Create => (Some(endpoints::CATS_API.to_owned()), None),
        CatForm::Edit(cat) => (None, Some(format_endpoint(endpoints::CAT_API, cat.id))),
    };
    let cat = form.cat();
    let value = |field: fn(&Cat) -> &str| cat.map(field).unwrap_or_default();
    // Clearing the container removes both the backdrop and the dialog.
    let close_dialog = format!("document.getElementById('{DIALOG_CONTAINER_ID}').innerHTML = ''");

    html!(
        div class="dialog-backdrop" onclick=(close_dialog) {}

        dialog open class="cat-dialog w-full max-w-lg p-6 rounded-lg bg-white shadow-xl dark:bg-gray-800 dark:text-white"
        {
            h2 class="mb-4 text-xl font-bold" { (form.title()) }

            form
                hx-post=[create_url]
                hx-put=[update_url]
                hx-target=(format!("#{CATALOG_ID}"))
                hx-swap="outerHTML"
                hx-indicator="#indicator"
                hx-disabled-elt="find button[type='submit']"
                class="space-y-4"
            {
                div
                {
                    label for="name" class=(FORM_LABEL_STYLE) { "Name" }
                    input
                        id="name"
                        type="text"
                        name="name"
                        value=(value(|cat| cat.name.as_str()))
                        required
                        autofocus
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="breed-input" class=(FORM_LABEL_STYLE) { "Breed" }
                    input
                        id="breed-input"
                        type="text"
                        name="breed"
                        value=(value(|cat| cat.breed.as_str()))
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="description" class=(FORM_LABEL_STYLE) { "Description" }
                    textarea
                        id="description"
                        name="description"
                        rows="3"
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        (value(|cat| cat.description.as_str()))
                    }
                }

                div
                {
                    label for="origin" class=(FORM_LABEL_STYLE) { "Origin" }
                    input
                        id="origin"
                        type="text"
                        name="origin"
                        placeholder="Country or region of origin"
                        value=(value(|cat| cat.origin.as_str()))
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="life_span" class=(FORM_LABEL_STYLE) { "Life Span" }
                    input
                        id="life_span"
                        type="text"
                        name="life_span"
                        placeholder="Average lifespan (e.g., 12-15 years)"
                        value=(value(|cat| cat.life_span.as_str()))
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                @if matches!(form, CatForm::Create) {
                    div class="flex items-center gap-2"
                    {
                        input
                            id="favorite"
                            type="checkbox"
                            name="favorite"
                            value="true"
                            class=(FORM_CHECKBOX_STYLE);
                        label for="favorite" class="text-sm" { "Add to favorites" }
                    }
                }

                div class="flex justify-end gap-4 pt-2"
                {
                    button type="button" onclick=(close_dialog) class=(BUTTON_SECONDARY_STYLE)
                    {
                        "Cancel"
                    }

                    button type="submit" id="indicator" class=(BUTTON_PRIMARY_STYLE)
                    {
                        span class="htmx-indicator" { (loading_spinner()) }
                        "Save"
                    }
                }
            }
        }
    )
}
