//! The catalog page and the catalog section that every catalog endpoint re-renders.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    alert::Alert,
    cat::{ALL_BREEDS, Cat, Catalog, CatalogState, CatalogTab, CatalogView, PLACEHOLDER_IMAGE_URL},
    endpoints::{self, format_endpoint},
    html::{
        BADGE_STYLE, BUTTON_DELETE_STYLE, BUTTON_LINK_STYLE, BUTTON_PRIMARY_STYLE, CARD_STYLE,
        DIALOG_CONTAINER_ID, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, base_with_alert,
        dialog_styles,
    },
    pagination::{PaginationIndicator, create_pagination_indicators},
};

/// The ID of the catalog section.
pub const CATALOG_ID: &str = "catalog";

/// The root path '/' redirects to the catalog page.
pub async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::CATALOG_VIEW)
}

/// Render the catalog page.
///
/// Opening the page fetches the full cat list from the backend and mirrors it
/// into the catalog. If the backend cannot be reached the page is rendered
/// from the cached list with an error alert.
pub async fn get_catalog_page(State(state): State<CatalogState>) -> Result<Response, Error> {
    let fetch_result = state
        .backend
        .list_cats()
        .await
        .inspect_err(|error| tracing::error!("Error fetching cats: {error}"));

    let alert = fetch_result.is_err().then(|| {
        Alert::ErrorSimple {
            message: "Failed to fetch cats".to_owned(),
        }
        .into_html()
    });

    let (section, search) = {
        let mut catalog = state.lock_catalog()?;

        if let Ok(cats) = fetch_result {
            catalog.replace_all(cats);
        }

        (
            catalog_section_view(&catalog, state.max_pages),
            catalog.search().to_owned(),
        )
    };

    Ok(catalog_page_view(&section, &search, alert).into_response())
}

fn catalog_page_view(section: &Markup, search: &str, alert: Option<Markup>) -> Markup {
    let catalog_target = format!("#{CATALOG_ID}");
    let dialog_target = format!("#{DIALOG_CONTAINER_ID}");

    let content = html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            header class="w-full max-w-6xl flex flex-wrap items-end justify-between gap-4 mb-4"
            {
                h1 class="text-2xl font-bold" { "Cat Catalog" }

                div class="flex flex-wrap items-center gap-4"
                {
                    input
                        type="search"
                        id="search"
                        name="search"
                        placeholder="Search by name or breed"
                        value=(search)
                        hx-put=(endpoints::VIEW_SEARCH)
                        hx-trigger="input changed delay:300ms, search"
                        hx-target=(catalog_target)
                        hx-swap="outerHTML"
                        class=(FORM_TEXT_INPUT_STYLE);

                    button
                        type="button"
                        hx-get=(endpoints::NEW_CAT_VIEW)
                        hx-target=(dialog_target)
                        hx-swap="innerHTML"
                        class=(BUTTON_PRIMARY_STYLE)
                    {
                        "Add New Cat"
                    }
                }
            }

            (section)
        }
    );

    base_with_alert("Catalog", &[dialog_styles()], &content, alert)
}

/// Render the tabs, breed filter, cat cards and pagination for the active view.
///
/// Buttons inside the section replace the whole section with the response.
pub(crate) fn catalog_section_view(catalog: &Catalog, max_pages: u64) -> Markup {
    let view = catalog.view();
    let selected_breed = catalog.breed_filter().as_form_value();
    let mut breeds = catalog.breeds();

    // Keep a breed the user filtered by selectable after its last cat is gone.
    if selected_breed != ALL_BREEDS && !breeds.contains(&selected_breed) {
        breeds.push(selected_breed);
    }

    html!(
        section
            id=(CATALOG_ID)
            class="w-full max-w-6xl space-y-4"
            hx-target="this"
            hx-swap="outerHTML"
        {
            div class="flex flex-wrap items-end justify-between gap-4"
            {
                (tabs_view(&view))
                (breed_select_view(&breeds, selected_breed))
            }

            @if !catalog.is_loaded() {
                p class="py-8 text-center text-gray-500 dark:text-gray-400" data-empty-state="true"
                {
                    "The cats could not be loaded. Refresh the page to try again."
                }
            } @else if view.cats.is_empty() {
                p class="py-8 text-center text-gray-500 dark:text-gray-400" data-empty-state="true"
                {
                    @match view.tab {
                        CatalogTab::All => "No cats found.",
                        CatalogTab::Favorites => "No favorite cats found.",
                    }
                }
            } @else {
                ul class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3"
                {
                    @for cat in &view.cats {
                        (cat_card_view(cat))
                    }
                }
            }

            (pagination_view(&view, max_pages))
        }
    )
}

fn tabs_view(view: &CatalogView) -> Markup {
    let tab_style = |is_current: bool| -> &'static str {
        if is_current {
            "px-4 py-2 text-sm font-semibold rounded-lg bg-blue-50 text-blue-700 \
            shadow-sm dark:bg-blue-900/30 dark:text-blue-200"
        } else {
            "px-4 py-2 text-sm font-semibold rounded-lg text-gray-600 \
            hover:bg-blue-50/70 hover:text-blue-700 dark:text-gray-300 \
            dark:hover:bg-blue-900/20 dark:hover:text-blue-200"
        }
    };

    let tabs = [
        (CatalogTab::All, "All Cats", view.filtered_count),
        (CatalogTab::Favorites, "Favorites", view.favorite_count),
    ];

    html!(
        div role="tablist" class="flex gap-2"
        {
            @for (tab, title, count) in tabs {
                @let is_current = tab == view.tab;

                button
                    type="button"
                    role="tab"
                    data-tab=(tab.as_form_value())
                    aria-selected=(is_current.to_string())
                    hx-put=(endpoints::VIEW_TAB)
                    hx-vals=(format!(r#"{{"tab": "{}"}}"#, tab.as_form_value()))
                    class=(tab_style(is_current))
                {
                    (title) " "
                    span class="tabular-nums" { "(" (count) ")" }
                }
            }
        }
    )
}

fn breed_select_view(breeds: &[&str], selected_breed: &str) -> Markup {
    html!(
        div
        {
            label for="breed" class="sr-only" { "Breed" }

            select
                id="breed"
                name="breed"
                hx-put=(endpoints::VIEW_BREED)
                hx-trigger="change"
                class=(FORM_TEXT_INPUT_STYLE)
            {
                option value=(ALL_BREEDS) selected[selected_breed == ALL_BREEDS] { "All" }

                @for breed in breeds {
                    option value=(breed) selected[*breed == selected_breed] { (breed) }
                }
            }
        }
    )
}

fn cat_card_view(cat: &Cat) -> Markup {
    let favorite_url = format_endpoint(endpoints::FAVORITE_CAT_API, cat.id);
    let edit_url = format_endpoint(endpoints::EDIT_CAT_VIEW, cat.id);
    let delete_url = format_endpoint(endpoints::CAT_API, cat.id);
    let image_url = if cat.image_url.is_empty() {
        PLACEHOLDER_IMAGE_URL
    } else {
        &cat.image_url
    };
    let confirm_message = format!(
        "Are you sure you want to delete '{}'? This cannot be undone.",
        cat.name
    );

    html!(
        li class=(CARD_STYLE) data-cat-card=(cat.id)
        {
            img src=(image_url) alt=(cat.name) loading="lazy" class="h-48 w-full object-cover";

            div class="flex flex-1 flex-col gap-2 p-4"
            {
                div class="flex items-start justify-between gap-2"
                {
                    h2 class="text-lg font-semibold" { (cat.name) }

                    @if cat.favorite {
                        span class=(BADGE_STYLE) data-favorite="true" { "Favorite" }
                    }
                }

                div { span class=(BADGE_STYLE) { (cat.breed) } }

                p class="text-sm text-gray-600 dark:text-gray-300" { (cat.description) }

                dl class="grid grid-cols-2 gap-1 text-sm"
                {
                    dt class="font-medium" { "Origin" }
                    dd { (cat.origin) }
                    dt class="font-medium" { "Life span" }
                    dd { (cat.life_span) }
                }
            }

            div class="flex flex-wrap gap-4 px-4 pb-4 text-sm"
            {
                @if cat.favorite {
                    button type="button" hx-delete=(favorite_url) class=(BUTTON_LINK_STYLE)
                    {
                        "Remove from favorites"
                    }
                } @else {
                    button type="button" hx-post=(favorite_url) class=(BUTTON_LINK_STYLE)
                    {
                        "Add to favorites"
                    }
                }

                button
                    type="button"
                    hx-get=(edit_url)
                    hx-target=(format!("#{DIALOG_CONTAINER_ID}"))
                    hx-swap="innerHTML"
                    class=(BUTTON_LINK_STYLE)
                {
                    "Edit"
                }

                button
                    type="button"
                    hx-delete=(delete_url)
                    hx-confirm=(confirm_message)
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    )
}

fn pagination_view(view: &CatalogView, max_pages: u64) -> Markup {
    if view.page_count <= 1 {
        return html!();
    }

    let indicators = create_pagination_indicators(view.page, view.page_count, max_pages);

    let page_button = |page: u64, label: &str| {
        html!(
            button
                type="button"
                hx-put=(endpoints::VIEW_PAGE)
                hx-vals=(format!(r#"{{"page": {page}}}"#))
                data-page=(page)
                class="px-3 py-2 leading-tight text-gray-500 bg-white border
                    border-gray-300 hover:bg-gray-100 hover:text-gray-700
                    dark:bg-gray-800 dark:border-gray-700 dark:text-gray-400
                    dark:hover:bg-gray-700 dark:hover:text-white"
            {
                (label)
            }
        )
    };

    html!(
        nav class="pagination flex justify-center" aria-label="Pagination"
        {
            ul class="pagination inline-flex -space-x-px text-sm"
            {
                @for indicator in &indicators {
                    li
                    {
                        @match indicator {
                            PaginationIndicator::CurrPage(page) => {
                                span
                                    aria-current="page"
                                    data-page=(page)
                                    class="px-3 py-2 text-blue-600 border border-gray-300
                                        bg-blue-50 dark:border-gray-700 dark:bg-gray-700
                                        dark:text-white"
                                {
                                    (page)
                                }
                            }
                            PaginationIndicator::Page(page) => {
                                (page_button(*page, &page.to_string()))
                            }
                            PaginationIndicator::Ellipsis => {
                                span class="px-3 py-2 text-gray-500" { "..." }
                            }
                            PaginationIndicator::BackButton(page) => {
                                (page_button(*page, "Previous"))
                            }
                            PaginationIndicator::NextButton(page) => {
                                (page_button(*page, "Next"))
                            }
                        }
                    }
                }
            }
        }
    )
}
