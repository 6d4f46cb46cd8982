//! Endpoints for adding cats to and removing cats from the favorites.

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::cat::{CatId, CatUpdate, CatalogState, state::mutation_success_response};

struct FavoriteMessages {
    success: &'static str,
    failure: &'static str,
}

const ADD_MESSAGES: FavoriteMessages = FavoriteMessages {
    success: "Cat added to favorites",
    failure: "Failed to add to favorites",
};

const REMOVE_MESSAGES: FavoriteMessages = FavoriteMessages {
    success: "Cat removed from favorites",
    failure: "Failed to remove from favorites",
};

/// Mark a cat as a favorite.
pub async fn add_favorite_endpoint(
    Path(cat_id): Path<CatId>,
    State(state): State<CatalogState>,
) -> Response {
    set_favorite(cat_id, true, &state, ADD_MESSAGES).await
}

/// Unmark a cat as a favorite.
pub async fn remove_favorite_endpoint(
    Path(cat_id): Path<CatId>,
    State(state): State<CatalogState>,
) -> Response {
    set_favorite(cat_id, false, &state, REMOVE_MESSAGES).await
}

async fn set_favorite(
    cat_id: CatId,
    favorite: bool,
    state: &CatalogState,
    messages: FavoriteMessages,
) -> Response {
    let cat = match state
        .backend
        .update_cat(cat_id, CatUpdate::favorite(favorite))
        .await
        .inspect_err(|error| {
            tracing::error!("Could not set favorite={favorite} for cat {cat_id}: {error}")
        }) {
        Ok(cat) => cat,
        Err(error) => return error.into_alert_response(messages.failure),
    };

    match state.change_and_render(|catalog| {
        catalog.apply_update(cat);
    }) {
        Ok(section) => mutation_success_response(section, messages.success),
        Err(error) => error.into_alert_response(messages.failure),
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use scraper::Selector;

    use crate::{
        cat::{CatalogTab, add_favorite_endpoint, remove_favorite_endpoint},
        endpoints::{self, format_endpoint},
        test_utils::{
            assert_alert_error_response, assert_alert_text, assert_hx_endpoint, assert_status_ok,
            assert_valid_html, loaded_catalog_state, parse_html_fragment, sample_cat,
        },
    };

    #[tokio::test]
    async fn added_favorite_shows_in_both_views() {
        let (backend, state) = loaded_catalog_state(
            vec![
                sample_cat(1, "Tom", "Bengal", false),
                sample_cat(2, "Luna", "Sphynx", false),
            ],
            10,
        );

        let response = add_favorite_endpoint(Path(1), State(state.clone())).await;

        assert_status_ok(&response);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        assert_alert_text(&html, "Cat added to favorites");
        let remove_button = html
            .select(&Selector::parse("[data-cat-card='1'] button[hx-delete]").unwrap())
            .next()
            .expect("No remove from favorites button");
        assert_hx_endpoint(
            &remove_button,
            &format_endpoint(endpoints::FAVORITE_CAT_API, 1),
            "hx-delete",
        );
        assert!(backend.cats()[0].favorite);

        let mut catalog = state.catalog.lock().unwrap();
        assert!(catalog.get(1).unwrap().favorite);
        catalog.set_tab(CatalogTab::Favorites);
        let favorite_ids = catalog.view().cats.iter().map(|cat| cat.id).collect::<Vec<_>>();
        assert_eq!(favorite_ids, [1]);
    }

    #[tokio::test]
    async fn removed_favorite_leaves_favorites_view() {
        let (backend, state) = loaded_catalog_state(vec![sample_cat(1, "Tom", "Bengal", true)], 10);
        state.catalog.lock().unwrap().set_tab(CatalogTab::Favorites);

        let response = remove_favorite_endpoint(Path(1), State(state.clone())).await;

        assert_status_ok(&response);
        let html = parse_html_fragment(response).await;
        assert_alert_text(&html, "Cat removed from favorites");
        assert!(html.select(&Selector::parse("[data-cat-card]").unwrap()).next().is_none());
        assert!(!backend.cats()[0].favorite);
        assert!(!state.catalog.lock().unwrap().get(1).unwrap().favorite);
    }

    #[tokio::test]
    async fn failed_favorite_leaves_flag_unchanged() {
        let (backend, state) = loaded_catalog_state(vec![sample_cat(1, "Tom", "Bengal", false)], 10);
        backend.set_failing(true);

        let response = add_favorite_endpoint(Path(1), State(state.clone())).await;

        assert_alert_error_response(&response, StatusCode::BAD_GATEWAY);
        let html = parse_html_fragment(response).await;
        assert_alert_text(&html, "Failed to add to favorites");
        assert!(!state.catalog.lock().unwrap().get(1).unwrap().favorite);
    }
}
