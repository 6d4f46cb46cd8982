//! Application router configuration.

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    cat::{
        add_favorite_endpoint, create_cat_endpoint, delete_cat_endpoint, get_catalog_page,
        get_edit_cat_form, get_index_page, get_new_cat_form, remove_favorite_endpoint,
        set_breed_filter_endpoint, set_page_endpoint, set_search_endpoint, set_tab_endpoint,
        update_cat_endpoint,
    },
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::CATALOG_VIEW, get(get_catalog_page))
        .route(endpoints::NEW_CAT_VIEW, get(get_new_cat_form))
        .route(endpoints::EDIT_CAT_VIEW, get(get_edit_cat_form))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let cat_routes = Router::new()
        .route(endpoints::CATS_API, post(create_cat_endpoint))
        .route(
            endpoints::CAT_API,
            put(update_cat_endpoint).delete(delete_cat_endpoint),
        )
        .route(
            endpoints::FAVORITE_CAT_API,
            post(add_favorite_endpoint).delete(remove_favorite_endpoint),
        );

    let view_routes = Router::new()
        .route(endpoints::VIEW_BREED, put(set_breed_filter_endpoint))
        .route(endpoints::VIEW_SEARCH, put(set_search_endpoint))
        .route(endpoints::VIEW_PAGE, put(set_page_endpoint))
        .route(endpoints::VIEW_TAB, put(set_tab_endpoint));

    page_routes
        .merge(cat_routes)
        .merge(view_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

#[cfg(test)]
mod routing_tests {
    use std::sync::{Arc, Mutex};

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use scraper::Html;

    use crate::{
        AppState, PaginationConfig,
        cat::{CatFormData, Catalog},
        endpoints::{self, format_endpoint},
        routing::build_router,
        test_utils::{FakeCatBackend, assert_alert_text, cat_card_ids, sample_cat},
    };

    fn test_server(backend: Arc<FakeCatBackend>) -> TestServer {
        let pagination_config = PaginationConfig {
            page_size: 2,
            ..Default::default()
        };
        let state = AppState {
            backend,
            catalog: Arc::new(Mutex::new(Catalog::new(pagination_config.page_size))),
            pagination_config,
        };

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    fn three_cats() -> Arc<FakeCatBackend> {
        Arc::new(FakeCatBackend::with_cats(vec![
            sample_cat(1, "Tom", "Bengal", false),
            sample_cat(2, "Luna", "Sphynx", true),
            sample_cat(3, "Oscar", "Bengal", false),
        ]))
    }

    #[tokio::test]
    async fn root_redirects_to_catalog() {
        let server = test_server(three_cats());

        let response = server.get(endpoints::ROOT).await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), endpoints::CATALOG_VIEW);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = test_server(three_cats());

        let response = server.get("/dogs").await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn catalog_page_then_paging() {
        let server = test_server(three_cats());

        let page = server.get(endpoints::CATALOG_VIEW).await;
        page.assert_status_ok();
        assert_eq!(cat_card_ids(&Html::parse_document(&page.text())), [1, 2]);

        let next_page = server
            .put(endpoints::VIEW_PAGE)
            .form(&[("page", "2")])
            .await;
        next_page.assert_status_ok();
        assert_eq!(cat_card_ids(&Html::parse_fragment(&next_page.text())), [3]);
    }

    #[tokio::test]
    async fn breed_filter_resets_page() {
        let server = test_server(three_cats());
        server.get(endpoints::CATALOG_VIEW).await.assert_status_ok();
        server
            .put(endpoints::VIEW_PAGE)
            .form(&[("page", "2")])
            .await
            .assert_status_ok();

        let response = server
            .put(endpoints::VIEW_BREED)
            .form(&[("breed", "Bengal")])
            .await;

        response.assert_status_ok();
        assert_eq!(cat_card_ids(&Html::parse_fragment(&response.text())), [1, 3]);
    }

    #[tokio::test]
    async fn create_favorite_and_delete_round_trip() {
        let backend = three_cats();
        let server = test_server(backend.clone());
        server.get(endpoints::CATALOG_VIEW).await.assert_status_ok();

        let created = server
            .post(endpoints::CATS_API)
            .form(&CatFormData {
                name: "Mochi".to_owned(),
                breed: "Siamese".to_owned(),
                ..Default::default()
            })
            .await;
        created.assert_status_ok();
        assert_alert_text(
            &Html::parse_fragment(&created.text()),
            "Cat added successfully",
        );

        let favorite_url = format_endpoint(endpoints::FAVORITE_CAT_API, 4);
        server.post(&favorite_url).await.assert_status_ok();
        let favorites = server
            .put(endpoints::VIEW_TAB)
            .form(&[("tab", "favorites")])
            .await;
        assert_eq!(
            cat_card_ids(&Html::parse_fragment(&favorites.text())),
            [2, 4]
        );

        let deleted = server
            .delete(&format_endpoint(endpoints::CAT_API, 4))
            .await;
        deleted.assert_status_ok();
        assert_eq!(cat_card_ids(&Html::parse_fragment(&deleted.text())), [2]);
        assert!(backend.cats().iter().all(|cat| cat.id != 4));
    }

    #[tokio::test]
    async fn backend_failure_returns_bad_gateway_alert() {
        let backend = three_cats();
        let server = test_server(backend.clone());
        server.get(endpoints::CATALOG_VIEW).await.assert_status_ok();
        backend.set_failing(true);

        let response = server
            .delete(&format_endpoint(endpoints::CAT_API, 1))
            .await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        assert_eq!(response.header("hx-retarget"), "#alert-container");
        assert_alert_text(
            &Html::parse_fragment(&response.text()),
            "Failed to delete cat",
        );
    }
}
