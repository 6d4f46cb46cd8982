use axum::{body::Body, response::Response};
use scraper::{Html, Selector};

use crate::cat::CatId;

async fn body_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not get response body");

    String::from_utf8_lossy(&body).to_string()
}

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    Html::parse_document(&body_text(response).await)
}

pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    Html::parse_fragment(&body_text(response).await)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// The IDs of the cat cards in `html`, in the order they are shown.
#[track_caller]
pub(crate) fn cat_card_ids(html: &Html) -> Vec<CatId> {
    html.select(&Selector::parse("[data-cat-card]").unwrap())
        .map(|card| {
            card.value()
                .attr("data-cat-card")
                .expect("card missing data-cat-card")
                .parse()
                .expect("card ID is not a number")
        })
        .collect()
}

#[track_caller]
pub(crate) fn assert_alert_text(html: &Html, want: &str) {
    let alert = html
        .select(&Selector::parse("[data-alert]").unwrap())
        .next()
        .expect("No alert found")
        .text()
        .collect::<String>();

    assert!(
        alert.contains(want),
        "want alert containing {want:?}, got {alert:?}"
    );
}
