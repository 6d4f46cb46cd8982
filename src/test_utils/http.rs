use axum::{body::Body, http::StatusCode, response::Response};

#[track_caller]
pub(crate) fn assert_status_ok(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::OK);
}

#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, content_type: &str) {
    assert_eq!(get_header(response, "content-type"), content_type);
}

#[track_caller]
pub(crate) fn get_header(response: &Response<Body>, header_name: &str) -> String {
    response
        .headers()
        .get(header_name)
        .unwrap_or_else(|| panic!("Headers missing {header_name}"))
        .to_str()
        .expect("Could not convert to str")
        .to_string()
}

/// Check that `response` is an error alert that htmx swaps into the alert
/// container instead of the catalog.
#[track_caller]
pub(crate) fn assert_alert_error_response(response: &Response<Body>, status_code: StatusCode) {
    assert_eq!(response.status(), status_code);
    assert_eq!(get_header(response, "hx-retarget"), "#alert-container");
    assert_eq!(get_header(response, "hx-reswap"), "innerHTML");
}
