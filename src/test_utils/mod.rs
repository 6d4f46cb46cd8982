#![allow(missing_docs)]

pub(crate) mod backend;
pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use backend::{FakeCatBackend, catalog_state_with, loaded_catalog_state, sample_cat};
pub(crate) use form::{
    assert_form_input, assert_form_input_with_value, assert_form_submit_button,
    assert_hx_endpoint, must_get_form,
};
pub(crate) use html::{
    assert_alert_text, assert_valid_html, cat_card_ids, parse_html_document, parse_html_fragment,
};
pub(crate) use http::{
    assert_alert_error_response, assert_content_type, assert_status_ok, get_header,
};
