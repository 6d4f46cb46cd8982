//! Alert system for displaying success and error messages to users.
//!
//! Alerts are transient notifications. They are swapped into the
//! `#alert-container` element and removed again by `static/app.js` after a
//! few seconds.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::{HxReswap, HxRetarget, SwapOption};
use maud::{Markup, html};

/// The ID of the element that alerts are swapped into.
pub const ALERT_CONTAINER_ID: &str = "alert-container";

/// A notification shown to the user after an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// The action succeeded.
    SuccessSimple { message: String },
    /// The action failed, with an explanation of what went wrong.
    Error { message: String, details: String },
    /// The action failed.
    ErrorSimple { message: String },
}

impl Alert {
    /// Render the alert on its own, for placing inside the alert container.
    pub fn into_html(self) -> Markup {
        let (style, message, details) = match self {
            Alert::SuccessSimple { message } => (SUCCESS_STYLE, message, String::new()),
            Alert::Error { message, details } => (ERROR_STYLE, message, details),
            Alert::ErrorSimple { message } => (ERROR_STYLE, message, String::new()),
        };

        html!(
            div class=(style) role="alert" data-alert="true"
            {
                p class="font-medium" { (message) }

                @if !details.is_empty() {
                    p class="mt-1" { (details) }
                }

                button
                    type="button"
                    class="absolute top-2 right-3 text-lg leading-none"
                    aria-label="Dismiss"
                    onclick="this.closest('[data-alert]').remove()"
                {
                    "×"
                }
            }
        )
    }

    /// Render the alert wrapped in the alert container as an htmx out-of-band swap.
    ///
    /// Use this to add a notification to a response whose main content targets
    /// another element.
    pub fn into_oob_html(self) -> Markup {
        html!(
            div id=(ALERT_CONTAINER_ID) hx-swap-oob="true" class=(ALERT_CONTAINER_STYLE)
            {
                (self.into_html())
            }
        )
    }

    /// Respond with this alert and an error status, retargeting htmx to the alert container.
    pub fn into_error_response(self, status_code: StatusCode) -> Response {
        (
            status_code,
            HxRetarget(format!("#{ALERT_CONTAINER_ID}")),
            HxReswap(SwapOption::InnerHtml),
            self.into_html(),
        )
            .into_response()
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        match self {
            Alert::Error { .. } | Alert::ErrorSimple { .. } => {
                self.into_error_response(StatusCode::INTERNAL_SERVER_ERROR)
            }
            alert => (StatusCode::OK, alert.into_oob_html()).into_response(),
        }
    }
}

/// Classes for the fixed container that alerts are displayed in.
pub const ALERT_CONTAINER_STYLE: &str = "w-full max-w-md px-4 fixed bottom-4 \
    left-1/2 -translate-x-1/2 z-50 space-y-2";

const SUCCESS_STYLE: &str = "relative p-4 text-sm rounded-lg shadow \
    text-green-800 bg-green-50 dark:bg-gray-800 dark:text-green-400";

const ERROR_STYLE: &str = "relative p-4 text-sm rounded-lg shadow \
    text-red-800 bg-red-50 dark:bg-gray-800 dark:text-red-400";
