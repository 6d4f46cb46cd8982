//! Defines the app level error type and conversions to rendered HTML pages and alerts.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError, not_found::NotFoundError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The cat backend could not be reached, e.g., the connection was refused
    /// or the request timed out.
    #[error("could not reach the cat backend: {0}")]
    BackendUnavailable(String),

    /// The cat backend answered with a non-success status code other than 404.
    #[error("the cat backend responded with status {0}")]
    BackendStatus(u16),

    /// The cat backend answered with a body that is not a valid cat record.
    #[error("could not decode the cat backend response: {0}")]
    InvalidBackendResponse(String),

    /// The requested resource was not found.
    ///
    /// For the backend this means it answered 404. Locally it means the record
    /// is not in the cached catalog.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Could not acquire the catalog lock
    #[error("could not acquire the catalog lock")]
    CatalogLockError,

    /// The HTTP client for the cat backend could not be configured.
    #[error("could not build the cat backend client: {0}")]
    ClientBuildError(String),
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            return Error::InvalidBackendResponse(value.to_string());
        }

        match value.status() {
            Some(status) if status.as_u16() == StatusCode::NOT_FOUND.as_u16() => Error::NotFound,
            Some(status) => Error::BackendStatus(status.as_u16()),
            None => Error::BackendUnavailable(value.to_string()),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::BackendUnavailable(_)
            | Error::BackendStatus(_)
            | Error::InvalidBackendResponse(_) => {
                tracing::error!("A request to the cat backend failed: {self}");
                InternalServerError {
                    description: "Cat Service Unavailable",
                    fix: "The cat service could not be reached. Check that it is running and try again.",
                }
                .into_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// The HTTP status to send to the browser when this error interrupts an action.
    pub(crate) fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::BackendUnavailable(_)
            | Error::BackendStatus(_)
            | Error::InvalidBackendResponse(_) => StatusCode::BAD_GATEWAY,
            Error::CatalogLockError | Error::ClientBuildError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Render this error as an alert with the headline `message`.
    ///
    /// The response retargets htmx to the alert container so the catalog
    /// already on screen is left untouched.
    pub(crate) fn into_alert_response(self, message: &str) -> Response {
        let details = match &self {
            Error::NotFound => "The cat could not be found. \
                Try refreshing the page to see if it has already been deleted."
                .to_owned(),
            Error::BackendUnavailable(_) => {
                "Could not reach the cat service, check that it is running.".to_owned()
            }
            Error::BackendStatus(status) => {
                format!("The cat service responded with status {status}.")
            }
            Error::InvalidBackendResponse(_) => {
                "The cat service sent a response that could not be read.".to_owned()
            }
            Error::CatalogLockError | Error::ClientBuildError(_) => {
                "An unexpected error occurred, check the server logs for more details.".to_owned()
            }
        };

        Alert::Error {
            message: message.to_owned(),
            details,
        }
        .into_error_response(self.status_code())
    }
}
