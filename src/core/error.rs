// Centralized error handling for the storefront

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Errors returned by the backend HTTP client
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Failed to send request to {endpoint}: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned error status: {status}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("Failed to parse JSON response from {endpoint}: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

/// Errors that abort a workflow step without touching UI state
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Demo user {handle} not found")]
    UserNotFound { handle: String },

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors surfaced to the visitor by page handlers
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Failed to render page: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match &self {
            PageError::NotFound(what) => {
                let body = format!(
                    "<!doctype html><title>Not found</title><p>{} went cold. <a href=\"/\">Back to the chai</a></p>",
                    what
                );
                (StatusCode::NOT_FOUND, Html(body)).into_response()
            }
            PageError::Render(_) => {
                tracing::error!(error = %self, "Page rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = PageError::NotFound("Easter egg 9".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_render_error_maps_to_500() {
        let response = PageError::Render(askama::Error::Fmt).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_workflow_error_messages() {
        let err = WorkflowError::UserNotFound {
            handle: "@rvu_guest".to_string(),
        };
        assert_eq!(err.to_string(), "Demo user @rvu_guest not found");

        let err = WorkflowError::from(BackendError::Status {
            endpoint: "POST /api/orders",
            status: reqwest::StatusCode::BAD_GATEWAY,
        });
        assert_eq!(
            err.to_string(),
            "POST /api/orders returned error status: 502 Bad Gateway"
        );
    }
}
