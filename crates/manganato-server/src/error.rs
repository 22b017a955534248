use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use manganato_core::error::AppError;

use crate::dto::ErrorResponse;

pub const INVALID_PAGE: &str = "Invalid page number";
pub const FETCH_DATA_FAILED: &str = "Failed to fetch manga data";
pub const FETCH_DETAILS_FAILED: &str = "Failed to fetch manga details";
pub const SEARCH_FAILED: &str = "Failed to perform manga search";

/// An [`AppError`] paired with the generic message shown to the caller.
///
/// The underlying cause is logged, never serialized.
#[derive(Debug)]
pub struct ApiError {
    source: AppError,
    message: &'static str,
}

impl ApiError {
    pub fn new(source: AppError, message: &'static str) -> Self {
        Self { source, message }
    }

    pub fn invalid_page(raw: &str) -> Self {
        Self::new(AppError::InvalidPage(raw.to_string()), INVALID_PAGE)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self.source {
            AppError::InvalidPage(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "scrape_error"),
        };

        if status.is_server_error() {
            tracing::error!(error = %self.source, "{}", self.message);
        } else {
            tracing::debug!(error = %self.source, "Rejected request");
        }

        let body = ErrorResponse {
            error: error_type.to_string(),
            message: self.message.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}
