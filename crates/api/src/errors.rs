use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use keystone_domain::DomainError;
use tracing::error;

use crate::dto::ErrorResponse;

/// Handler error: a `DomainError` on its way to becoming a 5xx response.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_unavailable() {
            StatusCode::SERVICE_UNAVAILABLE
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        error!(error = %self.0, status = status.as_u16(), "Request failed");
        (status, Json(ErrorResponse::new(self.0.to_string()))).into_response()
    }
}
