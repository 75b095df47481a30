use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Shared handler result type.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to HTTP clients as plain-text bodies.
#[derive(Debug, Error, Clone)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    /// Collaborator failure; the message is `"<context>: <cause>"`.
    #[error("{context}: {cause}")]
    Internal {
        context: &'static str,
        cause: Arc<anyhow::Error>,
    },
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal(context: &'static str, err: impl Into<anyhow::Error>) -> Self {
        Self::Internal {
            context,
            cause: Arc::new(err.into()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Internal { cause, .. } = &self {
            error!(error = %cause, "request failed");
        }
        (status, self.to_string()).into_response()
    }
}

/// List envelope. Paging fields are reserved and currently always null.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ListResult<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub start: Option<u64>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub size: Option<u64>,
}

impl<T> ListResult<T> {
    pub fn new(data: Vec<T>) -> Self {
        let total = data.len() as u64;
        Self {
            data,
            total,
            start: None,
            sort: None,
            order: None,
            size: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::json;

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn internal_errors_carry_context_and_cause() {
        let err = ApiError::internal("Error saving employee", anyhow::anyhow!("boom"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "Error saving employee: boom");
    }

    #[tokio::test]
    async fn client_errors_are_plain_text() {
        let response = ApiError::not_found("Employee with ID 4 not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "Employee with ID 4 not found");

        let response = ApiError::bad_request("nope").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn list_envelope_counts_and_reserves_paging_fields() {
        let envelope = ListResult::new(vec!["a", "b"]);
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "data": ["a", "b"],
                "total": 2,
                "start": null,
                "sort": null,
                "order": null,
                "size": null,
            })
        );
    }
}
