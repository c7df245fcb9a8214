//! HTTP error mapping: RFC-9457 Problem Details plus the bare not-found body

use crate::contract::ContactsError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Detail message for every identifier-scoped miss
pub const CONTACT_NOT_FOUND: &str = "Contact not found";

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// A URI reference that identifies the specific occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Body of every 404 response: `{"detail": "Contact not found"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NotFoundBody {
    #[schema(example = "Contact not found")]
    pub detail: String,
}

impl Default for NotFoundBody {
    fn default() -> Self {
        Self {
            detail: CONTACT_NOT_FOUND.to_string(),
        }
    }
}

/// Error returned by the REST handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    NotFound(NotFoundBody),
    Problem(Problem),
}

impl From<Problem> for ApiError {
    fn from(problem: Problem) -> Self {
        Self::Problem(problem)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(body) => (StatusCode::NOT_FOUND, Json(body)).into_response(),
            Self::Problem(problem) => problem.into_response(),
        }
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Map domain errors to HTTP responses
pub fn map_domain_error(error: ContactsError) -> ApiError {
    match error {
        ContactsError::NotFound { .. } => ApiError::NotFound(NotFoundBody::default()),

        ContactsError::Validation { message } => {
            Problem::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error")
                .with_detail(message)
                .into()
        }

        ContactsError::Storage { .. } => Problem::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
        )
        .with_detail("An unexpected error occurred")
        .into(),
    }
}

/// Map an axum extractor rejection (body, query, path) to a validation Problem
pub fn map_rejection(rejection: impl std::fmt::Display) -> ApiError {
    map_domain_error(ContactsError::validation(rejection.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_bare_detail() {
        let error = map_domain_error(ContactsError::not_found(9999));
        assert_eq!(error, ApiError::NotFound(NotFoundBody::default()));

        let body = serde_json::to_value(NotFoundBody::default()).unwrap();
        assert_eq!(body, serde_json::json!({"detail": "Contact not found"}));
    }

    #[test]
    fn test_validation_maps_to_problem() {
        let ApiError::Problem(problem) = map_domain_error(ContactsError::validation("bad skip"))
        else {
            panic!("validation errors are Problem documents");
        };
        assert_eq!(problem.status, 422);
        assert_eq!(problem.detail.as_deref(), Some("bad skip"));
    }
}
