//! # Quote Errors
//!
//! Error types for quote requests and their HTTP mapping.
//!
//! Two body shapes are in use: most failures reply with a bare text message,
//! while a missing quote on delete and an unknown endpoint reply with the
//! `{"message": ...}` envelope. Every reply is labelled `application/json`.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use super::model::{MessageResponse, QuoteId};

/// Result type for quote operations
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Quote request errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Body absent or not decodable as a quote payload
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Body decoded but a required field is missing or empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Path identifier is not an integer
    #[error("Invalid ID: {0}")]
    InvalidId(String),

    /// Random sample requested from an empty store
    #[error("No quotes available")]
    NoQuotes,

    /// Delete of an identifier that is not stored
    #[error("Quote not found: {0}")]
    QuoteNotFound(QuoteId),

    /// No route matches the method and path
    #[error("Endpoint not found")]
    EndpointNotFound,
}

impl QuoteError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            QuoteError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            QuoteError::MissingField(_) => StatusCode::BAD_REQUEST,
            QuoteError::InvalidId(_) => StatusCode::BAD_REQUEST,

            // 404 Not Found
            QuoteError::NoQuotes => StatusCode::NOT_FOUND,
            QuoteError::QuoteNotFound(_) => StatusCode::NOT_FOUND,
            QuoteError::EndpointNotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Message sent to the client
    pub fn public_message(&self) -> &'static str {
        match self {
            QuoteError::InvalidJson(_) | QuoteError::MissingField(_) => "Invalid JSON",
            QuoteError::InvalidId(_) => "Invalid ID",
            QuoteError::NoQuotes => "No quotes available",
            QuoteError::QuoteNotFound(_) => "Quote not found",
            QuoteError::EndpointNotFound => "Endpoint not found",
        }
    }

    /// Whether the body is the `{"message": ...}` envelope instead of bare text
    pub fn uses_envelope(&self) -> bool {
        matches!(
            self,
            QuoteError::QuoteNotFound(_) | QuoteError::EndpointNotFound
        )
    }
}

impl IntoResponse for QuoteError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.public_message();

        if self.uses_envelope() {
            return (status, Json(MessageResponse::new(message))).into_response();
        }

        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            message,
        )
            .into_response()
    }
}
