use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Errors raised while reading the process configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid API_PORT: {0:?}")]
    InvalidPort(String),
}

/// Errors raised by the access token issuer.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token signing failed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
    #[error("Token is invalid: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

/// Errors returned to HTTP clients.
///
/// The display message is the only thing that ends up in the response body,
/// so internal causes must be logged before constructing one of these.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request body")]
    InvalidBody,
    #[error("roomName and identity are required")]
    MissingFields,
    #[error("Failed to generate token")]
    TokenGeneration,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody | ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::TokenGeneration => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
