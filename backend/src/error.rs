//! Error type shared by the HTTP handlers.
//!
//! Client mistakes turn into `400 {message}` and are not treated as faults.
//! Storage problems are logged here and reach the caller only as a generic
//! `500 {message}` naming the operation that failed.

use actix_web::error::{BlockingError, JsonPayloadError, ResponseError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use common::model::school::ErrorMessage;
use log::{debug, error};
use thiserror::Error;

/// Operation a storage failure happened in, used for the public message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Register,
    Fetch,
}

impl Operation {
    fn failure_message(self) -> &'static str {
        match self {
            Operation::Register => "Failed to register school",
            Operation::Fetch => "Failed to fetch schools",
        }
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("All fields are required")]
    MissingFields(Vec<&'static str>),
    #[error("Invalid request body: {0}")]
    InvalidPayload(String),
    #[error("storage error: {source}")]
    Storage {
        operation: Operation,
        #[source]
        source: rusqlite::Error,
    },
    #[error("blocking task failed: {1}")]
    Blocking(Operation, String),
}

impl ServiceError {
    pub fn storage(operation: Operation) -> impl FnOnce(rusqlite::Error) -> Self {
        move |source| ServiceError::Storage { operation, source }
    }

    pub fn blocking(operation: Operation) -> impl FnOnce(BlockingError) -> Self {
        move |e| ServiceError::Blocking(operation, e.to_string())
    }

    fn public_message(&self) -> String {
        match self {
            ServiceError::MissingFields(_) | ServiceError::InvalidPayload(_) => self.to_string(),
            ServiceError::Storage { operation, .. } | ServiceError::Blocking(operation, _) => {
                operation.failure_message().to_string()
            }
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::MissingFields(_) | ServiceError::InvalidPayload(_) => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::Storage { .. } | ServiceError::Blocking(..) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::MissingFields(fields) => debug!("rejected school, missing {:?}", fields),
            ServiceError::InvalidPayload(reason) => debug!("rejected payload: {}", reason),
            ServiceError::Storage { operation, source } => {
                error!("{}: {}", operation.failure_message(), source)
            }
            ServiceError::Blocking(operation, reason) => {
                error!("{}: {}", operation.failure_message(), reason)
            }
        }
        HttpResponse::build(self.status_code()).json(ErrorMessage::new(self.public_message()))
    }
}

/// `JsonConfig` error handler: malformed bodies get the same `{message}` shape.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ServiceError::InvalidPayload(err.to_string()).into()
}
