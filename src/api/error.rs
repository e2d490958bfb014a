use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::logging::ErrorLogger;

pub const BUCKET_REQUIRED: &str = "bucket query parameter is required";
pub const SINGLE_BUCKET_REQUIRED: &str = "no more than one bucket must be supplied";
pub const BUCKET_OR_ID_REQUIRED: &str = "bucket or id query parameter is required";
pub const MALFORMED_BODY: &str = "request body is not valid JSON for this resource";
pub const MALFORMED_QUERY: &str = "query string is malformed";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

/// Failure outcome of a handler.
///
/// Client mistakes carry a message; storage failures carry nothing so that
/// no internal detail reaches the response body.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(&'static str),
    Internal,
}

impl ApiError {
    /// Report `err` to `logger` and turn it into a 500
    pub fn storage(logger: &dyn ErrorLogger, err: StoreError) -> Self {
        logger.error(&err);
        ApiError::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
            }
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

/// Decode a JSON request body. Any failure is the client's.
pub fn parse_json_body<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|_| ApiError::BadRequest(MALFORMED_BODY))
}
