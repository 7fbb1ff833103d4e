//! Error types for the server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    /// Request body failed schema validation.
    #[error("Invalid input data: {0}")]
    InvalidInput(String),

    #[error("Model not loaded. Please restart the server.")]
    ModelNotLoaded,

    #[error("Prediction failed: {0}")]
    PredictionFailed(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ServerError::ModelNotLoaded => {
                tracing::error!("Request rejected: classifier not loaded");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ServerError::PredictionFailed(msg) => {
                tracing::error!(detail = %msg, "Inference failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "detail": self.to_string(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
