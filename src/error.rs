use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    #[error("No image provided")]
    MissingUpload,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// A required request field was absent. `field` is the dot-joined JSON
    /// path reported back to the client.
    pub fn missing_field(field: &str) -> Self {
        AppError::Validation {
            message: format!("{field} is required"),
            field: Some(field.to_string()),
        }
    }

    /// The request body could not be deserialized into the expected shape.
    pub fn invalid_body(message: impl Into<String>) -> Self {
        AppError::Validation {
            message: message.into(),
            field: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation { message, field } => {
                let mut body = json!({ "message": message });
                if let Some(field) = field {
                    body["field"] = json!(field);
                }
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            AppError::MissingUpload => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "No image provided" })),
            )
                .into_response(),
            AppError::Internal(e) => {
                tracing::error!(error = %e, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
