use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("malformed document: {0}")]
    MalformedDocument(String),

    #[error("desired skills must not be empty")]
    EmptyDesiredSkills,

    #[error("extraction failed: {0}")]
    Extraction(String),

    #[error("bad upload: {0}")]
    BadUpload(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for EvalError {
    fn into_response(self) -> Response {
        let status = match &self {
            EvalError::UnsupportedFormat(_)
            | EvalError::EmptyDesiredSkills
            | EvalError::MalformedDocument(_)
            | EvalError::BadUpload(_) => StatusCode::BAD_REQUEST,
            EvalError::Extraction(_) | EvalError::Io(_) => {
                tracing::error!("evaluation failed: {}", &self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
