use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{debug, error};

/// Errors a handler or the auth gate can answer with.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Non trouvé")]
    NotFound,

    /// No usable bearer header.
    #[error("unauthenticated")]
    Unauthenticated,

    /// Bearer token present but rejected.
    #[error("forbidden")]
    Forbidden,

    #[error("{0}")]
    InvalidCredentials(&'static str),

    /// Request body missing, not JSON, or not the expected shape.
    #[error("Requête invalide")]
    InvalidBody(#[from] JsonRejection),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unauthenticated | ApiError::InvalidCredentials(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Unauthenticated | ApiError::Forbidden => status.into_response(),
            ApiError::Internal(e) => {
                error!(error = %e, "request failed");
                (status, Json(json!({ "error": "Erreur serveur" }))).into_response()
            }
            ApiError::InvalidBody(rejection) => {
                debug!(reason = %rejection.body_text(), "rejected request body");
                (status, Json(json!({ "error": "Requête invalide" }))).into_response()
            }
            other => (status, Json(json!({ "error": other.to_string() }))).into_response(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        debug!(reason = %rejection.body_text(), "unparseable path parameter");
        ApiError::NotFound
    }
}
