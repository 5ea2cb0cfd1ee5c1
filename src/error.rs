//! Error types for sketchspark

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Required configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("Seed source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Seed persistence failed: {0}")]
    SeedPersistence(String),

    #[error("Color provider unreachable: {0}")]
    ProviderUnavailable(String),

    #[error("Color provider returned malformed data: {0}")]
    ProviderMalformed(String),

    #[error("No challenges available")]
    NoChallenges,

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServiceError {
    /// HTTP status this error maps to at the handler boundary
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::ProviderUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::ProviderMalformed(_) => StatusCode::BAD_GATEWAY,
            ServiceError::NoChallenges => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({ "detail": self.to_string() });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ServiceError::ProviderUnavailable("timeout".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ServiceError::ProviderMalformed("bad shape".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ServiceError::NoChallenges.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::Database("locked".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
