//! HTTP error mapping

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use focus_application::GeneratePhrasesError;
use thiserror::Error;

use super::dto::ErrorBody;

/// Errors returned by the HTTP handlers
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed body, missing goals or a blank goal
    #[error("{0}")]
    Validation(String),

    #[error("limit exceeded")]
    LimitExceeded,

    #[error(transparent)]
    Generation(#[from] GeneratePhrasesError),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::LimitExceeded => StatusCode::BAD_REQUEST,
            Self::Generation(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Validation("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::LimitExceeded.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::from(GeneratePhrasesError::NoPhrasesGenerated).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Internal("pool".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::LimitExceeded.to_string(), "limit exceeded");
        assert_eq!(
            ApiError::from(GeneratePhrasesError::NoPhrasesGenerated).to_string(),
            "no phrases generated"
        );
    }
}
