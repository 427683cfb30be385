use std::fmt;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use crate::models::ErrorResponse;

/// Generic message returned for every server-side failure. Detail stays in
/// the logs and never reaches the client.
pub const GENERIC_ERROR: &str = "Failed to generate image";

#[derive(Debug)]
pub enum PixgenError {
    ConfigError(String),
    InvalidPrompt(String),
    PayloadError(String),
    InternalError(String),
}

impl fmt::Display for PixgenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixgenError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            PixgenError::InvalidPrompt(msg) => write!(f, "Invalid prompt: {}", msg),
            PixgenError::PayloadError(msg) => write!(f, "Payload error: {}", msg),
            PixgenError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for PixgenError {}

pub type Result<T> = std::result::Result<T, PixgenError>;

impl actix_web::ResponseError for PixgenError {
    fn status_code(&self) -> StatusCode {
        match self {
            PixgenError::InvalidPrompt(_) => StatusCode::BAD_REQUEST,
            PixgenError::ConfigError(_)
            | PixgenError::PayloadError(_)
            | PixgenError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            PixgenError::InvalidPrompt(msg) => {
                log::warn!("Rejecting generation request: {}", self);
                msg.clone()
            }
            _ => {
                log::error!("Generation request failed: {}", self);
                GENERIC_ERROR.to_string()
            }
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse { error })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn invalid_prompt_maps_to_bad_request() {
        let err = PixgenError::InvalidPrompt("Prompt is required".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn payload_errors_map_to_internal_server_error() {
        let err = PixgenError::PayloadError("expected value at line 1".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn display_includes_detail() {
        let err = PixgenError::ConfigError("invalid PORT value: abc".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: invalid PORT value: abc"
        );
    }
}
