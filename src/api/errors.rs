use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Entity not found")]
    NotFound,

    #[error("Request error: {0}")]
    Request(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.status() == Some(StatusCode::NOT_FOUND) {
            ApiError::NotFound
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_status() || err.is_connect() || err.is_timeout() {
            ApiError::Request(err.to_string())
        } else {
            ApiError::Unexpected(format!("Unexpected request error: {err}"))
        }
    }
}
