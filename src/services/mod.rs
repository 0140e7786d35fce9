use std::collections::HashMap;

use thiserror::Error;

use crate::api::errors::ApiError;

pub mod employees;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Unauthorized")]
    Unauthorized,

    /// Per-field messages for a submission blocked by validation.
    #[error("Validation failed")]
    Validation(HashMap<String, String>),

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
