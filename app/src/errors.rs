//! Domain errors and their translation to wire responses.
//!
//! Every handler funnels failures through `From<ServiceError> for
//! HttpResponse`, so identical error kinds always present identically on
//! the wire. Server-side causes are logged here and never leaked to the
//! client.

use plinth::http::HttpResponse;
use thiserror::Error;
use tracing::error;

use crate::responses::ApiResponse;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed or missing input.
    #[error("{0}")]
    Validation(String),

    /// The referenced id does not exist.
    #[error("student not found")]
    NotFound,

    /// The storage layer failed.
    #[error("storage unavailable: {0}")]
    Storage(String),

    /// Anything else.
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound => 404,
            Self::Storage(_) | Self::Internal(_) => 500,
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<plinth::Error> for ServiceError {
    fn from(err: plinth::Error) -> Self {
        match &err {
            plinth::Error::MissingParam { .. }
            | plinth::Error::InvalidParam { .. }
            | plinth::Error::Parse(_)
            | plinth::Error::Validation(_) => Self::Validation(err.to_string()),
            plinth::Error::Database(_) => Self::Storage(err.to_string()),
            plinth::Error::Body(_) | plinth::Error::Internal(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<ServiceError> for HttpResponse {
    fn from(err: ServiceError) -> Self {
        let status = err.status_code();
        let message = if status >= 500 {
            error!(error = %err, "request failed");
            "internal server error".to_string()
        } else {
            err.to_string()
        };
        ApiResponse::<()>::error(status, message).into_http()
    }
}
