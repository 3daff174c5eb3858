//! Web-layer error types.
//!
//! Everything that can go wrong between the socket and a handler is
//! represented here. Translating these into wire responses is left to the
//! application, which owns its response format.

use std::collections::HashMap;
use thiserror::Error;

/// Field-level validation failures, collected from the `validator` crate.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    /// Map of field names to their error messages.
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// Add an error message for a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Convert from the `validator` crate's error type.
    pub fn from_validator(errors: validator::ValidationErrors) -> Self {
        let mut result = Self::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("validation failed for field '{}'", field));
                result.add(field.to_string(), message);
            }
        }
        result
    }

    /// Flatten into a single human-readable line. Fields are sorted so the
    /// output is stable.
    pub fn to_message(&self) -> String {
        let mut fields: Vec<_> = self.errors.iter().collect();
        fields.sort_by_key(|(field, _)| field.as_str());
        fields
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_message())
    }
}

impl std::error::Error for ValidationErrors {}

/// Errors produced by the web layer itself.
#[derive(Debug, Error)]
pub enum Error {
    /// A route parameter the handler expected was not captured.
    #[error("missing required parameter: {param_name}")]
    MissingParam { param_name: String },

    /// A route parameter could not be parsed to the expected type.
    #[error("invalid parameter '{param}': expected {expected_type}")]
    InvalidParam {
        param: String,
        expected_type: &'static str,
    },

    /// The request body could not be read off the wire.
    #[error("failed to read request body: {0}")]
    Body(String),

    /// The request body was read but could not be deserialized.
    #[error("failed to parse request body: {0}")]
    Parse(String),

    /// The parsed body failed field validation.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("database error: {0}")]
    Database(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn missing_param(name: impl Into<String>) -> Self {
        Self::MissingParam {
            param_name: name.into(),
        }
    }

    pub fn invalid_param(param: impl Into<String>, expected_type: &'static str) -> Self {
        Self::InvalidParam {
            param: param.into(),
            expected_type,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Default HTTP status for this error kind.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingParam { .. }
            | Self::InvalidParam { .. }
            | Self::Parse(_)
            | Self::Validation(_) => 400,
            Self::Body(_) | Self::Database(_) | Self::Internal(_) => 500,
        }
    }
}

impl From<sea_orm::DbErr> for Error {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Database(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 3, message = "too short"))]
        name: String,
    }

    #[test]
    fn client_errors_map_to_400() {
        assert_eq!(Error::missing_param("id").status_code(), 400);
        assert_eq!(Error::invalid_param("abc", "i64").status_code(), 400);
        assert_eq!(Error::Parse("bad json".into()).status_code(), 400);
        assert_eq!(
            Error::Validation(ValidationErrors::new()).status_code(),
            400
        );
    }

    #[test]
    fn server_errors_map_to_500() {
        assert_eq!(Error::Body("connection reset".into()).status_code(), 500);
        assert_eq!(Error::Database("down".into()).status_code(), 500);
        assert_eq!(Error::internal("boom").status_code(), 500);
    }

    #[test]
    fn validator_failures_flatten_to_a_message() {
        let probe = Probe { name: "ab".into() };
        let errors = ValidationErrors::from_validator(probe.validate().unwrap_err());
        assert_eq!(errors.to_message(), "name: too short");
    }
}
