//! Uniform response envelope shared by every endpoint.

use plinth::http::{HttpResponse, Response};
use serde::Serialize;
use tracing::error;

/// Wire envelope: `{ code, message, data }`. The code mirrors the HTTP
/// status of the response carrying it.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            code: 200,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            code: 201,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn into_http(self) -> HttpResponse {
        match serde_json::to_value(&self) {
            Ok(body) => HttpResponse::json(body).status(self.code),
            Err(err) => {
                error!(error = %err, "failed to serialize response envelope");
                HttpResponse::json(serde_json::json!({
                    "code": 500,
                    "message": "internal server error",
                    "data": null,
                }))
                .status(500)
            }
        }
    }

    pub fn into_response(self) -> Response {
        Ok(self.into_http())
    }
}
