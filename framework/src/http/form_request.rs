//! Validated request payloads.
//!
//! Implement [`FormRequest`] on a deserializable, validatable struct to get
//! body parsing and field validation in one step before any domain logic
//! runs.

use super::Request;
use crate::error::{Error, ValidationErrors};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use validator::Validate;

/// Trait for typed request bodies.
///
/// ```rust,ignore
/// #[derive(Deserialize, Validate)]
/// pub struct CreatePostRequest {
///     #[validate(length(min = 1))]
///     pub title: String,
/// }
///
/// impl FormRequest for CreatePostRequest {}
///
/// // In a handler:
/// let form = CreatePostRequest::extract(req).await?;
/// ```
#[async_trait]
pub trait FormRequest: Sized + DeserializeOwned + Validate + Send {
    /// Parse the JSON body and validate the result.
    async fn extract(req: Request) -> Result<Self, Error> {
        let data: Self = req.json().await?;

        if let Err(errors) = data.validate() {
            return Err(Error::Validation(ValidationErrors::from_validator(errors)));
        }

        Ok(data)
    }
}
