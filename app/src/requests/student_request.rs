//! Inbound request payloads.

use plinth::http::FormRequest;
use serde::Deserialize;
use validator::Validate;

/// Body of `POST /api/add-student`.
///
/// `isCompleted` may be omitted entirely and defaults to false. An
/// explicit `null` is rejected at parse time, as is a missing `value`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    #[validate(length(
        min = 1,
        max = 1000,
        message = "value must be between 1 and 1000 characters"
    ))]
    pub value: String,

    #[serde(default)]
    pub is_completed: bool,
}

impl FormRequest for CreateStudentRequest {}
