//! HTTP handlers for the student task endpoints.
//!
//! Handlers parse and validate the request, call the service, and wrap the
//! outcome in the response envelope. Domain errors convert to responses
//! through the central translator in `errors`, so `?` is all the failure
//! handling a handler needs.

use std::sync::Arc;

use plinth::http::{FormRequest, HttpResponse, Request, Response};
use tracing::info;

use crate::errors::ServiceError;
use crate::requests::CreateStudentRequest;
use crate::responses::ApiResponse;
use crate::services::StudentService;

/// GET /api/get-student
pub async fn index(service: Arc<StudentService>, _req: Request) -> Response {
    let students = service.list().await?;
    ApiResponse::success("query successful", students).into_response()
}

/// GET /api/get-student/{id}
pub async fn show(service: Arc<StudentService>, req: Request) -> Response {
    let id = parse_id(&req)?;
    let student = service.get(id).await?;
    ApiResponse::success("query successful", student).into_response()
}

/// POST /api/add-student
pub async fn store(service: Arc<StudentService>, req: Request) -> Response {
    let form = CreateStudentRequest::extract(req)
        .await
        .map_err(ServiceError::from)?;
    info!(value = %form.value, "received create request");

    let student = service.create(form).await?;
    ApiResponse::created("student added", student).into_response()
}

/// POST /api/update-student/{id}
pub async fn toggle(service: Arc<StudentService>, req: Request) -> Response {
    let id = parse_id(&req)?;
    let student = service.toggle_status(id).await?;
    ApiResponse::success("student status updated", student).into_response()
}

/// POST /api/del-student/{id}
pub async fn destroy(service: Arc<StudentService>, req: Request) -> Response {
    let id = parse_id(&req)?;
    if service.delete(id).await? {
        ApiResponse::success("student deleted", true).into_response()
    } else {
        Err(ServiceError::NotFound.into())
    }
}

fn parse_id(req: &Request) -> Result<i64, HttpResponse> {
    req.param_as::<i64>("id")
        .map_err(|err| ServiceError::from(err).into())
}
