//! Route table.

use std::sync::Arc;

use plinth::Router;

use crate::controllers::student;
use crate::services::StudentService;

pub fn routes(service: Arc<StudentService>) -> Router {
    let list = service.clone();
    let show = service.clone();
    let store = service.clone();
    let toggle = service.clone();
    let destroy = service;

    Router::new()
        .get("/api/get-student", move |req| student::index(list.clone(), req))
        .get("/api/get-student/{id}", move |req| {
            student::show(show.clone(), req)
        })
        .post("/api/add-student", move |req| {
            student::store(store.clone(), req)
        })
        .post("/api/update-student/{id}", move |req| {
            student::toggle(toggle.clone(), req)
        })
        .post("/api/del-student/{id}", move |req| {
            student::destroy(destroy.clone(), req)
        })
}
