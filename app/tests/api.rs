//! End-to-end tests over a live server and a real database.

use std::sync::Arc;

use app::middleware::LoggingMiddleware;
use app::migrations::Migrator;
use app::routes;
use app::services::StudentService;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use plinth::database::{DatabaseConfig, DbConnection};
use plinth::Server;
use pretty_assertions::assert_eq;
use sea_orm_migration::MigratorTrait;
use serde_json::{json, Value};
use tokio::net::TcpListener;

type TestClient = Client<HttpConnector, Full<Bytes>>;

/// Boot the app against a fresh in-memory database on an OS-assigned port.
async fn start_server() -> String {
    let mut config = DatabaseConfig::with_url("sqlite::memory:");
    config.max_connections = 1;
    config.min_connections = 1;
    let db = DbConnection::connect(&config).await.unwrap();
    Migrator::up(db.inner(), None).await.unwrap();

    let service = Arc::new(StudentService::new(db));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = Server::new(routes::routes(service)).middleware(LoggingMiddleware);
    tokio::spawn(async move {
        let _ = server.serve(listener).await;
    });

    format!("http://{addr}")
}

fn client() -> TestClient {
    Client::builder(TokioExecutor::new()).build_http()
}

async fn send(
    client: &TestClient,
    method: &str,
    url: String,
    body: Option<Value>,
) -> (u16, Value) {
    let payload = body.map(|b| b.to_string()).unwrap_or_default();
    let request = hyper::Request::builder()
        .method(method)
        .uri(url)
        .header("content-type", "application/json")
        .body(Full::new(Bytes::from(payload)))
        .unwrap();

    let response = client.request(request).await.unwrap();
    let status = response.status().as_u16();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn full_walkthrough() {
    let base = start_server().await;
    let client = client();

    // Empty store lists cleanly.
    let (status, body) = send(&client, "GET", format!("{base}/api/get-student"), None).await;
    assert_eq!(status, 200);
    assert_eq!(body["code"], 200);
    assert_eq!(body["data"], json!([]));

    // Create.
    let (status, body) = send(
        &client,
        "POST",
        format!("{base}/api/add-student"),
        Some(json!({"value": "task A", "isCompleted": false})),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(body["code"], 201);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["value"], "task A");
    assert_eq!(body["data"]["isCompleted"], false);

    // List shows the one record.
    let (status, body) = send(&client, "GET", format!("{base}/api/get-student"), None).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["id"], 1);
    assert_eq!(body["data"][0]["value"], "task A");

    // Fetch by id.
    let (status, body) = send(&client, "GET", format!("{base}/api/get-student/1"), None).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["id"], 1);

    // Toggle flips the flag and advances updatedAt.
    let (status, body) = send(
        &client,
        "POST",
        format!("{base}/api/update-student/1"),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["isCompleted"], true);
    let created = chrono::DateTime::parse_from_rfc3339(body["data"]["createdAt"].as_str().unwrap())
        .unwrap();
    let updated = chrono::DateTime::parse_from_rfc3339(body["data"]["updatedAt"].as_str().unwrap())
        .unwrap();
    assert!(updated >= created);

    // Toggle back.
    let (status, body) = send(
        &client,
        "POST",
        format!("{base}/api/update-student/1"),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["isCompleted"], false);

    // Delete succeeds once.
    let (status, body) = send(&client, "POST", format!("{base}/api/del-student/1"), None).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"], json!(true));

    // The record is gone.
    let (status, body) = send(&client, "GET", format!("{base}/api/get-student/1"), None).await;
    assert_eq!(status, 404);
    assert_eq!(body["code"], 404);
    assert_eq!(body["message"], "student not found");
    assert_eq!(body["data"], Value::Null);

    // Deleting again reports nothing to delete.
    let (status, body) = send(&client, "POST", format!("{base}/api/del-student/1"), None).await;
    assert_eq!(status, 404);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn create_defaults_is_completed_when_absent() {
    let base = start_server().await;
    let client = client();

    let (status, body) = send(
        &client,
        "POST",
        format!("{base}/api/add-student"),
        Some(json!({"value": "buy milk"})),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(body["data"]["isCompleted"], false);
    assert!(body["data"]["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn create_rejects_bad_bodies_with_400() {
    let base = start_server().await;
    let client = client();

    // Empty value.
    let (status, body) = send(
        &client,
        "POST",
        format!("{base}/api/add-student"),
        Some(json!({"value": ""})),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], 400);

    // Blank value passes length validation but fails the service rule.
    let (status, body) = send(
        &client,
        "POST",
        format!("{base}/api/add-student"),
        Some(json!({"value": "   "})),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "value must not be blank");

    // Malformed JSON.
    let request = hyper::Request::builder()
        .method("POST")
        .uri(format!("{base}/api/add-student"))
        .header("content-type", "application/json")
        .body(Full::new(Bytes::from_static(b"not json")))
        .unwrap();
    let response = client.request(request).await.unwrap();
    assert_eq!(response.status().as_u16(), 400);

    // Nothing was persisted.
    let (_, body) = send(&client, "GET", format!("{base}/api/get-student"), None).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn non_numeric_ids_are_client_errors() {
    let base = start_server().await;
    let client = client();

    let (status, body) = send(&client, "GET", format!("{base}/api/get-student/abc"), None).await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], 400);

    let (status, _) = send(
        &client,
        "POST",
        format!("{base}/api/update-student/abc"),
        None,
    )
    .await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn unknown_routes_get_an_envelope_404() {
    let base = start_server().await;
    let client = client();

    let (status, body) = send(&client, "GET", format!("{base}/api/nope"), None).await;
    assert_eq!(status, 404);
    assert_eq!(body["code"], 404);
    assert_eq!(body["message"], "route not found");
}
