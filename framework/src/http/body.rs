//! Body collection and JSON parsing for incoming requests.

use crate::error::Error;
use bytes::Bytes;
use http_body_util::BodyExt;
use hyper::body::Incoming;
use serde::de::DeserializeOwned;

/// Collect the full body from an incoming stream.
pub async fn collect_body(body: Incoming) -> Result<Bytes, Error> {
    body.collect()
        .await
        .map(|collected| collected.to_bytes())
        .map_err(|e| Error::Body(e.to_string()))
}

/// Parse bytes as JSON into the target type.
pub fn parse_json<T: DeserializeOwned>(bytes: &Bytes) -> Result<T, Error> {
    serde_json::from_slice(bytes).map_err(|e| Error::Parse(e.to_string()))
}
