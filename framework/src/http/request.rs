//! HTTP request wrapper.

use super::body::{collect_body, parse_json};
use crate::error::Error;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::str::FromStr;

/// Incoming request together with the route parameters captured by the
/// router.
pub struct Request {
    inner: hyper::Request<hyper::body::Incoming>,
    params: HashMap<String, String>,
}

impl Request {
    pub fn new(inner: hyper::Request<hyper::body::Incoming>) -> Self {
        Self {
            inner,
            params: HashMap::new(),
        }
    }

    pub fn with_params(mut self, params: HashMap<String, String>) -> Self {
        self.params = params;
        self
    }

    pub fn method(&self) -> &hyper::Method {
        self.inner.method()
    }

    pub fn path(&self) -> &str {
        self.inner.uri().path()
    }

    /// Get a route parameter by name (e.g. `/students/{id}`).
    pub fn param(&self, name: &str) -> Result<&str, Error> {
        self.params
            .get(name)
            .map(|s| s.as_str())
            .ok_or_else(|| Error::missing_param(name))
    }

    /// Get a route parameter parsed to the expected type.
    pub fn param_as<T: FromStr>(&self, name: &str) -> Result<T, Error> {
        let raw = self.param(name)?;
        raw.parse()
            .map_err(|_| Error::invalid_param(raw, std::any::type_name::<T>()))
    }

    /// Get a header value by name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name).and_then(|v| v.to_str().ok())
    }

    /// Consume the request and collect the body as bytes.
    pub async fn body_bytes(self) -> Result<Bytes, Error> {
        collect_body(self.inner.into_body()).await
    }

    /// Parse the request body as JSON. Consumes the request since the body
    /// can only be read once.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T, Error> {
        let bytes = self.body_bytes().await?;
        parse_json(&bytes)
    }
}
