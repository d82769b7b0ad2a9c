mod error;
mod reqwest;
#[cfg(test)]
mod stub;

#[cfg(test)]
pub use self::stub::StubHttpClient;
pub use self::{error::HttpClientError, reqwest::ReqwestHttpClient};
use crate::request::Method;
use alloc::sync::Arc;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use url::Url;

/// An HTTP client performing one request per call.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Sends a request and resolves with its response payload.
    async fn send(&self, request: &BareRequest) -> Result<Payload, HttpClientError>;
}

#[async_trait]
impl<T: HttpClient + ?Sized> HttpClient for Arc<T> {
    async fn send(&self, request: &BareRequest) -> Result<Payload, HttpClientError> {
        (**self).send(request).await
    }
}

/// A sanitized request ready to go on the wire.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BareRequest {
    /// A request method.
    pub method: Method,
    /// A request URL.
    pub url: Url,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// A request body.
    pub body: Option<String>,
}

/// A response payload.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Payload {
    /// A structured payload decoded from JSON.
    Structured(Value),
    /// A plain text payload.
    Text(String),
}
