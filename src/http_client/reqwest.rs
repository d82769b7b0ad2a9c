use super::{BareRequest, HttpClient, HttpClientError, Payload};
use crate::request::Method;
use async_trait::async_trait;
use log::trace;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;

/// An HTTP client based on [`reqwest`].
#[derive(Debug, Default)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates an HTTP client.
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: ClientBuilder::new().tcp_keepalive(None).build()?,
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, request: &BareRequest) -> Result<Payload, HttpClientError> {
        trace!("sending a {} request to {}", request.method, &request.url);

        let mut builder = self
            .client
            .request(request.method.into(), request.url.clone());

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = self
            .client
            .execute(builder.build()?)
            .await?
            .error_for_status()?;

        trace!("got {} response from {}", response.status(), &request.url);

        let text = response.text().await?;

        Ok(serde_json::from_str::<Value>(&text).map_or(Payload::Text(text), Payload::Structured))
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
            Method::Patch => Self::PATCH,
        }
    }
}

impl From<reqwest::Error> for HttpClientError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error.to_string().into())
    }
}
