use crate::http_client::{BareRequest, HttpClientError};
use core::fmt::{self, Display, Formatter};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

/// An HTTP request method.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// A GET method.
    Get,
    /// A POST method.
    Post,
    /// A PUT method.
    Put,
    /// A DELETE method.
    Delete,
    /// A PATCH method.
    Patch,
}

impl Method {
    /// Returns `true` if requests with this method carry a body.
    pub const fn allows_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl Display for Method {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}",
            match self {
                Self::Get => "GET",
                Self::Post => "POST",
                Self::Put => "PUT",
                Self::Delete => "DELETE",
                Self::Patch => "PATCH",
            }
        )
    }
}

/// A description of one HTTP request.
#[derive(Clone, Debug)]
pub struct RequestSpec {
    method: Method,
    url: String,
    headers: HashMap<String, String>,
    body: Option<String>,
}

impl RequestSpec {
    /// Creates a request.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Default::default(),
            body: Default::default(),
        }
    }

    /// Sets headers.
    pub fn set_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Sets a body.
    pub fn set_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Converts the request into its wire form.
    ///
    /// The URL is parsed here, and the body is dropped unless the method
    /// allows one and it is non-empty.
    pub fn to_bare(&self) -> Result<BareRequest, HttpClientError> {
        Ok(BareRequest {
            method: self.method,
            url: Url::parse(&self.url)?,
            headers: self.headers.clone(),
            body: self
                .body
                .as_deref()
                .filter(|body| self.method.allows_body() && !body.is_empty())
                .map(ToOwned::to_owned),
        })
    }
}
