use alloc::sync::Arc;
use core::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// An HTTP client error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HttpClientError {
    /// A transport or protocol failure.
    Http(Arc<str>),
    /// A malformed request URL.
    UrlParse(Arc<str>),
}

impl Error for HttpClientError {}

impl Display for HttpClientError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(error) | Self::UrlParse(error) => write!(formatter, "{error}"),
        }
    }
}

impl From<url::ParseError> for HttpClientError {
    fn from(error: url::ParseError) -> Self {
        Self::UrlParse(error.to_string().into())
    }
}
