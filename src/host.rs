mod console;
#[cfg(test)]
mod stub;

#[cfg(test)]
pub use self::stub::{StubHost, StubOutputSurface, StubPanel};
pub use self::console::ConsoleHost;
use alloc::sync::Arc;
use async_trait::async_trait;
use core::{
    error::Error,
    fmt::{self, Display, Formatter},
};
use serde_json::Value;

/// A UI capability provided by a host runtime.
#[async_trait]
pub trait Host: Send + Sync {
    /// Creates a panel rendering markup and exchanging structured messages.
    fn create_panel(&self) -> Result<Arc<dyn Panel>, HostError>;

    /// Creates a named output surface accepting appended lines.
    fn create_output_surface(&self, name: &str) -> Result<Box<dyn OutputSurface>, HostError>;

    /// Prompts the user for one line of text, resolving with `None` when the
    /// prompt is cancelled.
    async fn prompt_text(&self, label: &str) -> Result<Option<String>, HostError>;

    /// Notifies the user of an error.
    fn notify_error(&self, message: &str);
}

/// A panel rendering markup with script execution enabled.
#[async_trait]
pub trait Panel: Send + Sync {
    /// Renders markup into the panel.
    fn render_markup(&self, markup: &str) -> Result<(), HostError>;

    /// Receives the next message posted by the panel content, or `None` once
    /// the panel is closed.
    async fn receive(&self) -> Option<Value>;

    /// Posts a message into the panel content.
    fn post(&self, message: &Value) -> Result<(), HostError>;
}

/// An output surface accepting appended text.
pub trait OutputSurface: Send + Sync {
    /// Appends a line of text.
    fn append_line(&self, text: &str);

    /// Makes the surface visible.
    fn show(&self);
}

impl<T: OutputSurface + ?Sized> OutputSurface for Arc<T> {
    fn append_line(&self, text: &str) {
        (**self).append_line(text);
    }

    fn show(&self) {
        (**self).show();
    }
}

/// A host capability error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HostError {
    /// An I/O failure in a host channel.
    Io(Arc<str>),
}

impl Error for HostError {}

impl Display for HostError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(formatter, "{error}"),
        }
    }
}

impl From<std::io::Error> for HostError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string().into())
    }
}
