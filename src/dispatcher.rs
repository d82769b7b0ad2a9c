use crate::{
    http_client::{HttpClient, HttpClientError},
    render,
    request::RequestSpec,
};
use alloc::sync::Arc;
use log::debug;

/// A request dispatcher performing exactly one HTTP call per invocation.
#[derive(Clone)]
pub struct Dispatcher(Arc<dyn HttpClient>);

impl Dispatcher {
    /// Creates a dispatcher.
    pub fn new(client: impl HttpClient + 'static) -> Self {
        Self(Arc::new(client))
    }

    /// Dispatches a request and returns its display text.
    ///
    /// Every outcome is a string. Failures of any kind become
    /// `Error: <message>`.
    pub async fn dispatch(&self, request: &RequestSpec) -> String {
        match self.dispatch_inner(request).await {
            Ok(display) => display,
            Err(error) => format!("Error: {error}"),
        }
    }

    async fn dispatch_inner(&self, request: &RequestSpec) -> Result<String, HttpClientError> {
        let request = request.to_bare()?;
        let payload = self.0.send(&request).await?;

        debug!("dispatched a {} request to {}", request.method, request.url);

        Ok(render::display(&payload))
    }
}
