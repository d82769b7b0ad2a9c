use crate::{
    dispatcher::Dispatcher,
    host::{Host, HostError},
    request::{Method, RequestSpec},
};
use log::{debug, warn};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use tokio::task::JoinSet;

const FORM_MARKUP: &str = include_str!("panel/form.html");

/// A form submission message posted by the panel content.
#[derive(Clone, Debug, Deserialize)]
pub struct FormMessage {
    /// A request method.
    pub method: Method,
    /// A request URL.
    pub url: String,
    /// A headers field as raw text, expected to hold a JSON object literal.
    #[serde(default)]
    pub headers: String,
    /// A request body.
    #[serde(default)]
    pub body: String,
}

/// Opens the request form panel and serves form submissions until the panel
/// is closed.
///
/// Each submission is dispatched on its own task so that submissions made
/// while an earlier request is in flight are not serialized behind it. The
/// response of every dispatch is posted back as a `{"response": ...}`
/// message.
pub async fn open_panel(host: &dyn Host, dispatcher: &Dispatcher) -> Result<(), HostError> {
    let panel = host.create_panel()?;

    panel.render_markup(FORM_MARKUP)?;

    let mut tasks = JoinSet::new();

    while let Some(message) = panel.receive().await {
        let Ok(message) = serde_json::from_value::<FormMessage>(message) else {
            warn!("skipping an undecodable panel message");
            continue;
        };

        let dispatcher = dispatcher.clone();
        let panel = panel.clone();

        tasks.spawn(async move {
            let request = RequestSpec::new(message.method, message.url)
                .set_headers(parse_headers(&message.headers))
                .set_body(message.body);
            let response = dispatcher.dispatch(&request).await;

            if let Err(error) = panel.post(&json!({ "response": response })) {
                warn!("failed to post a panel response: {error}");
            }
        });
    }

    while tasks.join_next().await.is_some() {}

    Ok(())
}

// A headers field that does not parse as a JSON object of strings degrades to
// no headers rather than failing the request.
fn parse_headers(text: &str) -> HashMap<String, String> {
    serde_json::from_str(text).unwrap_or_else(|error| {
        debug!("ignoring an unparseable headers field: {error}");

        Default::default()
    })
}
