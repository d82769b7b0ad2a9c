use crate::{
    dispatcher::Dispatcher,
    host::{Host, HostError},
    request::{Method, RequestSpec},
};
use std::collections::HashMap;

const NO_URL_MESSAGE: &str = "No URL provided.";

/// Prompts for a request with the given method and displays its result in a
/// method-named output surface.
///
/// A cancelled or empty URL prompt aborts with a user-visible error and no
/// network call. A body prompted on POST, PUT, and PATCH sets the
/// `Content-Type` header to `application/json`; a fresh output surface is
/// created on every invocation.
pub async fn prompt_request(
    host: &dyn Host,
    dispatcher: &Dispatcher,
    method: Method,
) -> Result<(), HostError> {
    let Some(url) = host
        .prompt_text(&format!("Enter URL for {method} request"))
        .await?
        .filter(|url| !url.is_empty())
    else {
        host.notify_error(NO_URL_MESSAGE);
        return Ok(());
    };

    let body = if method.allows_body() {
        host.prompt_text("Enter request body (JSON or text, leave empty for none)")
            .await?
            .filter(|body| !body.is_empty())
    } else {
        None
    };

    let mut request = RequestSpec::new(method, url);

    if let Some(body) = body {
        request = request
            .set_headers(HashMap::from([(
                "Content-Type".into(),
                "application/json".into(),
            )]))
            .set_body(body);
    }

    let display = dispatcher.dispatch(&request).await;
    let surface = host.create_output_surface(&format!("HTTP {method}"))?;

    surface.append_line(&display);
    surface.show();

    Ok(())
}
