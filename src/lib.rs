#![doc = include_str!("../README.md")]

extern crate alloc;

mod dispatcher;
mod host;
mod http_client;
mod panel;
mod prompt;
mod render;
mod request;

pub use self::{
    dispatcher::Dispatcher,
    host::{ConsoleHost, Host, HostError, OutputSurface, Panel},
    http_client::{BareRequest, HttpClient, HttpClientError, Payload, ReqwestHttpClient},
    panel::{FormMessage, open_panel},
    prompt::prompt_request,
    request::{Method, RequestSpec},
};
