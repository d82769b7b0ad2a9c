#![doc = include_str!("../README.md")]

use clap::{Parser, Subcommand};
use core::error::Error;
use postbox::{ConsoleHost, Dispatcher, Method, ReqwestHttpClient, open_panel, prompt_request};
use std::process::exit;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Clone, Copy, Debug)]
enum Command {
    /// Prompts for a GET request.
    Get,
    /// Prompts for a POST request.
    Post,
    /// Prompts for a PUT request.
    Put,
    /// Prompts for a DELETE request.
    Delete,
    /// Prompts for a PATCH request.
    Patch,
    /// Opens the request form panel over standard input and output.
    Panel,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{error}");
        exit(1)
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let Arguments { command } = Arguments::parse();
    let host = ConsoleHost::new();
    let dispatcher = Dispatcher::new(ReqwestHttpClient::new()?);

    match command {
        Command::Get => prompt_request(&host, &dispatcher, Method::Get).await?,
        Command::Post => prompt_request(&host, &dispatcher, Method::Post).await?,
        Command::Put => prompt_request(&host, &dispatcher, Method::Put).await?,
        Command::Delete => prompt_request(&host, &dispatcher, Method::Delete).await?,
        Command::Patch => prompt_request(&host, &dispatcher, Method::Patch).await?,
        Command::Panel => open_panel(&host, &dispatcher).await?,
    }

    Ok(())
}
