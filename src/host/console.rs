use super::{Host, HostError, OutputSurface, Panel};
use alloc::sync::Arc;
use async_trait::async_trait;
use colored::Colorize;
use log::{trace, warn};
use serde_json::Value;
use std::io::{Write, stdout};
use tokio::{
    io::{AsyncBufReadExt, BufReader, Lines, Stdin, stdin},
    sync::Mutex,
};

type StdinLines = Arc<Mutex<Lines<BufReader<Stdin>>>>;

/// A host backed by the console.
///
/// Prompts read lines from standard input, output surfaces write to standard
/// output, and the panel is headless with one JSON message per line in each
/// direction.
pub struct ConsoleHost {
    lines: StdinLines,
}

impl ConsoleHost {
    /// Creates a console host.
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(BufReader::new(stdin()).lines())),
        }
    }
}

impl Default for ConsoleHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Host for ConsoleHost {
    fn create_panel(&self) -> Result<Arc<dyn Panel>, HostError> {
        Ok(Arc::new(StdioPanel {
            lines: self.lines.clone(),
        }))
    }

    fn create_output_surface(&self, name: &str) -> Result<Box<dyn OutputSurface>, HostError> {
        Ok(Box::new(ConsoleOutputSurface { name: name.into() }))
    }

    async fn prompt_text(&self, label: &str) -> Result<Option<String>, HostError> {
        print!("{}: ", label.bold());
        stdout().flush()?;

        Ok(self
            .lines
            .lock()
            .await
            .next_line()
            .await?
            .map(|line| line.trim_end().into()))
    }

    fn notify_error(&self, message: &str) {
        eprintln!("{}", message.red());
    }
}

struct ConsoleOutputSurface {
    name: String,
}

impl OutputSurface for ConsoleOutputSurface {
    fn append_line(&self, text: &str) {
        println!("{text}");
    }

    fn show(&self) {
        // The console is always visible.
        trace!("showing the {} output surface", self.name);
    }
}

struct StdioPanel {
    lines: StdinLines,
}

#[async_trait]
impl Panel for StdioPanel {
    fn render_markup(&self, markup: &str) -> Result<(), HostError> {
        // A graphical host would render this; the console only exchanges
        // messages.
        trace!("rendering {} bytes of panel markup", markup.len());

        Ok(())
    }

    async fn receive(&self) -> Option<Value> {
        loop {
            let line = self.lines.lock().await.next_line().await.ok()??;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(message) => return Some(message),
                Err(error) => warn!("skipping a malformed panel message: {error}"),
            }
        }
    }

    fn post(&self, message: &Value) -> Result<(), HostError> {
        println!("{message}");

        Ok(())
    }
}
