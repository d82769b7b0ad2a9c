use super::{Host, HostError, OutputSurface, Panel};
use alloc::sync::Arc;
use async_trait::async_trait;
use core::sync::atomic::{AtomicBool, Ordering};
use serde_json::Value;
use std::sync::Mutex;

#[derive(Default)]
pub struct StubHost {
    panel: Arc<StubPanel>,
    prompts: Mutex<Vec<Option<String>>>,
    errors: Mutex<Vec<String>>,
    surfaces: Mutex<Vec<Arc<StubOutputSurface>>>,
}

impl StubHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_prompts(self, mut prompts: Vec<Option<String>>) -> Self {
        prompts.reverse();
        *self.prompts.lock().unwrap() = prompts;
        self
    }

    pub fn set_panel_messages(mut self, messages: Vec<Value>) -> Self {
        self.panel = Arc::new(StubPanel::new(messages));
        self
    }

    pub fn panel(&self) -> &StubPanel {
        &self.panel
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn surfaces(&self) -> Vec<Arc<StubOutputSurface>> {
        self.surfaces.lock().unwrap().clone()
    }
}

#[async_trait]
impl Host for StubHost {
    fn create_panel(&self) -> Result<Arc<dyn Panel>, HostError> {
        Ok(self.panel.clone())
    }

    fn create_output_surface(&self, name: &str) -> Result<Box<dyn OutputSurface>, HostError> {
        let surface = Arc::new(StubOutputSurface::new(name));

        self.surfaces.lock().unwrap().push(surface.clone());

        Ok(Box::new(surface))
    }

    async fn prompt_text(&self, _label: &str) -> Result<Option<String>, HostError> {
        Ok(self.prompts.lock().unwrap().pop().expect("scripted prompt"))
    }

    fn notify_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.into());
    }
}

#[derive(Default)]
pub struct StubPanel {
    markup: Mutex<Option<String>>,
    incoming: Mutex<Vec<Value>>,
    posted: Mutex<Vec<Value>>,
}

impl StubPanel {
    pub fn new(mut incoming: Vec<Value>) -> Self {
        incoming.reverse();

        Self {
            markup: Mutex::new(None),
            incoming: Mutex::new(incoming),
            posted: Mutex::new(vec![]),
        }
    }

    pub fn markup(&self) -> Option<String> {
        self.markup.lock().unwrap().clone()
    }

    pub fn posted(&self) -> Vec<Value> {
        self.posted.lock().unwrap().clone()
    }
}

#[async_trait]
impl Panel for StubPanel {
    fn render_markup(&self, markup: &str) -> Result<(), HostError> {
        *self.markup.lock().unwrap() = Some(markup.into());

        Ok(())
    }

    async fn receive(&self) -> Option<Value> {
        self.incoming.lock().unwrap().pop()
    }

    fn post(&self, message: &Value) -> Result<(), HostError> {
        self.posted.lock().unwrap().push(message.clone());

        Ok(())
    }
}

pub struct StubOutputSurface {
    name: String,
    lines: Mutex<Vec<String>>,
    shown: AtomicBool,
}

impl StubOutputSurface {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            lines: Mutex::new(vec![]),
            shown: AtomicBool::new(false),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn is_shown(&self) -> bool {
        self.shown.load(Ordering::Relaxed)
    }
}

impl OutputSurface for StubOutputSurface {
    fn append_line(&self, text: &str) {
        self.lines.lock().unwrap().push(text.into());
    }

    fn show(&self) {
        self.shown.store(true, Ordering::Relaxed);
    }
}
