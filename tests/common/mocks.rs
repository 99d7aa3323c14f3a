use async_trait::async_trait;
use textgen_server::{Error, Result, generation::TextGenerator};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// Mock text generator for testing.
///
/// Echoes the prompt followed by a fixed continuation and records every call.
#[derive(Debug, Default)]
pub struct MockGenerator {
    pub calls: Arc<Mutex<Vec<(String, u32)>>>,
    pub error: Option<String>,
    pub failures_remaining: AtomicUsize,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with `error`.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// The first `count` calls fail, later calls succeed.
    pub fn with_failures(self, count: usize) -> Self {
        self.failures_remaining.store(count, Ordering::SeqCst);
        self
    }

    pub fn get_calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

pub const CONTINUATION: &str = " jumps over the lazy dog";

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str, max_length: u32) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), max_length));

        if let Some(ref error) = self.error {
            return Err(Error::generation(error.clone()));
        }

        let remaining = self.failures_remaining.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures_remaining.store(remaining - 1, Ordering::SeqCst);
            return Err(Error::generation("transient backend failure"));
        }

        Ok(format!("{}{}", prompt, CONTINUATION))
    }
}
