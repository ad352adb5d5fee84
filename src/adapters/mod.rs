// Adapters layer: concrete sink implementations behind the LogSink port.

use std::sync::{Arc, Mutex};

use crate::domain::ports::LogSink;

/// Default sink: routes resolved values to the info channel and rejection
/// messages to the error channel of the tracing stack.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log_value(&self, value: &str) {
        tracing::info!("{value}");
    }

    fn log_error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Capturing sink for tests: records every emitted line per channel.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    values: Arc<Mutex<Vec<String>>>,
    errors: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> Vec<String> {
        self.values.lock().expect("sink lock poisoned").clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().expect("sink lock poisoned").clone()
    }
}

impl LogSink for MemorySink {
    fn log_value(&self, value: &str) {
        self.values
            .lock()
            .expect("sink lock poisoned")
            .push(value.to_string());
    }

    fn log_error(&self, message: &str) {
        self.errors
            .lock()
            .expect("sink lock poisoned")
            .push(message.to_string());
    }
}
