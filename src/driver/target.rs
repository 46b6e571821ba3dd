//! Content targets: where rendered route output goes.

use std::io::Write;
use std::sync::{Arc, Mutex};

/// Receives content produced by a route handler.
pub trait ContentTarget: Send {
    fn set_content(&mut self, content: &str);
}

/// Writes each piece of content as a line on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutTarget;

impl ContentTarget for StdoutTarget {
    fn set_content(&mut self, content: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "{}", content).and_then(|_| out.flush()) {
            tracing::warn!("Failed to write content to stdout: {}", e);
        }
    }
}

/// Keeps everything it is given. Clones share the same history.
#[derive(Debug, Default, Clone)]
pub struct MemoryTarget {
    history: Arc<Mutex<Vec<String>>>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything rendered so far, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .expect("memory target mutex poisoned")
            .clone()
    }

    /// The content currently shown.
    pub fn current(&self) -> Option<String> {
        self.history
            .lock()
            .expect("memory target mutex poisoned")
            .last()
            .cloned()
    }
}

impl ContentTarget for MemoryTarget {
    fn set_content(&mut self, content: &str) {
        self.history
            .lock()
            .expect("memory target mutex poisoned")
            .push(content.to_string());
    }
}
