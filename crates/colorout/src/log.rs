//! User-visible messages.

use std::sync::{Arc, Mutex, PoisonError};

/// Sink for messages meant for the user rather than the developer log.
pub trait UserLog: Send + Sync {
    /// Records a warning. Never fails.
    fn warn(&self, message: &str);
}

/// Forwards user messages to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl UserLog for TracingLog {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "colorout::user", "{message}");
    }
}

/// Keeps user messages in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryLog {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MemoryLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of recorded messages.
    pub fn len(&self) -> usize {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all recorded messages.
    pub fn clear(&self) {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl UserLog for MemoryLog {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "colorout::user", "{message}");
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let log = MemoryLog::new();
        let sink: Box<dyn UserLog> = Box::new(log.clone());
        sink.warn("first");
        sink.warn("second");
        assert_eq!(log.messages(), ["first", "second"]);
        log.clear();
        assert!(log.is_empty());
    }
}
