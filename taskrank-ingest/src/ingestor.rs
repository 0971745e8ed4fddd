//! BulkIngestor: the paste buffer plus the atomic hand-off to the queue.

use taskrank_core::{DraftQueue, ValidationError};

use crate::parser::parse_bulk;

#[derive(Debug, Default, Clone)]
pub struct BulkIngestor {
    buffer: String,
}

impl BulkIngestor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn push_line(&mut self, line: &str) {
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    /// Parse the buffer and append every task to `queue`.
    ///
    /// All or nothing: on error neither the queue nor the buffer changes.
    /// On success the buffer is emptied. Returns the number appended.
    pub fn ingest_into(&mut self, queue: &mut DraftQueue) -> Result<usize, ValidationError> {
        let tasks = parse_bulk(&self.buffer)?;
        let added = tasks.len();
        queue.append_many(tasks);
        self.buffer.clear();
        Ok(added)
    }
}
