//! DraftQueue: ordered tasks waiting to be analyzed.
//!
//! Only normalized `Task`s can enter, so no validation happens here.
//! Grows by append, shrinks only by `clear`.

use crate::task::Task;

#[derive(Debug, Default, Clone)]
pub struct DraftQueue {
    tasks: Vec<Task>,
}

impl DraftQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn append(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn append_many(&mut self, tasks: impl IntoIterator<Item = Task>) {
        self.tasks.extend(tasks);
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Owned copy of the queue in insertion order.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }
}
