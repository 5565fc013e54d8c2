use std::collections::VecDeque;

/// Newest-first record of human-readable gradebook events.
#[derive(Debug, Default)]
pub struct ActivityLog {
    entries: VecDeque<String>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends an entry; it becomes index 0.
    pub fn record(&mut self, entry: impl Into<String>) {
        self.entries.push_front(entry.into());
    }

    /// Up to `max_items` entries, newest first.
    pub fn recent(&self, max_items: usize) -> Vec<String> {
        self.entries.iter().take(max_items).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
