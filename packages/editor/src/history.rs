//! # Undo/Redo History
//!
//! Snapshot-based history for any editable state.
//!
//! ## Design
//!
//! - Before a change, the caller records the state it is leaving
//! - Undo swaps the current state for the most recent snapshot and keeps
//!   the current one for redo
//! - Redo swaps back
//! - Recording a new change clears the redo side
//! - At most `max_levels` undo snapshots are kept (0 = unlimited)
//!
//! Snapshots of a [`Node`](flexcraft_tree::Node) share every subtree the
//! change did not touch, so keeping many of them costs little.
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = History::new(100);
//!
//! history.record(state.clone(), "Rename");
//! state = rename(&state);
//!
//! if let Some(previous) = history.undo(state.clone()) {
//!     state = previous;
//! }
//! ```

#[derive(Debug, Clone)]
struct Entry<T> {
    state: T,
    description: Option<String>,
}

/// Undo/redo snapshots of `T`
#[derive(Debug, Clone)]
pub struct History<T> {
    /// States to return to on undo (most recent last)
    undo_stack: Vec<Entry<T>>,

    /// States to return to on redo (most recent last)
    redo_stack: Vec<Entry<T>>,

    max_levels: usize,
}

impl<T> History<T> {
    /// History keeping at most `max_levels` undo steps (0 = unlimited)
    pub fn new(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
        }
    }

    /// Record the state being left behind by a change
    pub fn record(&mut self, previous: T, description: impl Into<String>) {
        self.undo_stack.push(Entry {
            state: previous,
            description: Some(description.into()),
        });

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        self.redo_stack.clear();
    }

    /// Trade `current` for the most recent snapshot
    pub fn undo(&mut self, current: T) -> Option<T> {
        let entry = self.undo_stack.pop()?;
        self.redo_stack.push(Entry {
            state: current,
            description: entry.description,
        });
        Some(entry.state)
    }

    /// Trade `current` for the most recently undone state
    pub fn redo(&mut self, current: T) -> Option<T> {
        let entry = self.redo_stack.pop()?;
        self.undo_stack.push(Entry {
            state: current,
            description: entry.description,
        });
        Some(entry.state)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Description of the change the next undo reverts
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|entry| entry.description.as_deref())
    }

    /// Description of the change the next redo reapplies
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|entry| entry.description.as_deref())
    }

    /// Snapshots on the undo side, oldest first
    pub fn undo_states(&self) -> impl Iterator<Item = &T> {
        self.undo_stack.iter().map(|entry| &entry.state)
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new(100)
    }
}
