//! # Raw Structure Editing
//!
//! Path-addressed edits on the compiled document itself, for the parts the
//! panel model cannot express. Every effective edit is recorded in a
//! [`History`] of roots; edits that resolve to nothing leave both the root
//! and the history alone.

use crate::history::History;
use flexcraft_tree::{
    get_at_path, insert_at_path, move_in_array, remove_at_path, set_at_path, Node,
};
use tracing::debug;

/// A document root under raw editing, with its own undo history
#[derive(Debug, Clone)]
pub struct RawDocument {
    root: Node,
    history: History<Node>,
}

impl RawDocument {
    pub fn new(root: Node, history_limit: usize) -> Self {
        Self {
            root,
            history: History::new(history_limit),
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn history(&self) -> &History<Node> {
        &self.history
    }

    pub fn get(&self, path: &str) -> Option<&Node> {
        get_at_path(&self.root, path)
    }

    /// Returns `false` when nothing changed
    pub fn set(&mut self, path: &str, value: Node) -> bool {
        let next = set_at_path(&self.root, path, value);
        self.commit(next, format!("Set {}", path))
    }

    pub fn remove(&mut self, path: &str) -> bool {
        let next = remove_at_path(&self.root, path);
        self.commit(next, format!("Remove {}", path))
    }

    pub fn insert(&mut self, array_path: &str, index: usize, element: Node) -> bool {
        let next = insert_at_path(&self.root, array_path, index, element);
        self.commit(next, format!("Insert into {}", array_path))
    }

    pub fn move_item(&mut self, array_path: &str, from: usize, to: usize) -> bool {
        let next = move_in_array(&self.root, array_path, from, to);
        self.commit(next, format!("Move {}: {} → {}", array_path, from, to))
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.root.clone()) {
            Some(previous) => {
                self.root = previous;
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.root.clone()) {
            Some(next) => {
                self.root = next;
                true
            }
            None => false,
        }
    }

    fn commit(&mut self, next: Node, description: String) -> bool {
        if next.ptr_eq(&self.root) {
            debug!(%description, "Raw edit resolved to nothing");
            return false;
        }

        debug!(%description, "Raw edit");
        let previous = std::mem::replace(&mut self.root, next);
        self.history.record(previous, description);
        true
    }
}
