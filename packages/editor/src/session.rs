//! # Edit Session
//!
//! One user's editing state for one message.
//!
//! A session owns the panel list, the id generator new blocks draw from and
//! the undo history. It runs in one of two modes:
//!
//! - **Block mode** (default): [`Mutation`]s on panels
//! - **Raw mode**: path edits on the compiled document through a
//!   [`RawDocument`]; committing decompiles the edited root back into panels
//!   as a single undo step

use crate::history::History;
use crate::raw::RawDocument;
use crate::{EditorError, Mutation};
use flexcraft_compiler::{compile, compile_to_node, decompile_with};
use flexcraft_schema::{create_empty_panel, FlexDocument, IdGenerator, Panel, TimestampIds};
use flexcraft_tree::Node;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Session-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptions {
    /// Undo levels kept per history (0 = unlimited)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Theme color for panels the session creates
    #[serde(default)]
    pub theme_color: Option<String>,
}

fn default_history_limit() -> usize {
    100
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            theme_color: None,
        }
    }
}

pub struct EditSession {
    panels: Vec<Panel>,
    ids: Box<dyn IdGenerator>,
    history: History<Vec<Panel>>,
    raw: Option<RawDocument>,
    options: EditorOptions,
}

impl EditSession {
    /// Session with one empty panel and clock-based ids
    pub fn new(options: EditorOptions) -> Self {
        Self::with_ids(options, Box::new(TimestampIds))
    }

    pub fn with_ids(options: EditorOptions, mut ids: Box<dyn IdGenerator>) -> Self {
        let panels = vec![create_empty_panel(options.theme_color.as_deref(), ids.as_mut())];
        Self {
            panels,
            ids,
            history: History::new(options.history_limit),
            raw: None,
            options,
        }
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, panel_id: &str) -> Option<&Panel> {
        self.panels.iter().find(|panel| panel.id == panel_id)
    }

    pub fn history(&self) -> &History<Vec<Panel>> {
        &self.history
    }

    /// Replace the session content with a decompiled document.
    /// History and raw mode are discarded.
    #[instrument(skip_all)]
    pub fn load(&mut self, document: &Node) {
        self.panels = self.decompile(document);
        self.history.clear();
        self.raw = None;
        info!(panels = self.panels.len(), "Loaded document");
    }

    /// [`load`](Self::load) from a JSON file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), EditorError> {
        let source = std::fs::read_to_string(path.as_ref())?;
        let document: Node = serde_json::from_str(&source)?;
        self.load(&document);
        Ok(())
    }

    /// Apply a block-mode mutation as one undo step.
    /// Returns the id of the panel or block it created, if any.
    #[instrument(skip_all, fields(mutation = %mutation.description()))]
    pub fn apply(&mut self, mutation: Mutation) -> Result<Option<String>, EditorError> {
        if self.raw.is_some() {
            return Err(EditorError::InRawMode);
        }

        let before = self.panels.clone();
        let created = mutation.apply(&mut self.panels, self.ids.as_mut())?;
        if before == self.panels {
            debug!("Mutation changed nothing - not recorded");
            return Ok(created);
        }
        self.history.record(before, mutation.description());

        debug!(created = ?created, "Applied mutation");
        Ok(created)
    }

    /// Undo the last block-mode change; `false` when there is none
    pub fn undo(&mut self) -> Result<bool, EditorError> {
        if self.raw.is_some() {
            return Err(EditorError::InRawMode);
        }

        match self.history.undo(self.panels.clone()) {
            Some(previous) => {
                self.panels = previous;
                debug!(remaining = self.history.undo_levels(), "Undo");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn redo(&mut self) -> Result<bool, EditorError> {
        if self.raw.is_some() {
            return Err(EditorError::InRawMode);
        }

        match self.history.redo(self.panels.clone()) {
            Some(next) => {
                self.panels = next;
                debug!(remaining = self.history.redo_levels(), "Redo");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn can_undo(&self) -> bool {
        self.raw.is_none() && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.raw.is_none() && self.history.can_redo()
    }

    pub fn is_raw_mode(&self) -> bool {
        self.raw.is_some()
    }

    /// Start raw editing on the compiled current panels.
    /// Already in raw mode: the pending raw document is kept.
    pub fn enter_raw_mode(&mut self) -> &mut RawDocument {
        let history_limit = self.options.history_limit;
        let panels = &self.panels;
        self.raw.get_or_insert_with(|| {
            debug!(panels = panels.len(), "Entering raw mode");
            RawDocument::new(compile_to_node(panels), history_limit)
        })
    }

    pub fn raw(&self) -> Option<&RawDocument> {
        self.raw.as_ref()
    }

    pub fn raw_mut(&mut self) -> Result<&mut RawDocument, EditorError> {
        self.raw.as_mut().ok_or(EditorError::NotInRawMode)
    }

    /// Decompile the raw root back into panels as one undo step
    #[instrument(skip(self))]
    pub fn commit_raw(&mut self) -> Result<(), EditorError> {
        let raw = self.raw.take().ok_or(EditorError::NotInRawMode)?;
        let edits = raw.history().undo_levels();

        let panels = self.decompile(raw.root());
        let before = std::mem::replace(&mut self.panels, panels);
        self.history.record(before, "Raw edit");

        debug!(edits, panels = self.panels.len(), "Committed raw edits");
        Ok(())
    }

    /// Leave raw mode without applying its edits
    pub fn discard_raw(&mut self) -> Result<(), EditorError> {
        self.raw.take().ok_or(EditorError::NotInRawMode)?;
        debug!("Discarded raw edits");
        Ok(())
    }

    /// Back to a single empty panel with no history
    pub fn reset(&mut self) {
        self.panels = vec![create_empty_panel(
            self.options.theme_color.as_deref(),
            self.ids.as_mut(),
        )];
        self.history.clear();
        self.raw = None;
        debug!("Session reset");
    }

    pub fn to_document(&self) -> FlexDocument {
        compile(&self.panels)
    }

    /// Compiled document written as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), EditorError> {
        let json = serde_json::to_string_pretty(&self.to_document())?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Decompile, falling back to one empty panel when nothing was found
    fn decompile(&mut self, document: &Node) -> Vec<Panel> {
        let mut panels = decompile_with(document, self.ids.as_mut());
        if panels.is_empty() {
            panels.push(create_empty_panel(
                self.options.theme_color.as_deref(),
                self.ids.as_mut(),
            ));
        }
        panels
    }
}
