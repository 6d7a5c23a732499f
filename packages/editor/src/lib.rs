//! # Flexcraft Editor
//!
//! Editing engine for rich-message panels.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ compiler: document JSON ⇄ Vec<Panel>        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: session lifecycle + mutations       │
//! │  - Load documents into panels               │
//! │  - Apply validated mutations                │
//! │  - Snapshot undo/redo                       │
//! │  - Raw path edits on the compiled document  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler: Vec<Panel> → bubble / carousel    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Panels are the source of truth**: the nested document is derived
//! 2. **Validate, then apply**: a rejected mutation changes nothing
//! 3. **Whole-state snapshots**: undo restores a previous state rather than
//!    replaying inverses
//!
//! ## Usage
//!
//! ```rust,ignore
//! use flexcraft_editor::{EditSession, EditorOptions, Mutation};
//! use flexcraft_schema::BlockType;
//!
//! let mut session = EditSession::new(EditorOptions::default());
//! session.load_file("message.json")?;
//!
//! let panel_id = session.panels()[0].id.clone();
//! session.apply(Mutation::AddBlock {
//!     panel_id,
//!     block_type: BlockType::Button,
//!     index: None,
//! })?;
//! session.undo()?;
//!
//! // Edit what the panel model cannot express
//! session.enter_raw_mode().set("body.backgroundColor", "#FFF8E1".into());
//! session.commit_raw()?;
//!
//! session.save("message.json")?;
//! ```

mod errors;
mod history;
mod mutations;
mod raw;
mod session;

pub use errors::EditorError;
pub use history::History;
pub use mutations::{Mutation, MutationError};
pub use raw::RawDocument;
pub use session::{EditSession, EditorOptions};
