//! # Flexcraft Tree
//!
//! Path-addressed, copy-on-write editing of nested JSON-like documents.
//!
//! ## Paths
//!
//! A path is a dot-delimited list of segments. A segment that is a canonical
//! non-negative integer indexes an array; anything else names an object field.
//!
//! ```text
//! contents.1.body.contents.0.text
//! ```
//!
//! ## Copy-on-write
//!
//! Writes clone only the containers on the addressed path. Every other
//! subtree of the result is the same allocation as in the input, so keeping
//! every past root for undo costs O(depth) per edit.
//!
//! ```rust,ignore
//! use flexcraft_tree::{set_at_path, Node};
//!
//! let next = set_at_path(&root, "body.contents.0.text", Node::from("Hello"));
//! assert!(next.get("header").unwrap().ptr_eq(root.get("header").unwrap()));
//! ```
//!
//! Unresolvable paths never fail: reads return `None` and writes return the
//! input root unchanged.

mod node;
mod ops;
mod path;

pub use node::{Node, Object};
pub use ops::{
    get_at_path, insert_at_path, move_in_array, remove_at_path, set_at_path, MAX_INDEX_GAP,
    MAX_PATH_DEPTH,
};
pub use path::{Path, Segment};
