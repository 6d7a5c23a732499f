//! # Flexcraft Compiler
//!
//! Converts between the nested rich-message document and the flat panel
//! model the editor works on.
//!
//! ```text
//! ┌──────────────────────────────┐   decompile   ┌──────────────────────┐
//! │ bubble / carousel            │ ────────────▶ │ Vec<Panel>           │
//! │  header · hero · body ·      │               │  settings + blocks   │
//! │  footer, nested boxes        │ ◀──────────── │  (flat, ordered)     │
//! └──────────────────────────────┘    compile    └──────────────────────┘
//! ```
//!
//! ## Lossiness
//!
//! The round trip is not byte-for-byte. Section membership, box nesting,
//! margins, padding and anything the block model has no field for are
//! dropped on decompile and re-synthesized on compile. After one round trip
//! the panel model is stable: decompiling a compiled document gives back the
//! same blocks.
//!
//! Neither direction fails. Unknown elements decompile to text blocks and
//! malformed fields fall back to schema defaults.

mod bullet;
mod compile;
mod decompile;

pub use bullet::BULLET_GLYPHS;
pub use compile::{compile, compile_panel, compile_to_node, partition, Sections};
pub use decompile::{decompile, decompile_with, MAX_BOX_DEPTH};

#[cfg(test)]
mod tests;
