//! # Inline Parsing
//!
//! Cursor-based inline parsing with explicit raw zones.
//!
//! A line's text becomes a sequence of [`Piece`]s: literal text runs plus
//! [`InlineNode`]s for recognized constructs. Marker characters (`**`, `[`,
//! backticks, ...) are stored as literal text pieces inside their node, so
//! serializing a node's pieces in order always reproduces the exact source
//! substring it was parsed from.
//!
//! ## Modules
//!
//! - **`types`**: `InlineKind`, `InlineNode`, `Piece`
//! - **`kinds`**: per-construct types that own their delimiters
//! - **`cursor`**: byte cursor for left-to-right scanning
//! - **`parser`**: `parse_inline()` with the fixed priority chain
//!
//! ## Raw zones
//!
//! Code spans suppress all other parsing inside them: `` `[[x]]` `` is a
//! code span, never a reference.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{InlineKind, InlineNode, Piece};
