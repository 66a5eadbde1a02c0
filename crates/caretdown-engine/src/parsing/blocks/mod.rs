//! # Block Parsing
//!
//! Line-oriented block parsing with a fixed-priority dispatch chain.
//!
//! 1. **Line classification** (`classify`): each line is classified into a
//!    [`LineClass`] of local facts, independent of surrounding context.
//! 2. **Block construction** (`parser`): blocks are built line by line; only
//!    fenced code consumes multiple lines, and it must find a matching
//!    closer or it degrades to the lower-priority rules.
//!
//! ## Key invariants
//!
//! - Every source line is consumed by exactly one block
//!   (`sum(line_span) == line count`), blank lines included.
//! - Serializing a block's content pieces reproduces its source lines
//!   exactly.
//! - Fenced code bodies are raw zones: no inline parsing inside.

pub mod classify;
pub mod kinds;
pub mod parser;
pub mod types;

pub use classify::{classify, LineClass, LineShape};
pub use parser::parse_blocks;
pub use types::{Block, BlockId, BlockKind, BlockNode};
