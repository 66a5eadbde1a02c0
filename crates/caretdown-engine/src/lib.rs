//! Incremental markdown engine for a cursor-aware dual-mode editor.
//!
//! The engine keeps the document as exact source text and derives a block
//! tree from it on every edit, reusing untouched blocks by reference. From
//! the tree and the caret position it computes a decoration plan telling
//! the host which byte ranges to show as raw editable markdown and which to
//! replace with rendered widgets.
//!
//! Guarantees:
//! - **Lossless**: serializing the parsed tree reproduces the input
//!   byte-for-byte; malformed markup degrades to literal text.
//! - **Stable identity**: blocks an edit could not have touched are the
//!   same `Rc` allocations after reconciliation.
//! - **Exact coverage**: every decoration plan tiles `[0, len)` with
//!   ordered, non-overlapping ranges.
//!
//! ```
//! use caretdown_engine::editing::{Cmd, Document, Selection};
//! use caretdown_engine::render::PlanOptions;
//!
//! let mut doc = Document::from_text("# Hello\n\n- [ ] write docs");
//! doc.apply(Cmd::InsertText { at: 7, text: "!".to_string() });
//! assert_eq!(doc.text(), "# Hello!\n\n- [ ] write docs");
//!
//! doc.set_selection(Selection::caret(3));
//! let plan = doc.plan(&PlanOptions::default());
//! assert!(plan.is_covering(doc.text().len()));
//! ```

pub mod editing;
pub mod parsing;
pub mod render;

pub use editing::{Cmd, Document, Patch, Selection};
pub use parsing::{parse_document, serialize_blocks, Block, BlockKind, BlockNode};
pub use render::{plan_decorations, DecorationPlan, PlanOptions};
