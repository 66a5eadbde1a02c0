//! # Editing
//!
//! The command pipeline around the parsed tree:
//!
//! - [`Document`] owns the rope buffer (single source of truth), the block
//!   tree and the selection.
//! - [`Cmd`] is the edit algebra; every command compiles to one replace.
//! - [`reconcile`] rebuilds the tree after an edit, aliasing every block
//!   the edit could not have touched.
//! - [`caret`] maps between linear byte offsets and block-local addresses.
//!
//! Each applied command produces a [`Patch`] describing the rebuilt byte
//! ranges, the mapped selection and the new version.

pub mod caret;
pub mod commands;
pub mod document;
pub mod patch;
pub mod reconcile;

pub use caret::{from_linear, resolve_in_block, to_linear, ContentAddress, Selection};
pub use commands::{compile, transform_selection, Cmd};
pub use document::Document;
pub use patch::Patch;
pub use reconcile::{
    reconcile, reconcile_with_stats, EditSpan, ReconcileError, ReconcileStats,
};
