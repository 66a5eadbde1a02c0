//! # Parsing
//!
//! The document model: a flat sequence of immutable [`Block`]s, each holding
//! literal marker text, literal runs and nested inline nodes.
//!
//! ## Round-trip guarantee
//!
//! `serialize_blocks(&parse_document(text)) == text` for every input.
//! Markers are stored as literal pieces inside their nodes, so nothing is
//! normalized away; malformed markup degrades to literal text instead of
//! failing.

pub mod blocks;
pub mod cache;
pub mod inline;

pub use blocks::{Block, BlockId, BlockKind, BlockNode};
pub use cache::ParseCache;
pub use inline::{parse_inline, InlineKind, InlineNode, Piece};

/// Parses a document into its block sequence.
///
/// The text is split on `\n`; every line is consumed by exactly one block.
pub fn parse_document(text: &str) -> Vec<Block> {
    let lines: Vec<&str> = text.split('\n').collect();
    blocks::parse_blocks(&lines)
}

/// Serializes a block sequence back to markdown text.
///
/// Blocks are joined with `\n`; each block reproduces its source lines
/// verbatim, so this is the exact inverse of [`parse_document`].
pub fn serialize_blocks(blocks: &[Block]) -> String {
    let mut out = String::new();
    for (i, b) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        b.write_to(&mut out);
    }
    out
}

/// Total serialized length of a block sequence, including joining newlines.
pub fn doc_len(blocks: &[Block]) -> usize {
    if blocks.is_empty() {
        return 0;
    }
    blocks.iter().map(|b| b.len()).sum::<usize>() + blocks.len() - 1
}
