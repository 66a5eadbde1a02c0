use std::ops::Range;

use crate::parsing::{Block, BlockNode, Piece};

/// A caret or selection as linear byte offsets into the full text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub focus: usize,
}

impl Selection {
    /// A collapsed selection (plain caret).
    pub fn caret(at: usize) -> Self {
        Self { anchor: at, focus: at }
    }

    pub fn is_caret(&self) -> bool {
        self.anchor == self.focus
    }

    /// Ordered `min..max` range.
    pub fn normalized(&self) -> Range<usize> {
        self.anchor.min(self.focus)..self.anchor.max(self.focus)
    }

    /// Ordered range clamped into `[0, len]`. Out-of-bounds offsets are
    /// clamped rather than rejected.
    pub fn clamped(&self, len: usize) -> Range<usize> {
        let r = self.normalized();
        r.start.min(len)..r.end.min(len)
    }
}

/// Converts a `(block_index, intra_offset)` address to a linear offset.
///
/// Blocks are joined by single newlines; `intra_offset` is clamped to the
/// block's length.
pub fn to_linear(blocks: &[Block], block_index: usize, intra: usize) -> usize {
    let mut off = 0;
    for b in blocks.iter().take(block_index) {
        off += b.len() + 1;
    }
    match blocks.get(block_index) {
        Some(b) => off + intra.min(b.len()),
        None => off.saturating_sub(1),
    }
}

/// Converts a linear offset to a `(block_index, intra_offset)` address.
/// Exact inverse of [`to_linear`] for in-range addresses.
///
/// An offset exactly at a block's end belongs to that block, not the next
/// one; the joining newline's position resolves to the end of the block
/// before it. Offsets past the document clamp to the last block's end.
pub fn from_linear(blocks: &[Block], offset: usize) -> (usize, usize) {
    let mut start = 0;
    for (i, b) in blocks.iter().enumerate() {
        let end = start + b.len();
        if offset <= end {
            return (i, offset - start);
        }
        start = end + 1;
    }
    match blocks.last() {
        Some(b) => (blocks.len() - 1, b.len()),
        None => (0, 0),
    }
}

/// Address of a position inside a block's content sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentAddress {
    /// Index into the block's content pieces.
    pub piece: usize,
    /// Byte offset within that piece. Always `0` for positions that fall
    /// inside an atomic node.
    pub offset: usize,
}

/// Resolves an intra-block offset to a content piece address.
///
/// Offsets landing strictly inside an atomic node (the task checkbox
/// marker) snap to the piece boundary: the marker has no caret-addressable
/// interior, so the address falls back to sibling-index arithmetic.
pub fn resolve_in_block(block: &BlockNode, intra: usize) -> ContentAddress {
    let intra = intra.min(block.len());
    let mut off = 0;
    for (i, p) in block.content.iter().enumerate() {
        let len = p.len();
        let last = i + 1 == block.content.len();
        if intra < off + len || (last && intra == off + len) {
            let within = intra - off;
            if let Piece::Node(n) = p {
                if n.is_atomic() && within > 0 && within < len {
                    return ContentAddress { piece: i, offset: 0 };
                }
            }
            return ContentAddress { piece: i, offset: within };
        }
        off += len;
    }
    ContentAddress { piece: 0, offset: 0 }
}
