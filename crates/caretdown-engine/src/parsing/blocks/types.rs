use std::rc::Rc;

use uuid::Uuid;

use crate::parsing::inline::Piece;

/// A block handle. Blocks are immutable once built; the reconciler aliases
/// unchanged blocks across edits, so hosts can use pointer identity
/// (`Rc::ptr_eq`) to skip re-rendering.
pub type Block = Rc<BlockNode>;

/// Stable identifier minted when a block is constructed and preserved by
/// reuse across edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(Uuid);

impl BlockId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

/// The derived kind of a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading { level: u8 },
    BulletItem { marker: char },
    OrderedItem { number: u64 },
    TaskItem { checked: bool },
    BlockQuote,
    ThematicBreak,
    CodeFence { lang: Option<String> },
}

impl BlockKind {
    /// Kind equality at the variant level, ignoring payload fields. This is
    /// the reconciler's reuse criterion: same derived type at the same
    /// logical line offset.
    pub fn same_kind(&self, other: &BlockKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Composite blocks are rendered wholesale by the decoration planner:
    /// replaced by a widget when unfocused, emitted raw (without descending)
    /// when focused.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            BlockKind::CodeFence { .. }
                | BlockKind::TaskItem { .. }
                | BlockKind::BlockQuote
                | BlockKind::ThematicBreak
        )
    }
}

/// A parsed block.
///
/// `content` is the ordered concatenation of literal marker text, literal
/// runs and inline nodes; serializing the pieces in order reproduces the
/// exact source lines the block was parsed from (joined with `\n`).
#[derive(Debug)]
pub struct BlockNode {
    pub id: BlockId,
    pub kind: BlockKind,
    pub content: Vec<Piece>,
    /// Number of source lines this block consumed.
    pub line_span: usize,
}

impl BlockNode {
    pub fn new(kind: BlockKind, content: Vec<Piece>, line_span: usize) -> Self {
        Self {
            id: BlockId::new(),
            kind,
            content,
            line_span,
        }
    }

    /// Byte length of the block's serialized form.
    pub fn len(&self) -> usize {
        self.content.iter().map(Piece::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The block's exact source text.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    /// Appends the block's exact source text to `out`.
    pub fn write_to(&self, out: &mut String) {
        for p in &self.content {
            p.write_to(out);
        }
    }

    /// Structural equality: same kind and spans, ignoring block identity.
    /// Used by idempotence checks; `PartialEq` is deliberately not derived
    /// because two parses of the same text mint distinct ids.
    pub fn structural_eq(&self, other: &BlockNode) -> bool {
        self.kind == other.kind
            && self.line_span == other.line_span
            && self.content == other.content
    }
}
