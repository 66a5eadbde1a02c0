/// The kind of an inline node.
///
/// Every variant corresponds to one syntax construct the inline parser can
/// recognize. `Checkbox` is the atomic task-marker leaf produced by the block
/// parser; the caret mapper never addresses positions inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    /// `*text*` or `_text_`
    Emphasis,
    /// `**text**` or `__text__`
    Strong,
    /// `~~text~~`
    Strikethrough,
    /// `~text~`
    Underline,
    /// `::text::`
    Highlight,
    /// `` `text` `` - raw zone, content is never re-parsed
    Code,
    /// `[label](url)`
    Link,
    /// `[[target]]`
    Reference,
    /// `[file:path]`
    FileEmbed,
    /// `[image:path]`
    ImageEmbed,
    /// `#word`
    Tag,
    /// `- [ ] ` / `- [x] ` task marker (including leading indentation)
    Checkbox { checked: bool },
}

impl InlineKind {
    /// Short lowercase label used in decoration payloads and diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            InlineKind::Emphasis => "emphasis",
            InlineKind::Strong => "strong",
            InlineKind::Strikethrough => "strikethrough",
            InlineKind::Underline => "underline",
            InlineKind::Highlight => "highlight",
            InlineKind::Code => "code",
            InlineKind::Link => "link",
            InlineKind::Reference => "reference",
            InlineKind::FileEmbed => "file-embed",
            InlineKind::ImageEmbed => "image-embed",
            InlineKind::Tag => "tag",
            InlineKind::Checkbox { .. } => "checkbox",
        }
    }
}

/// A parsed inline node.
///
/// `content` holds the ordered concatenation of literal marker text, literal
/// runs and nested nodes. Serializing the pieces in order reproduces the
/// exact source substring the node was parsed from.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineNode {
    pub kind: InlineKind,
    pub content: Vec<Piece>,
}

/// One entry in a node's content sequence: literal text or a nested node.
#[derive(Debug, Clone, PartialEq)]
pub enum Piece {
    Text(String),
    Node(InlineNode),
}

impl InlineNode {
    /// Byte length of the node's serialized form.
    pub fn len(&self) -> usize {
        self.content.iter().map(Piece::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends the node's exact source text to `out`.
    pub fn write_to(&self, out: &mut String) {
        for p in &self.content {
            p.write_to(out);
        }
    }

    /// Atomic nodes have no caret-addressable interior positions.
    pub fn is_atomic(&self) -> bool {
        matches!(self.kind, InlineKind::Checkbox { .. })
    }
}

impl Piece {
    /// Byte length of the piece's serialized form.
    pub fn len(&self) -> usize {
        match self {
            Piece::Text(t) => t.len(),
            Piece::Node(n) => n.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends the piece's exact source text to `out`.
    pub fn write_to(&self, out: &mut String) {
        match self {
            Piece::Text(t) => out.push_str(t),
            Piece::Node(n) => n.write_to(out),
        }
    }
}
