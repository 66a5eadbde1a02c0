use crate::parsing::inline::types::{InlineKind, InlineNode, Piece};

/// Internal reference `[[target]]`.
pub struct Reference;

impl Reference {
    pub const OPEN: &'static str = "[[";
    pub const CLOSE: &'static str = "]]";

    /// Attempts to parse a reference at the start of `rest`.
    pub fn try_parse(rest: &str) -> Option<(InlineNode, usize)> {
        let inner_src = rest.strip_prefix(Self::OPEN)?;
        let close = inner_src.find(Self::CLOSE)?;
        let target = &inner_src[..close];

        let mut content = Vec::with_capacity(3);
        content.push(Piece::Text(Self::OPEN.to_string()));
        if !target.is_empty() {
            content.push(Piece::Text(target.to_string()));
        }
        content.push(Piece::Text(Self::CLOSE.to_string()));

        Some((
            InlineNode {
                kind: InlineKind::Reference,
                content,
            },
            Self::OPEN.len() + close + Self::CLOSE.len(),
        ))
    }
}
