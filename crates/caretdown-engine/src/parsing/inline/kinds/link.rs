use crate::parsing::inline::parser::parse_inline;
use crate::parsing::inline::types::{InlineKind, InlineNode, Piece};

/// Markdown link `[label](url)`.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const LABEL_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';

    /// Attempts to parse a link at the start of `rest`.
    ///
    /// The label may not contain a nested `[`, the url part may not contain a
    /// nested `(`, and empty `()` is rejected; in all those cases the opening
    /// bracket degrades to literal text in the caller.
    pub fn try_parse(rest: &str) -> Option<(InlineNode, usize)> {
        let bytes = rest.as_bytes();
        if bytes.first() != Some(&Self::OPEN) {
            return None;
        }

        let mut i = 1;
        while i < bytes.len() && bytes[i] != Self::LABEL_CLOSE {
            if bytes[i] == Self::OPEN {
                return None;
            }
            i += 1;
        }
        if i >= bytes.len() {
            return None;
        }
        let label = &rest[1..i];

        if bytes.get(i + 1) != Some(&Self::URL_OPEN) {
            return None;
        }
        let mut j = i + 2;
        while j < bytes.len() && bytes[j] != Self::URL_CLOSE {
            if bytes[j] == Self::URL_OPEN {
                return None;
            }
            j += 1;
        }
        if j >= bytes.len() {
            return None;
        }
        let url = &rest[i + 2..j];
        if url.is_empty() {
            return None;
        }

        let mut content = Vec::with_capacity(5);
        content.push(Piece::Text("[".to_string()));
        content.extend(parse_inline(label));
        content.push(Piece::Text("](".to_string()));
        content.push(Piece::Text(url.to_string()));
        content.push(Piece::Text(")".to_string()));

        Some((
            InlineNode {
                kind: InlineKind::Link,
                content,
            },
            j + 1,
        ))
    }

    /// The url stored in a parsed link node.
    pub fn url(node: &InlineNode) -> Option<&str> {
        debug_assert_eq!(node.kind, InlineKind::Link);
        match node.content.get(node.content.len().checked_sub(2)?) {
            Some(Piece::Text(t)) => Some(t),
            _ => None,
        }
    }
}
