use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::inline::types::{InlineKind, InlineNode, Piece};

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([A-Za-z0-9_/-]+)").expect("tag regex"));

/// Hashtag `#word`.
pub struct Tag;

impl Tag {
    pub const HASH: char = '#';

    /// Attempts to parse a tag at the start of `rest`.
    ///
    /// Tags require non-empty content after `#`, forbid whitespace inside,
    /// and only open at the start of the input or after whitespace (so
    /// `a#b` stays literal text).
    pub fn try_parse(rest: &str, prev: Option<u8>) -> Option<(InlineNode, usize)> {
        if let Some(b) = prev {
            if !b.is_ascii_whitespace() {
                return None;
            }
        }
        let caps = TAG_RE.captures(rest)?;
        let word = caps.get(1)?.as_str();

        let content = vec![
            Piece::Text(Self::HASH.to_string()),
            Piece::Text(word.to_string()),
        ];

        Some((
            InlineNode {
                kind: InlineKind::Tag,
                content,
            },
            1 + word.len(),
        ))
    }

    /// The word stored in a parsed tag node.
    pub fn word(node: &InlineNode) -> Option<&str> {
        match node.content.get(1) {
            Some(Piece::Text(t)) => Some(t),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_tag() {
        let (node, len) = Tag::try_parse("#todo rest", None).unwrap();
        assert_eq!(len, 5);
        assert_eq!(Tag::word(&node), Some("todo"));
    }

    #[test]
    fn empty_tag_rejected() {
        assert!(Tag::try_parse("# heading-ish", None).is_none());
        assert!(Tag::try_parse("#", None).is_none());
    }

    #[test]
    fn mid_word_hash_rejected() {
        assert!(Tag::try_parse("#x", Some(b'a')).is_none());
        assert!(Tag::try_parse("#x", Some(b' ')).is_some());
    }

    #[test]
    fn tag_stops_at_whitespace() {
        let (_, len) = Tag::try_parse("#a/b-c_d more", None).unwrap();
        assert_eq!(len, 8);
    }
}
