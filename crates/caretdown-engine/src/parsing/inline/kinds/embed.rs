use crate::parsing::inline::types::{InlineKind, InlineNode, Piece};

/// Embedded file and image references: `[file:path]` and `[image:path]`.
pub struct Embed;

impl Embed {
    pub const FILE_OPEN: &'static str = "[file:";
    pub const IMAGE_OPEN: &'static str = "[image:";
    pub const CLOSE: char = ']';

    /// Attempts to parse an embed at the start of `rest`.
    ///
    /// The path must be non-empty and may not contain a nested `[`.
    pub fn try_parse(rest: &str) -> Option<(InlineNode, usize)> {
        let (open, kind) = if rest.starts_with(Self::FILE_OPEN) {
            (Self::FILE_OPEN, InlineKind::FileEmbed)
        } else if rest.starts_with(Self::IMAGE_OPEN) {
            (Self::IMAGE_OPEN, InlineKind::ImageEmbed)
        } else {
            return None;
        };

        let inner_src = &rest[open.len()..];
        let close = inner_src.find(Self::CLOSE)?;
        let path = &inner_src[..close];
        if path.is_empty() || path.contains('[') {
            return None;
        }

        let content = vec![
            Piece::Text(open.to_string()),
            Piece::Text(path.to_string()),
            Piece::Text(Self::CLOSE.to_string()),
        ];

        Some((InlineNode { kind, content }, open.len() + close + 1))
    }

    /// The path stored in a parsed embed node.
    pub fn path(node: &InlineNode) -> Option<&str> {
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
    fn file_embed() {
        let (node, len) = Embed::try_parse("[file:notes/a.md] x").unwrap();
        assert_eq!(len, 17);
        assert_eq!(node.kind, InlineKind::FileEmbed);
        assert_eq!(Embed::path(&node), Some("notes/a.md"));
    }

    #[test]
    fn image_embed() {
        let (node, len) = Embed::try_parse("[image:pic.png]").unwrap();
        assert_eq!(len, 15);
        assert_eq!(node.kind, InlineKind::ImageEmbed);
    }

    #[test]
    fn empty_path_rejected() {
        assert!(Embed::try_parse("[file:]").is_none());
    }

    #[test]
    fn unclosed_rejected() {
        assert!(Embed::try_parse("[image:pic.png").is_none());
    }
}
