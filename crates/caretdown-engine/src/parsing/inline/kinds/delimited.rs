use crate::parsing::inline::parser::parse_inline;
use crate::parsing::inline::types::{InlineKind, InlineNode, Piece};

/// Symmetric-marker constructs: emphasis, strong, strikethrough, underline,
/// highlight. All share the same opener/closer matching rule.
pub struct Delimited;

impl Delimited {
    pub const STRONG_ASTERISK: &'static str = "**";
    pub const STRONG_UNDERSCORE: &'static str = "__";
    pub const EMPHASIS_ASTERISK: &'static str = "*";
    pub const EMPHASIS_UNDERSCORE: &'static str = "_";
    pub const STRIKETHROUGH: &'static str = "~~";
    pub const UNDERLINE: &'static str = "~";
    pub const HIGHLIGHT: &'static str = "::";

    /// Attempts to parse a symmetric construct at the start of `rest`.
    ///
    /// Inner content is parsed recursively. Returns the node and the number
    /// of bytes consumed, or `None` when no valid closer exists (the opener
    /// then degrades to literal text in the caller).
    pub fn try_parse(rest: &str, marker: &str, kind: InlineKind) -> Option<(InlineNode, usize)> {
        if !rest.starts_with(marker) {
            return None;
        }
        let inner_src = &rest[marker.len()..];
        let inner_len = Self::find_closer(inner_src, marker)?;
        let inner = &inner_src[..inner_len];

        let mut content = Vec::with_capacity(3);
        content.push(Piece::Text(marker.to_string()));
        content.extend(parse_inline(inner));
        content.push(Piece::Text(marker.to_string()));

        Some((InlineNode { kind, content }, marker.len() * 2 + inner_len))
    }

    /// Finds the nearest valid closer in `s` (which starts right after the
    /// opener), returning the inner content length.
    ///
    /// Matching rule: the byte right after the opener must not be whitespace
    /// (`* text` never opens on a trailing space), the byte right before
    /// the closer must not be whitespace (`* not emphasis *` stays literal),
    /// and the inner span must be non-empty, so leftover marker characters
    /// (`**unclosed` seen by the single-asterisk pass) never close on
    /// themselves.
    fn find_closer(s: &str, marker: &str) -> Option<usize> {
        let first = s.as_bytes().first().copied()?;
        if first.is_ascii_whitespace() {
            return None;
        }
        let mut at = 0;
        while let Some(found) = s[at..].find(marker) {
            let idx = at + found;
            if idx > 0 && !s.as_bytes()[idx - 1].is_ascii_whitespace() {
                return Some(idx);
            }
            at = idx + 1;
        }
        None
    }
}
