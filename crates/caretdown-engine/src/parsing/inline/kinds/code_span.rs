use crate::parsing::inline::types::{InlineKind, InlineNode, Piece};

/// Inline code span. A raw zone: content between the backticks is stored as
/// literal text and never re-parsed.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: char = '`';

    /// Attempts to parse a code span at the start of `rest`.
    ///
    /// Returns `None` if `rest` does not start with a backtick or no closing
    /// backtick exists on the line.
    pub fn try_parse(rest: &str) -> Option<(InlineNode, usize)> {
        let inner_src = rest.strip_prefix(Self::TICK)?;
        let close = inner_src.find(Self::TICK)?;

        let mut content = Vec::with_capacity(3);
        content.push(Piece::Text(Self::TICK.to_string()));
        if close > 0 {
            content.push(Piece::Text(inner_src[..close].to_string()));
        }
        content.push(Piece::Text(Self::TICK.to_string()));

        Some((
            InlineNode {
                kind: InlineKind::Code,
                content,
            },
            close + 2,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_code_span() {
        let (node, len) = CodeSpan::try_parse("`code` rest").unwrap();
        assert_eq!(len, 6);
        assert_eq!(node.kind, InlineKind::Code);
        let mut s = String::new();
        node.write_to(&mut s);
        assert_eq!(s, "`code`");
    }

    #[test]
    fn content_is_not_reparsed() {
        let (node, _) = CodeSpan::try_parse("`**not bold**`").unwrap();
        // Inner content stays a single literal text piece.
        assert!(matches!(&node.content[1], Piece::Text(t) if t == "**not bold**"));
    }

    #[test]
    fn empty_code_span() {
        let (node, len) = CodeSpan::try_parse("``").unwrap();
        assert_eq!(len, 2);
        assert_eq!(node.content.len(), 2);
    }

    #[test]
    fn unclosed_returns_none() {
        assert!(CodeSpan::try_parse("`unclosed").is_none());
    }
}
