use super::cursor::Cursor;
use super::kinds::{CodeSpan, Delimited, Embed, Link, Reference, Tag};
use super::types::{InlineKind, InlineNode, Piece};

/// Parses a line's text into a sequence of literal runs and inline nodes.
///
/// Scans left to right; at each position the constructs are tried in fixed
/// priority order: link, strong, emphasis, strikethrough, underline,
/// highlight, reference, code span, embed, tag. A construct with no valid
/// closer degrades to literal text - the parser never fails.
///
/// Concatenating the returned pieces in order reproduces `s` exactly.
pub fn parse_inline(s: &str) -> Vec<Piece> {
    let mut out = Vec::new();
    let mut cur = Cursor::new(s);
    let mut text_start = 0;

    while !cur.eof() {
        if let Some((node, consumed)) = try_node_at(&cur) {
            flush_text(&mut out, s, text_start, cur.pos());
            out.push(Piece::Node(node));
            cur.bump_n(consumed);
            text_start = cur.pos();
        } else {
            cur.bump();
        }
    }
    flush_text(&mut out, s, text_start, cur.pos());
    out
}

fn flush_text(out: &mut Vec<Piece>, s: &str, start: usize, end: usize) {
    if end > start {
        out.push(Piece::Text(s[start..end].to_string()));
    }
}

/// Tries every construct at the cursor in priority order.
fn try_node_at(cur: &Cursor<'_>) -> Option<(InlineNode, usize)> {
    let rest = cur.rest();
    Link::try_parse(rest)
        .or_else(|| Delimited::try_parse(rest, Delimited::STRONG_ASTERISK, InlineKind::Strong))
        .or_else(|| Delimited::try_parse(rest, Delimited::STRONG_UNDERSCORE, InlineKind::Strong))
        .or_else(|| Delimited::try_parse(rest, Delimited::EMPHASIS_ASTERISK, InlineKind::Emphasis))
        .or_else(|| {
            Delimited::try_parse(rest, Delimited::EMPHASIS_UNDERSCORE, InlineKind::Emphasis)
        })
        .or_else(|| Delimited::try_parse(rest, Delimited::STRIKETHROUGH, InlineKind::Strikethrough))
        .or_else(|| Delimited::try_parse(rest, Delimited::UNDERLINE, InlineKind::Underline))
        .or_else(|| Delimited::try_parse(rest, Delimited::HIGHLIGHT, InlineKind::Highlight))
        .or_else(|| Reference::try_parse(rest))
        .or_else(|| CodeSpan::try_parse(rest))
        .or_else(|| Embed::try_parse(rest))
        .or_else(|| Tag::try_parse(rest, cur.prev_byte()))
}
