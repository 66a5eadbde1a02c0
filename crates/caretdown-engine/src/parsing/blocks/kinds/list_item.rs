use std::sync::LazyLock;

use regex::Regex;

static ORDERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([ \t]*)(\d+)\. ").expect("ordered list regex"));

/// Task list item marker `- [ ] ` / `- [x] ` with arbitrary leading
/// indentation (preserved verbatim for nesting).
pub struct TaskMarker;

/// Parsed list marker facts. `prefix` is the indentation plus the marker
/// text, exactly as it appears in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParts<'a> {
    pub prefix: &'a str,
    pub rest: &'a str,
}

impl TaskMarker {
    /// Parses a task item line, returning the parts and the checked state.
    /// The checked state is case-insensitive (`x` or `X`).
    pub fn parse(line: &str) -> Option<(ListParts<'_>, bool)> {
        let indent = indent_len(line);
        let after = &line[indent..];
        let state = after.strip_prefix("- [")?.chars().next()?;
        let checked = match state {
            ' ' => false,
            'x' | 'X' => true,
            _ => return None,
        };
        if !after[4..].starts_with("] ") {
            return None;
        }
        let prefix_len = indent + 6; // "- [x] "
        Some((
            ListParts {
                prefix: &line[..prefix_len],
                rest: &line[prefix_len..],
            },
            checked,
        ))
    }
}

/// Ordered list item marker `N. `.
pub struct OrderedMarker;

impl OrderedMarker {
    pub fn parse(line: &str) -> Option<(ListParts<'_>, u64)> {
        let caps = ORDERED_RE.captures(line)?;
        let number: u64 = caps.get(2)?.as_str().parse().ok()?;
        let prefix_len = caps.get(0)?.end();
        Some((
            ListParts {
                prefix: &line[..prefix_len],
                rest: &line[prefix_len..],
            },
            number,
        ))
    }
}

/// Unordered list item marker: `-` or `*` plus a space.
pub struct UnorderedMarker;

impl UnorderedMarker {
    pub const DASH: char = '-';
    pub const ASTERISK: char = '*';

    pub fn parse(line: &str) -> Option<(ListParts<'_>, char)> {
        let indent = indent_len(line);
        let after = &line[indent..];
        let marker = after.chars().next()?;
        if marker != Self::DASH && marker != Self::ASTERISK {
            return None;
        }
        if after.as_bytes().get(1) != Some(&b' ') {
            return None;
        }
        let prefix_len = indent + 2;
        Some((
            ListParts {
                prefix: &line[..prefix_len],
                rest: &line[prefix_len..],
            },
            marker,
        ))
    }
}

fn indent_len(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}
