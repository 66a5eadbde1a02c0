use std::rc::Rc;

use super::classify::{classify, LineShape};
use super::kinds::{CodeFence, FenceSig};
use super::types::{Block, BlockKind, BlockNode};
use crate::parsing::inline::{parse_inline, InlineKind, InlineNode, Piece};

/// Parses a document's lines into a block sequence.
///
/// Every line is consumed by exactly one block; the sum of all `line_span`s
/// equals `lines.len()`. Blank lines become empty placeholder paragraphs so
/// line accounting stays exact for the reconciler.
pub fn parse_blocks(lines: &[&str]) -> Vec<Block> {
    let mut out = Vec::new();
    let mut at = 0;
    while at < lines.len() {
        let (node, span) = parse_block_at(lines, at);
        at += span;
        out.push(Rc::new(node));
    }
    out
}

/// Parses one block starting at line `at`, returning the node and the number
/// of lines consumed.
///
/// Line rules are tried in fixed priority: fenced code (needs a matching
/// closer line, otherwise falls through), heading, thematic break, task
/// item, ordered item, bullet item, blockquote, paragraph.
pub(crate) fn parse_block_at(lines: &[&str], at: usize) -> (BlockNode, usize) {
    let lc = classify(lines[at]);

    if let Some(sig) = lc.fence {
        if let Some(close) = find_fence_close(lines, at + 1) {
            return (fence_node(lines, at, close, sig), close - at + 1);
        }
        // Unterminated fence: degrade to the lower-priority line rules.
    }

    let node = match lc.shape {
        LineShape::Blank => BlockNode::new(BlockKind::Paragraph, vec![], 1),
        LineShape::Heading { level, marker, rest } => {
            let mut content = vec![Piece::Text(marker.to_string())];
            content.extend(parse_inline(rest));
            BlockNode::new(BlockKind::Heading { level }, content, 1)
        }
        LineShape::ThematicBreak => BlockNode::new(
            BlockKind::ThematicBreak,
            vec![Piece::Text(lc.raw.to_string())],
            1,
        ),
        LineShape::TaskItem { prefix, checked, rest } => {
            // The marker is an atomic node: the caret mapper never addresses
            // positions inside it.
            let marker = InlineNode {
                kind: InlineKind::Checkbox { checked },
                content: vec![Piece::Text(prefix.to_string())],
            };
            let mut content = vec![Piece::Node(marker)];
            content.extend(parse_inline(rest));
            BlockNode::new(BlockKind::TaskItem { checked }, content, 1)
        }
        LineShape::OrderedItem { prefix, number, rest } => {
            let mut content = vec![Piece::Text(prefix.to_string())];
            content.extend(parse_inline(rest));
            BlockNode::new(BlockKind::OrderedItem { number }, content, 1)
        }
        LineShape::BulletItem { prefix, marker, rest } => {
            let mut content = vec![Piece::Text(prefix.to_string())];
            content.extend(parse_inline(rest));
            BlockNode::new(BlockKind::BulletItem { marker }, content, 1)
        }
        LineShape::BlockQuote { prefix, rest } => {
            let mut content = vec![Piece::Text(prefix.to_string())];
            content.extend(parse_inline(rest));
            BlockNode::new(BlockKind::BlockQuote, content, 1)
        }
        LineShape::Paragraph => {
            BlockNode::new(BlockKind::Paragraph, parse_inline(lc.raw), 1)
        }
    };
    (node, 1)
}

/// Finds the closing fence line at or after `from`.
fn find_fence_close(lines: &[&str], from: usize) -> Option<usize> {
    (from..lines.len()).find(|&i| CodeFence::closes(lines[i]))
}

/// Builds a fenced code block from the opener at `open` through the closer
/// at `close`. The body is raw: it is stored verbatim and never passed
/// through the inline parser.
fn fence_node(lines: &[&str], open: usize, close: usize, sig: FenceSig<'_>) -> BlockNode {
    let mut content = vec![Piece::Text(lines[open].to_string())];
    if close == open + 1 {
        content.push(Piece::Text("\n".to_string()));
    } else {
        let body = lines[open + 1..close].join("\n");
        content.push(Piece::Text(format!("\n{body}\n")));
    }
    content.push(Piece::Text(lines[close].to_string()));

    BlockNode::new(
        BlockKind::CodeFence {
            lang: sig.lang.map(str::to_string),
        },
        content,
        close - open + 1,
    )
}
