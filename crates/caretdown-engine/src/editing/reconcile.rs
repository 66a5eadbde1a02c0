//! # Reconciliation
//!
//! Rebuilds the block sequence after an edit while aliasing every block the
//! edit could not have touched. Reuse is line-indexed: blocks whose source
//! lines are strictly before the edited lines keep their prefix position,
//! blocks strictly after are matched by shifted start line. Reused blocks
//! are the same `Rc` allocations, so hosts can skip re-rendering them by
//! pointer identity.
//!
//! When the rebuilt sequence fails its line accounting check the edit span
//! no longer describes the text we were given; the reconciler logs the
//! divergence and falls back to a full reparse rather than returning a
//! stale tree.

use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::parsing::blocks::{classify, parser::parse_block_at};
use crate::parsing::{parse_document, serialize_blocks, Block, BlockKind};

/// A single contiguous text replacement: `old_len` bytes at `start` were
/// replaced by `new_len` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditSpan {
    pub start: usize,
    pub old_len: usize,
    pub new_len: usize,
}

impl EditSpan {
    pub fn insert(at: usize, len: usize) -> Self {
        Self {
            start: at,
            old_len: 0,
            new_len: len,
        }
    }

    pub fn delete(at: usize, len: usize) -> Self {
        Self {
            start: at,
            old_len: len,
            new_len: 0,
        }
    }

    pub fn replace(at: usize, old_len: usize, new_len: usize) -> Self {
        Self {
            start: at,
            old_len,
            new_len,
        }
    }
}

/// Counters from one reconcile pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    /// Blocks aliased from the previous tree.
    pub reused: usize,
    /// Blocks rebuilt from the new text.
    pub reparsed: usize,
    /// True when incremental reuse was abandoned for a full reparse.
    pub fell_back: bool,
}

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("edit span {start}+{old_len} exceeds document length {len}")]
    EditOutOfBounds {
        start: usize,
        old_len: usize,
        len: usize,
    },
    #[error("line accounting diverged: rebuilt {rebuilt} lines, expected {expected}")]
    LineAccounting { rebuilt: usize, expected: usize },
}

/// Reconciles the previous block sequence against the edited text.
pub fn reconcile(prev: &[Block], new_text: &str, edit: &EditSpan) -> Vec<Block> {
    reconcile_with_stats(prev, new_text, edit).0
}

/// Like [`reconcile`], also reporting reuse counters. Never fails: when the
/// incremental pass detects a divergence it logs and reparses from scratch.
pub fn reconcile_with_stats(
    prev: &[Block],
    new_text: &str,
    edit: &EditSpan,
) -> (Vec<Block>, ReconcileStats) {
    match try_reconcile(prev, new_text, edit) {
        Ok(out) => out,
        Err(err) => {
            warn!(%err, "incremental reconcile diverged, reparsing document");
            let blocks = parse_document(new_text);
            let stats = ReconcileStats {
                reused: 0,
                reparsed: blocks.len(),
                fell_back: true,
            };
            (blocks, stats)
        }
    }
}

fn try_reconcile(
    prev: &[Block],
    new_text: &str,
    edit: &EditSpan,
) -> Result<(Vec<Block>, ReconcileStats), ReconcileError> {
    let old_text = serialize_blocks(prev);
    if edit.start + edit.old_len > old_text.len()
        || old_text.len() - edit.old_len + edit.new_len != new_text.len()
    {
        return Err(ReconcileError::EditOutOfBounds {
            start: edit.start,
            old_len: edit.old_len,
            len: old_text.len(),
        });
    }

    let new_lines: Vec<&str> = new_text.split('\n').collect();
    let old_line_count = old_text.split('\n').count();

    // Line indices bracketing the edit. Text before `edit.start` is shared,
    // so the first touched line is the same in both documents. An edit that
    // ends exactly at a line boundary leaves the following line intact, so
    // the boundary line itself is already clean.
    let first_line = count_newlines(&old_text[..edit.start]);
    let suffix_from = boundary_line(&old_text, edit.start + edit.old_len);
    let resync_line = boundary_line(new_text, edit.start + edit.new_len);
    let line_delta = new_lines.len() as isize - old_line_count as isize;

    let mut out = Vec::with_capacity(prev.len());
    let mut stats = ReconcileStats::default();

    // Prefix: alias blocks whose lines all precede the edit. Stop early at a
    // degraded fence opener; an edit further down can retroactively close it
    // and change what those lines mean.
    let mut at = 0;
    for b in prev {
        if at + b.line_span > first_line || fence_sensitive(b) {
            break;
        }
        out.push(Rc::clone(b));
        stats.reused += 1;
        at += b.line_span;
    }

    // Suffix candidates by old start line, for blocks whose lines all come
    // after the edited region.
    let mut suffix: HashMap<usize, &Block> = HashMap::new();
    let mut old_at = 0;
    for b in prev {
        if old_at >= suffix_from {
            suffix.insert(old_at, b);
        }
        old_at += b.line_span;
    }

    // Middle: reparse until a suffix block lines up again, then alternate
    // between aliasing and reparsing. A block can only be aliased once the
    // cursor is past the edited lines and a previous block started at the
    // shifted position.
    while at < new_lines.len() {
        if at >= resync_line {
            let old_line = at as isize - line_delta;
            if old_line >= 0 {
                if let Some(b) = suffix.get(&(old_line as usize)) {
                    if at + b.line_span <= new_lines.len() {
                        out.push(Rc::clone(b));
                        stats.reused += 1;
                        at += b.line_span;
                        continue;
                    }
                }
            }
        }
        let (node, span) = parse_block_at(&new_lines, at);
        out.push(Rc::new(node));
        stats.reparsed += 1;
        at += span;
    }

    let rebuilt: usize = out.iter().map(|b| b.line_span).sum();
    if rebuilt != new_lines.len() {
        return Err(ReconcileError::LineAccounting {
            rebuilt,
            expected: new_lines.len(),
        });
    }

    debug!(
        reused = stats.reused,
        reparsed = stats.reparsed,
        "reconciled edit"
    );
    Ok((out, stats))
}

/// True for a block that parses differently once a fence closer appears
/// below it: its first line opens a fence but the block itself is not a
/// fenced code block, so the opener degraded for want of a closer.
fn fence_sensitive(b: &Block) -> bool {
    if matches!(b.kind, BlockKind::CodeFence { .. }) {
        return false;
    }
    let text = b.text();
    let first = text.split('\n').next().unwrap_or("");
    classify(first).fence.is_some()
}

fn count_newlines(s: &str) -> usize {
    s.as_bytes().iter().filter(|&&b| b == b'\n').count()
}

/// Index of the first line whose content starts at or after byte `p`. When
/// `p` sits exactly on a line start that line is already clean; otherwise
/// the line containing `p` is dirty and the next one is the boundary.
fn boundary_line(s: &str, p: usize) -> usize {
    let lines = count_newlines(&s[..p]);
    if p == 0 || s.as_bytes()[p - 1] == b'\n' {
        lines
    } else {
        lines + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::doc_len;

    fn apply(text: &str, edit: &EditSpan, insert: &str) -> String {
        let mut out = String::new();
        out.push_str(&text[..edit.start]);
        out.push_str(insert);
        out.push_str(&text[edit.start + edit.old_len..]);
        out
    }

    #[test]
    fn untouched_blocks_keep_identity() {
        let old_text = "# title\n\npara one\npara two";
        let prev = parse_document(old_text);
        // Type "!" at the end of "para one".
        let edit = EditSpan::insert(17, 1);
        let new_text = apply(old_text, &edit, "!");
        let (next, stats) = reconcile_with_stats(&prev, &new_text, &edit);

        assert_eq!(serialize_blocks(&next), new_text);
        assert!(Rc::ptr_eq(&prev[0], &next[0]));
        assert!(Rc::ptr_eq(&prev[1], &next[1]));
        assert!(!Rc::ptr_eq(&prev[2], &next[2]));
        assert!(Rc::ptr_eq(&prev[3], &next[3]));
        assert_eq!(stats.reused, 3);
        assert_eq!(stats.reparsed, 1);
        assert!(!stats.fell_back);
    }

    #[test]
    fn reused_blocks_keep_ids() {
        let old_text = "alpha\nbeta";
        let prev = parse_document(old_text);
        let edit = EditSpan::insert(10, 1);
        let new_text = apply(old_text, &edit, "!");
        let next = reconcile(&prev, &new_text, &edit);
        assert_eq!(next[0].id, prev[0].id);
        assert_ne!(next[1].id, prev[1].id);
    }

    #[test]
    fn inserting_lines_shifts_suffix_reuse() {
        let old_text = "one\ntwo\nthree";
        let prev = parse_document(old_text);
        // Insert a whole new line after "one\n".
        let edit = EditSpan::insert(4, 4);
        let new_text = apply(old_text, &edit, "NEW\n");
        let (next, stats) = reconcile_with_stats(&prev, &new_text, &edit);

        assert_eq!(serialize_blocks(&next), new_text);
        assert_eq!(next.len(), 4);
        assert!(Rc::ptr_eq(&prev[0], &next[0]));
        assert!(Rc::ptr_eq(&prev[1], &next[2]));
        assert!(Rc::ptr_eq(&prev[2], &next[3]));
        assert_eq!(stats.reparsed, 1);
    }

    #[test]
    fn deleting_a_line_shifts_suffix_reuse() {
        let old_text = "one\ntwo\nthree";
        let prev = parse_document(old_text);
        let edit = EditSpan::delete(4, 4); // remove "two\n"
        let new_text = apply(old_text, &edit, "");
        let next = reconcile(&prev, &new_text, &edit);

        assert_eq!(serialize_blocks(&next), new_text);
        assert_eq!(next.len(), 2);
        assert!(Rc::ptr_eq(&prev[0], &next[0]));
        assert!(Rc::ptr_eq(&prev[2], &next[1]));
    }

    #[test]
    fn adding_a_closer_reopens_a_degraded_fence() {
        let old_text = "```rust\nlet x = 1;";
        let prev = parse_document(old_text);
        assert!(prev.iter().all(|b| b.kind == BlockKind::Paragraph));

        let edit = EditSpan::insert(old_text.len(), 4);
        let new_text = apply(old_text, &edit, "\n```");
        let next = reconcile(&prev, &new_text, &edit);

        assert_eq!(next.len(), 1);
        assert_eq!(
            next[0].kind,
            BlockKind::CodeFence {
                lang: Some("rust".into())
            }
        );
        assert_eq!(serialize_blocks(&next), new_text);
    }

    #[test]
    fn removing_a_closer_degrades_the_fence() {
        let old_text = "```\ncode\n```\ntail";
        let prev = parse_document(old_text);
        assert!(matches!(prev[0].kind, BlockKind::CodeFence { .. }));

        let edit = EditSpan::delete(9, 4); // remove "```\n"
        let new_text = apply(old_text, &edit, "");
        let next = reconcile(&prev, &new_text, &edit);

        assert_eq!(serialize_blocks(&next), new_text);
        assert!(next.iter().all(|b| b.kind == BlockKind::Paragraph));
    }

    #[test]
    fn splitting_a_block_in_half() {
        let old_text = "hello world";
        let prev = parse_document(old_text);
        let edit = EditSpan::insert(5, 1);
        let new_text = apply(old_text, &edit, "\n");
        let next = reconcile(&prev, &new_text, &edit);

        assert_eq!(next.len(), 2);
        assert_eq!(serialize_blocks(&next), new_text);
        assert_eq!(doc_len(&next), new_text.len());
    }

    #[test]
    fn bogus_edit_span_falls_back_to_full_reparse() {
        let prev = parse_document("one\ntwo");
        let edit = EditSpan::delete(100, 5);
        let (next, stats) = reconcile_with_stats(&prev, "one\ntwo", &edit);
        assert!(stats.fell_back);
        assert_eq!(serialize_blocks(&next), "one\ntwo");
    }

    #[test]
    fn empty_previous_tree_parses_everything() {
        let edit = EditSpan::insert(0, 3);
        let (next, stats) = reconcile_with_stats(&[], "abc", &edit);
        assert_eq!(next.len(), 1);
        assert_eq!(stats.reparsed, 1);
        assert!(!stats.fell_back);
    }
}
