//! # Decoration planning
//!
//! Walks the block tree with the current selection and decides, per node,
//! whether its bytes stay raw editable markdown or get replaced by a widget.
//! A node is *focused* when the selection is strictly contained in its
//! range (`sel.start >= start && sel.end <= end`); focused nodes keep their
//! syntax visible so the user can edit it.
//!
//! Policy:
//! - Composite blocks (fenced code, task lists, blockquotes, rules) are
//!   replaced wholesale when unfocused. When focused the whole construct is
//!   emitted raw; the planner does not descend into a focused composite.
//!   Consecutive task items and consecutive quote lines form one construct.
//! - Inline rich elements hide only their delimiter characters when
//!   unfocused; the inner text stays raw. Focused elements show everything.
//! - List bullet markers become a glyph unless the caret sits at the marker
//!   or one character after it, so typing into the marker stays editable.
//!
//! The resulting entries are ordered, non-overlapping and cover the whole
//! document exactly; newlines between blocks are emitted as raw gaps.

use std::ops::Range;

use super::plan::{DecorationPlan, Mode, PlanEntry, PlanOptions, WidgetKind};
use crate::editing::caret::Selection;
use crate::parsing::inline::kinds::{Embed, Link, Tag};
use crate::parsing::{Block, BlockKind, InlineKind, InlineNode, Piece};

/// Computes the rendering plan for a block tree and selection.
pub fn plan_decorations(
    blocks: &[Block],
    sel: &Selection,
    opts: &PlanOptions,
) -> DecorationPlan {
    let mut p = Planner {
        entries: Vec::new(),
        sel: sel.normalized(),
        wysiwyg: opts.wysiwyg,
    };

    let mut i = 0;
    let mut off = 0;
    while i < blocks.len() {
        if i > 0 {
            // Joining newline between blocks.
            p.raw(off..off + 1);
            off += 1;
        }
        match composite_run(blocks, i) {
            Some((widget, count)) => {
                let group = &blocks[i..i + count];
                let len = group_len(group);
                p.composite(off..off + len, widget, group);
                off += len;
                i += count;
            }
            None => {
                p.block(&blocks[i], off);
                off += blocks[i].len();
                i += 1;
            }
        }
    }

    DecorationPlan { entries: p.entries }
}

/// The composite construct starting at `i`, if any: its widget and how many
/// consecutive blocks it spans. Task items and quote lines run together so
/// a list or quote reads as one unit.
fn composite_run(blocks: &[Block], i: usize) -> Option<(WidgetKind, usize)> {
    match &blocks[i].kind {
        BlockKind::TaskItem { .. } => {
            let count = blocks[i..]
                .iter()
                .take_while(|b| matches!(b.kind, BlockKind::TaskItem { .. }))
                .count();
            Some((WidgetKind::TaskList, count))
        }
        BlockKind::BlockQuote => {
            let count = blocks[i..]
                .iter()
                .take_while(|b| b.kind == BlockKind::BlockQuote)
                .count();
            Some((WidgetKind::Blockquote, count))
        }
        BlockKind::CodeFence { .. } => Some((WidgetKind::CodeBlock, 1)),
        BlockKind::ThematicBreak => Some((WidgetKind::Rule, 1)),
        _ => None,
    }
}

/// Serialized length of a block run, including inner joining newlines.
fn group_len(group: &[Block]) -> usize {
    group.iter().map(|b| b.len()).sum::<usize>() + group.len() - 1
}

struct Planner {
    entries: Vec<PlanEntry>,
    sel: Range<usize>,
    wysiwyg: bool,
}

impl Planner {
    fn focused(&self, range: &Range<usize>) -> bool {
        !self.wysiwyg && self.sel.start >= range.start && self.sel.end <= range.end
    }

    /// Emits a raw entry, merging with a preceding plain raw entry.
    fn raw(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        if let Some(last) = self.entries.last_mut() {
            if last.mode == Mode::Raw && last.range.end == range.start {
                last.range.end = range.end;
                return;
            }
        }
        self.entries.push(PlanEntry {
            range,
            mode: Mode::Raw,
            widget: None,
            payload: None,
        });
    }

    fn replace(&mut self, range: Range<usize>, widget: WidgetKind, payload: Option<String>) {
        self.entries.push(PlanEntry {
            range,
            mode: Mode::Replace,
            widget: Some(widget),
            payload,
        });
    }

    /// One composite construct: raw when focused (no descent), otherwise a
    /// single widget carrying the construct's source text.
    fn composite(&mut self, range: Range<usize>, widget: WidgetKind, group: &[Block]) {
        if self.focused(&range) {
            self.raw(range);
            return;
        }
        let mut payload = String::new();
        for (i, b) in group.iter().enumerate() {
            if i > 0 {
                payload.push('\n');
            }
            b.write_to(&mut payload);
        }
        self.replace(range, widget, Some(payload));
    }

    fn block(&mut self, b: &Block, off: usize) {
        let end = off + b.len();
        match &b.kind {
            BlockKind::Heading { level } => {
                let mlen = b.content[0].len();
                if self.focused(&(off..end)) {
                    self.raw(off..off + mlen);
                } else {
                    self.replace(
                        off..off + mlen,
                        WidgetKind::HeadingMarker,
                        Some(level.to_string()),
                    );
                }
                self.pieces(&b.content[1..], off + mlen);
            }
            BlockKind::BulletItem { marker } => {
                self.list_marker(b, off, WidgetKind::Bullet, marker.to_string())
            }
            BlockKind::OrderedItem { number } => {
                self.list_marker(b, off, WidgetKind::Number, number.to_string())
            }
            _ => self.pieces(&b.content, off),
        }
    }

    /// The marker is revealed when the caret sits at it or one character
    /// after it; typing into the marker position must stay editable.
    fn list_marker(&mut self, b: &Block, off: usize, widget: WidgetKind, payload: String) {
        let marker_end = off + b.content[0].len();
        let near =
            !self.wysiwyg && self.sel.start >= off && self.sel.end <= marker_end + 1;
        if near {
            self.raw(off..marker_end);
        } else {
            self.replace(off..marker_end, widget, Some(payload));
        }
        self.pieces(&b.content[1..], marker_end);
    }

    fn pieces(&mut self, pieces: &[Piece], mut off: usize) {
        for p in pieces {
            match p {
                Piece::Text(t) => {
                    self.raw(off..off + t.len());
                    off += t.len();
                }
                Piece::Node(n) => {
                    self.node(n, off);
                    off += n.len();
                }
            }
        }
    }

    fn node(&mut self, n: &InlineNode, off: usize) {
        let end = off + n.len();
        let focused = self.focused(&(off..end));
        match n.kind {
            InlineKind::Tag => {
                if focused {
                    self.raw(off..end);
                } else {
                    self.replace(off..end, WidgetKind::Tag, Tag::word(n).map(str::to_string));
                }
            }
            InlineKind::FileEmbed => {
                if focused {
                    self.raw(off..end);
                } else {
                    self.replace(
                        off..end,
                        WidgetKind::FileEmbed,
                        Embed::path(n).map(str::to_string),
                    );
                }
            }
            InlineKind::ImageEmbed => {
                if focused {
                    self.raw(off..end);
                } else {
                    self.replace(
                        off..end,
                        WidgetKind::ImageEmbed,
                        Embed::path(n).map(str::to_string),
                    );
                }
            }
            InlineKind::Code => {
                // The span body is a raw zone: no nested nodes to descend
                // into, only the ticks get hidden.
                if focused {
                    self.raw(off..end);
                } else {
                    let first = n.content[0].len();
                    let last = n.content[n.content.len() - 1].len();
                    self.marker(off..off + first);
                    self.raw(off + first..end - last);
                    self.marker(end - last..end);
                }
            }
            InlineKind::Link => {
                // Pieces: "[", label…, "](", url, ")". The whole suffix from
                // "](" on is hidden behind the link widget; the label stays
                // visible and its nested nodes decide for themselves.
                let open = n.content[0].len();
                let tail: usize = n.content[n.content.len() - 3..]
                    .iter()
                    .map(Piece::len)
                    .sum();
                let label = &n.content[1..n.content.len() - 3];
                if focused {
                    self.raw(off..off + open);
                    self.pieces(label, off + open);
                    self.raw(end - tail..end);
                } else {
                    self.marker(off..off + open);
                    self.pieces(label, off + open);
                    self.replace(
                        end - tail..end,
                        WidgetKind::Link,
                        Link::url(n).map(str::to_string),
                    );
                }
            }
            InlineKind::Checkbox { .. } => self.raw(off..end),
            // Symmetric delimited kinds, the reference link included: hide
            // the opener and closer, keep the inner text raw, descend.
            _ => {
                let first = n.content[0].len();
                let last = n.content[n.content.len() - 1].len();
                let inner = &n.content[1..n.content.len() - 1];
                if focused {
                    self.raw(off..off + first);
                    self.pieces(inner, off + first);
                    self.raw(end - last..end);
                } else {
                    self.marker(off..off + first);
                    self.pieces(inner, off + first);
                    self.marker(end - last..end);
                }
            }
        }
    }

    fn marker(&mut self, range: Range<usize>) {
        self.replace(range, WidgetKind::InlineMarker, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{doc_len, parse_document};

    fn plan(text: &str, caret: usize) -> DecorationPlan {
        let blocks = parse_document(text);
        plan_decorations(
            &blocks,
            &Selection::caret(caret),
            &PlanOptions::default(),
        )
    }

    fn plan_wysiwyg(text: &str, caret: usize) -> DecorationPlan {
        let blocks = parse_document(text);
        plan_decorations(
            &blocks,
            &Selection::caret(caret),
            &PlanOptions { wysiwyg: true },
        )
    }

    #[test]
    fn bold_with_caret_outside_hides_markers() {
        let p = plan("**bold**\nx", 10);
        assert!(p.is_covering(10));
        assert_eq!(p.entries[0].range, 0..2);
        assert_eq!(p.entries[0].mode, Mode::Replace);
        assert_eq!(p.entries[0].widget, Some(WidgetKind::InlineMarker));
        assert_eq!(p.entries[1].range, 2..6);
        assert_eq!(p.entries[1].mode, Mode::Raw);
        assert_eq!(p.entries[2].range, 6..8);
        assert_eq!(p.entries[2].mode, Mode::Replace);
    }

    #[test]
    fn bold_with_caret_inside_shows_markers() {
        let p = plan("**bold**", 4);
        assert!(p.is_covering(8));
        assert_eq!(p.entries.len(), 1);
        assert_eq!(p.entries[0].mode, Mode::Raw);
        assert_eq!(p.entries[0].range, 0..8);
    }

    #[test]
    fn task_run_is_one_replaced_widget() {
        let text = "- [ ] Buy milk\n- [x] Eggs\n";
        let p = plan(text, 26);
        assert!(p.is_covering(26));
        assert_eq!(p.entries[0].range, 0..25);
        assert_eq!(p.entries[0].mode, Mode::Replace);
        assert_eq!(p.entries[0].widget, Some(WidgetKind::TaskList));
        assert_eq!(p.entries[0].payload.as_deref(), Some(text.trim_end()));
        // Trailing newline plus empty placeholder stay raw.
        assert_eq!(p.entries[1].range, 25..26);
        assert_eq!(p.entries[1].mode, Mode::Raw);
    }

    #[test]
    fn caret_in_first_task_line_makes_whole_run_raw() {
        // The focused run goes raw and merges with the trailing raw gap.
        let p = plan("- [ ] Buy milk\n- [x] Eggs\n", 3);
        assert_eq!(p.entries.len(), 1);
        assert_eq!(p.entries[0].range, 0..26);
        assert_eq!(p.entries[0].mode, Mode::Raw);
        assert_eq!(p.entries[0].widget, None);
    }

    #[test]
    fn focused_code_fence_is_raw_without_descending() {
        let text = "```js\nlet x = **no**;\n```";
        let p = plan(text, 10);
        assert_eq!(p.entries.len(), 1);
        assert_eq!(p.entries[0].mode, Mode::Raw);
        assert_eq!(p.entries[0].range, 0..text.len());
    }

    #[test]
    fn unfocused_code_fence_is_one_widget() {
        let text = "```\ncode\n```\nafter";
        let p = plan(text, 15);
        assert_eq!(p.entries[0].range, 0..12);
        assert_eq!(p.entries[0].widget, Some(WidgetKind::CodeBlock));
        assert_eq!(p.entries[0].payload.as_deref(), Some("```\ncode\n```"));
    }

    #[test]
    fn bullet_marker_glyph_and_adjacency() {
        // Caret far from the marker: glyph.
        let p = plan("- milk", 5);
        assert_eq!(p.entries[0].range, 0..2);
        assert_eq!(p.entries[0].widget, Some(WidgetKind::Bullet));

        // Caret at the marker, inside it, or one character after: raw.
        for caret in [0, 1, 2, 3] {
            let p = plan("- milk", caret);
            assert_eq!(p.entries[0].mode, Mode::Raw, "caret {caret}");
        }
        let p = plan("- milk", 4);
        assert_eq!(p.entries[0].mode, Mode::Replace);
    }

    #[test]
    fn ordered_marker_carries_number() {
        let p = plan("7. seventh", 9);
        assert_eq!(p.entries[0].widget, Some(WidgetKind::Number));
        assert_eq!(p.entries[0].payload.as_deref(), Some("7"));
    }

    #[test]
    fn heading_marker_hidden_unless_block_focused() {
        let p = plan("## title\nx", 10);
        assert_eq!(p.entries[0].range, 0..3);
        assert_eq!(p.entries[0].widget, Some(WidgetKind::HeadingMarker));
        assert_eq!(p.entries[0].payload.as_deref(), Some("2"));

        let p = plan("## title\nx", 4);
        assert_eq!(p.entries[0].mode, Mode::Raw);
    }

    #[test]
    fn link_hides_url_and_keeps_label() {
        let text = "[home](https://example.com)\nx";
        let p = plan(text, text.len());
        assert_eq!(p.entries[0].range, 0..1);
        assert_eq!(p.entries[0].widget, Some(WidgetKind::InlineMarker));
        assert_eq!(p.entries[1].range, 1..5);
        assert_eq!(p.entries[1].mode, Mode::Raw);
        assert_eq!(p.entries[2].range, 5..27);
        assert_eq!(p.entries[2].widget, Some(WidgetKind::Link));
        assert_eq!(
            p.entries[2].payload.as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn tag_replaced_whole() {
        let p = plan("see #inbox now", 0);
        let tag = p
            .entries
            .iter()
            .find(|e| e.widget == Some(WidgetKind::Tag))
            .unwrap();
        assert_eq!(tag.range, 4..10);
        assert_eq!(tag.payload.as_deref(), Some("inbox"));
    }

    #[test]
    fn wysiwyg_hides_syntax_even_under_caret() {
        let p = plan_wysiwyg("**bold**", 4);
        assert_eq!(p.entries[0].mode, Mode::Replace);
        assert_eq!(p.entries[0].range, 0..2);

        let p = plan_wysiwyg("- [ ] task", 3);
        assert_eq!(p.entries[0].mode, Mode::Replace);
        assert_eq!(p.entries[0].widget, Some(WidgetKind::TaskList));
    }

    #[test]
    fn plans_cover_exactly_for_mixed_documents() {
        let texts = [
            "",
            "plain",
            "# h\n\n**b** and `c`\n- item\n1. one\n- [ ] t\n> q\n---\n```\nx\n```",
            "a [l](u) b #tag [[ref]] [file:p.md] [image:i.png]",
        ];
        for text in texts {
            let blocks = parse_document(text);
            for caret in 0..=text.len() {
                let p = plan_decorations(
                    &blocks,
                    &Selection::caret(caret),
                    &PlanOptions::default(),
                );
                assert!(p.is_covering(doc_len(&blocks)), "text {text:?} caret {caret}");
            }
        }
    }

    #[test]
    fn quote_run_groups_into_one_widget() {
        let p = plan("> a\n> b\ntail", 10);
        assert_eq!(p.entries[0].range, 0..7);
        assert_eq!(p.entries[0].widget, Some(WidgetKind::Blockquote));
        assert_eq!(p.entries[0].payload.as_deref(), Some("> a\n> b"));
    }

    #[test]
    fn rule_is_replaced() {
        let p = plan("---\nx", 5);
        assert_eq!(p.entries[0].widget, Some(WidgetKind::Rule));
        assert_eq!(p.entries[0].range, 0..3);
    }
}
