use std::ops::Range;

use super::caret::Selection;

/// An editing intent against the document text.
///
/// Commands are compiled into a single replace range before being applied;
/// all offsets are byte offsets into the current text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    InsertText { at: usize, text: String },
    DeleteRange { range: Range<usize> },
    ReplaceRange { range: Range<usize>, text: String },
}

/// Compiles a command into a `(range, replacement)` pair, clamped into
/// `[0, len]`. Inverted ranges collapse to their start.
pub fn compile(len: usize, cmd: &Cmd) -> (Range<usize>, String) {
    match cmd {
        Cmd::InsertText { at, text } => {
            let at = (*at).min(len);
            (at..at, text.clone())
        }
        Cmd::DeleteRange { range } => (clamp_range(len, range), String::new()),
        Cmd::ReplaceRange { range, text } => (clamp_range(len, range), text.clone()),
    }
}

fn clamp_range(len: usize, range: &Range<usize>) -> Range<usize> {
    let start = range.start.min(len);
    let end = range.end.min(len).max(start);
    start..end
}

/// Maps a selection across a replace of `range` with `new_len` bytes.
///
/// Each endpoint moves independently: positions before the range stay put,
/// positions at or after its end shift by the length delta, and positions
/// inside the replaced range collapse to the end of the inserted text. A
/// caret sitting exactly on an insertion point ends up after the inserted
/// text, so successive typing stays in order.
pub fn transform_selection(sel: &Selection, range: &Range<usize>, new_len: usize) -> Selection {
    Selection {
        anchor: transform_offset(sel.anchor, range, new_len),
        focus: transform_offset(sel.focus, range, new_len),
    }
}

fn transform_offset(p: usize, range: &Range<usize>, new_len: usize) -> usize {
    if p >= range.end {
        p - (range.end - range.start) + new_len
    } else if p <= range.start {
        p
    } else {
        range.start + new_len
    }
}
