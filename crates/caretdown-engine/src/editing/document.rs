use std::collections::HashSet;
use std::ops::Range;
use std::rc::Rc;

use xi_rope::Rope;

use crate::editing::caret::Selection;
use crate::editing::commands::{self, Cmd};
use crate::editing::patch::Patch;
use crate::editing::reconcile::{reconcile_with_stats, EditSpan, ReconcileStats};
use crate::parsing::{parse_document, Block, BlockNode};
use crate::render::{plan_decorations, DecorationPlan, PlanOptions};

/// The editing model: one rope buffer as the source of truth, a reconciled
/// block tree derived from it, and a selection in byte offsets.
///
/// ## Core edit loop
///
/// 1. A [`Cmd`] compiles to a single replace range against the buffer.
/// 2. The replace is applied to the rope through an invertible delta.
/// 3. The block tree is reconciled against the new text; untouched blocks
///    keep their `Rc` identity so hosts can skip re-rendering them.
/// 4. The selection is mapped through the replace and the version bumps.
///
/// `text()` always returns the exact buffer contents; nothing the parser
/// derives is ever written back, so round-trip fidelity is unconditional.
pub struct Document {
    buffer: Rope,
    blocks: Vec<Block>,
    selection: Selection,
    version: u64,
    last_stats: ReconcileStats,
}

impl Document {
    /// Creates a document from raw bytes. Fails on invalid UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::from_text(text))
    }

    pub fn from_text(text: &str) -> Self {
        let buffer = Rope::from(text);
        let blocks = parse_document(text);
        let len = buffer.len();
        Self {
            buffer,
            blocks,
            selection: Selection::caret(len),
            version: 0,
            last_stats: ReconcileStats::default(),
        }
    }

    /// The exact buffer contents.
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// The exact buffer contents as bytes, for saving.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.buffer.to_string().into_bytes()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Moves the selection. Offsets are clamped to the buffer length.
    pub fn set_selection(&mut self, sel: Selection) {
        let r = sel.clamped(self.buffer.len());
        self.selection = Selection {
            anchor: r.start,
            focus: r.end,
        };
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Reuse counters from the most recent [`apply`](Self::apply).
    pub fn last_reconcile_stats(&self) -> ReconcileStats {
        self.last_stats
    }

    /// Applies a command: compile to a replace, apply the delta to the
    /// buffer, reconcile the block tree and map the selection through.
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        let (range, text) = commands::compile(self.buffer.len(), &cmd);
        let edit = EditSpan::replace(range.start, range.end - range.start, text.len());

        let mut builder = xi_rope::delta::Builder::new(self.buffer.len());
        builder.replace(range.clone(), Rope::from(text.as_str()));
        let delta = builder.build();
        self.buffer = delta.apply(&self.buffer);

        let new_text = self.buffer.to_string();
        let prev = std::mem::take(&mut self.blocks);
        let (blocks, stats) = reconcile_with_stats(&prev, &new_text, &edit);
        self.blocks = blocks;
        self.last_stats = stats;

        self.selection =
            commands::transform_selection(&self.selection, &range, text.len());
        self.version += 1;

        Patch {
            changed: changed_ranges(&prev, &self.blocks),
            new_selection: self.selection.normalized(),
            version: self.version,
        }
    }

    /// Computes the decoration plan for the current tree and selection.
    pub fn plan(&self, opts: &PlanOptions) -> DecorationPlan {
        plan_decorations(&self.blocks, &self.selection, opts)
    }
}

/// Byte ranges (in the new text) covered by blocks that were rebuilt rather
/// than aliased. Adjacent rebuilt blocks merge into one range.
fn changed_ranges(prev: &[Block], next: &[Block]) -> Vec<Range<usize>> {
    let kept: HashSet<*const BlockNode> = prev.iter().map(Rc::as_ptr).collect();
    let mut out: Vec<Range<usize>> = Vec::new();
    let mut off = 0;
    for b in next {
        let end = off + b.len();
        if !kept.contains(&Rc::as_ptr(b)) {
            match out.last_mut() {
                Some(last) if last.end + 1 == off => last.end = end,
                _ => out.push(off..end),
            }
        }
        off = end + 1;
    }
    out
}
