use std::ops::Range;

use serde::Serialize;

/// How the host surface should treat a byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode {
    /// Show the bytes as editable literal markdown.
    Raw,
    /// Hide the bytes and render the widget in their place.
    Replace,
}

/// What to render for a `Replace` entry. The core never renders anything
/// itself; widget kinds are hints the host maps to actual UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WidgetKind {
    CodeBlock,
    TaskList,
    Blockquote,
    Rule,
    Bullet,
    Number,
    HeadingMarker,
    /// A hidden inline delimiter (zero-width).
    InlineMarker,
    Link,
    Tag,
    FileEmbed,
    ImageEmbed,
}

/// One ordered, non-overlapping span of the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanEntry {
    pub range: Range<usize>,
    pub mode: Mode,
    pub widget: Option<WidgetKind>,
    /// Widget-specific data: the source text for composite widgets, the url
    /// for links, the delimiter kind for hidden inline markers.
    pub payload: Option<String>,
}

/// The rendering plan: ordered, non-overlapping entries covering the whole
/// document exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecorationPlan {
    pub entries: Vec<PlanEntry>,
}

impl DecorationPlan {
    /// True when the entries tile `[0, len)` exactly: sorted, gapless and
    /// non-overlapping.
    pub fn is_covering(&self, len: usize) -> bool {
        let mut at = 0;
        for e in &self.entries {
            if e.range.start != at || e.range.end < e.range.start {
                return false;
            }
            at = e.range.end;
        }
        at == len
    }

    /// The mode of the entry containing `offset`, if any.
    pub fn mode_at(&self, offset: usize) -> Option<Mode> {
        self.entries
            .iter()
            .find(|e| e.range.start <= offset && offset < e.range.end)
            .map(|e| e.mode)
    }
}

/// Planner configuration supplied by the embedding host.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanOptions {
    /// Always hide syntax, regardless of caret position. Short-circuits
    /// every focus check to "not focused".
    pub wysiwyg: bool,
}
