use std::ops::Range;

/// What changed when a command was applied. Hosts use this to re-render
/// only the affected spans and to move their caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Byte ranges in the *new* text whose blocks were rebuilt. Unchanged
    /// blocks keep their identity and need no re-render.
    pub changed: Vec<Range<usize>>,
    /// The selection after the edit, mapped through the replace.
    pub new_selection: Range<usize>,
    /// Document version after the edit. Monotonic; one step per command.
    pub version: u64,
}
