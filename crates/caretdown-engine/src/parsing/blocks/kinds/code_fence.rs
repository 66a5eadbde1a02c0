/// Fenced code block delimiters.
pub struct CodeFence;

/// Fence opener facts extracted from a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig<'a> {
    /// Language tag after the ticks, if non-empty.
    pub lang: Option<&'a str>,
}

impl CodeFence {
    pub const TICK: char = '`';
    pub const MIN_TICKS: usize = 3;

    /// Detects a fence opener: three or more backticks at the start of the
    /// line, optionally followed by a language tag.
    pub fn sig(line: &str) -> Option<FenceSig<'_>> {
        let ticks = line.chars().take_while(|&c| c == Self::TICK).count();
        if ticks < Self::MIN_TICKS {
            return None;
        }
        let rest = line[ticks..].trim();
        Some(FenceSig {
            lang: (!rest.is_empty()).then_some(rest),
        })
    }

    /// A closing fence line: three or more backticks and nothing else.
    pub fn closes(line: &str) -> bool {
        let t = line.trim_end();
        let ticks = t.chars().take_while(|&c| c == Self::TICK).count();
        ticks >= Self::MIN_TICKS && ticks == t.len()
    }
}
