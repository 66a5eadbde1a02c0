use super::kinds::{
    BlockQuote, CodeFence, FenceSig, Heading, OrderedMarker, TaskMarker, ThematicBreak,
    UnorderedMarker,
};

/// Classification of a single line: local facts only, no document context.
///
/// The fence signature is carried separately from the shape because fence
/// opening needs lookahead (a matching closer line); when none exists the
/// parser falls back to `shape`.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    pub raw: &'a str,
    pub fence: Option<FenceSig<'a>>,
    pub shape: LineShape<'a>,
}

/// The non-fence classification of a line, tried in fixed priority order:
/// heading, thematic break, task item, ordered item, bullet item,
/// blockquote, then paragraph. Blank lines get their own shape so the block
/// parser can emit placeholder paragraphs with exact line accounting.
#[derive(Debug, Clone)]
pub enum LineShape<'a> {
    Blank,
    Heading { level: u8, marker: &'a str, rest: &'a str },
    ThematicBreak,
    TaskItem { prefix: &'a str, checked: bool, rest: &'a str },
    OrderedItem { prefix: &'a str, number: u64, rest: &'a str },
    BulletItem { prefix: &'a str, marker: char, rest: &'a str },
    BlockQuote { prefix: &'a str, rest: &'a str },
    Paragraph,
}

/// Classifies one line (without its trailing newline).
pub fn classify(line: &str) -> LineClass<'_> {
    LineClass {
        raw: line,
        fence: CodeFence::sig(line),
        shape: classify_shape(line),
    }
}

fn classify_shape(line: &str) -> LineShape<'_> {
    if line.trim().is_empty() {
        return LineShape::Blank;
    }
    if let Some((level, marker, rest)) = Heading::parse(line) {
        return LineShape::Heading { level, marker, rest };
    }
    if ThematicBreak::matches(line) {
        return LineShape::ThematicBreak;
    }
    if let Some((parts, checked)) = TaskMarker::parse(line) {
        return LineShape::TaskItem {
            prefix: parts.prefix,
            checked,
            rest: parts.rest,
        };
    }
    if let Some((parts, number)) = OrderedMarker::parse(line) {
        return LineShape::OrderedItem {
            prefix: parts.prefix,
            number,
            rest: parts.rest,
        };
    }
    if let Some((parts, marker)) = UnorderedMarker::parse(line) {
        return LineShape::BulletItem {
            prefix: parts.prefix,
            marker,
            rest: parts.rest,
        };
    }
    if let Some((prefix, rest)) = BlockQuote::parse(line) {
        return LineShape::BlockQuote { prefix, rest };
    }
    LineShape::Paragraph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_task_beats_bullet() {
        assert!(matches!(
            classify("- [ ] todo").shape,
            LineShape::TaskItem { checked: false, .. }
        ));
        assert!(matches!(
            classify("- plain").shape,
            LineShape::BulletItem { marker: '-', .. }
        ));
    }

    #[test]
    fn priority_rule_beats_bullet() {
        assert!(matches!(classify("---").shape, LineShape::ThematicBreak));
        // A dash with a space is a bullet, not a rule.
        assert!(matches!(classify("- -").shape, LineShape::BulletItem { .. }));
    }

    #[test]
    fn fence_sig_is_carried_alongside_shape() {
        let lc = classify("```rust");
        assert!(lc.fence.is_some());
        // The fallback shape for a fence opener line is a plain paragraph.
        assert!(matches!(lc.shape, LineShape::Paragraph));
    }

    #[test]
    fn blank_line() {
        assert!(matches!(classify("").shape, LineShape::Blank));
        assert!(matches!(classify("   ").shape, LineShape::Blank));
    }

    #[test]
    fn quote_and_heading() {
        assert!(matches!(classify("> q").shape, LineShape::BlockQuote { .. }));
        assert!(matches!(
            classify("### h").shape,
            LineShape::Heading { level: 3, .. }
        ));
    }
}
