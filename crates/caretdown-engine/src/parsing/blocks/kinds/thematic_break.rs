/// Horizontal rule: three or more of the same marker character alone on a
/// line (`---`, `***`, `___`).
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [char; 3] = ['-', '*', '_'];
    pub const MIN_RUN: usize = 3;

    pub fn matches(line: &str) -> bool {
        let t = line.trim_end();
        let mut chars = t.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        if !Self::MARKERS.contains(&first) {
            return false;
        }
        t.len() >= Self::MIN_RUN && chars.all(|c| c == first)
    }
}
