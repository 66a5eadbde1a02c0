/// ATX heading `#{1,6} `.
pub struct Heading;

impl Heading {
    pub const HASH: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Parses a heading line into `(level, marker, rest)`, where `marker`
    /// includes the trailing space (`"## "`).
    pub fn parse(line: &str) -> Option<(u8, &str, &str)> {
        let hashes = line.chars().take_while(|&c| c == Self::HASH).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL as usize {
            return None;
        }
        if line.as_bytes().get(hashes) != Some(&b' ') {
            return None;
        }
        Some((hashes as u8, &line[..hashes + 1], &line[hashes + 1..]))
    }
}
