/// Blockquote prefix `> `.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: &'static str = "> ";

    /// Splits a blockquote line into `(prefix, rest)`.
    pub fn parse(line: &str) -> Option<(&str, &str)> {
        line.starts_with(Self::PREFIX)
            .then(|| (&line[..Self::PREFIX.len()], &line[Self::PREFIX.len()..]))
    }
}
