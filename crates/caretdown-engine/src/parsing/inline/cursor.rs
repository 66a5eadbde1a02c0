/// A byte cursor for left-to-right inline scanning.
#[derive(Clone)]
pub struct Cursor<'a> {
    s: &'a str,
    i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Current byte position within the input.
    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    /// The byte immediately before the current position, if any.
    pub fn prev_byte(&self) -> Option<u8> {
        if self.i == 0 {
            None
        } else {
            Some(self.s.as_bytes()[self.i - 1])
        }
    }

    /// Advances past the current character, keeping the position on a
    /// UTF-8 boundary.
    pub fn bump(&mut self) {
        match self.rest().chars().next() {
            Some(c) => self.i += c.len_utf8(),
            None => self.i = self.s.len(),
        }
    }

    /// Advances by `n` bytes. `n` must land on a character boundary; node
    /// parsers only ever return whole-construct byte counts.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}
