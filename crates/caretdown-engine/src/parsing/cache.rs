use crate::parsing::{parse_document, Block};

/// Memoizes the most recent parse, keyed by the exact source string.
///
/// The cache is owned by the embedding host and its lifecycle follows the
/// document's; it is deliberately not a module-level global. Cache hits
/// return handles aliasing the stored blocks, so hosts keep pointer
/// identity across repeated parses of identical text.
#[derive(Default)]
pub struct ParseCache {
    entry: Option<(String, Vec<Block>)>,
}

impl ParseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `text`, returning the cached block sequence when the source is
    /// byte-identical to the previous call.
    pub fn parse(&mut self, text: &str) -> Vec<Block> {
        if let Some((src, blocks)) = &self.entry {
            if src == text {
                return blocks.clone();
            }
        }
        let blocks = parse_document(text);
        self.entry = Some((text.to_string(), blocks.clone()));
        blocks
    }

    /// Drops the memoized entry.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[test]
    fn hit_returns_aliased_blocks() {
        let mut cache = ParseCache::new();
        let a = cache.parse("# one\ntwo");
        let b = cache.parse("# one\ntwo");
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert!(Rc::ptr_eq(x, y));
        }
    }

    #[test]
    fn miss_reparses() {
        let mut cache = ParseCache::new();
        let a = cache.parse("one");
        let b = cache.parse("two");
        assert!(!Rc::ptr_eq(&a[0], &b[0]));
    }

    #[test]
    fn invalidate_forces_reparse() {
        let mut cache = ParseCache::new();
        let a = cache.parse("one");
        cache.invalidate();
        let b = cache.parse("one");
        assert!(!Rc::ptr_eq(&a[0], &b[0]));
    }
}
