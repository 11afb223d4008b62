use crate::ast::{parse, ExprNode, ExprTree};
use crate::error::Result;
use log::debug;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Keeps the most recently parsed trees keyed by their source text.
///
/// Every hit hands out a fresh tree with an empty context, so callers never
/// share nodes or context with each other.
pub struct ParseCache {
    entries: LruCache<String, ExprNode>,
}

impl ParseCache {
    /// Creates a cache holding at most `capacity` trees; zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    pub fn parse(&mut self, source: &str) -> Result<ExprTree> {
        if let Some(root) = self.entries.get(source) {
            debug!("Parse cache hit: {}", source);
            return Ok(ExprTree::new(root.clone()));
        }

        let tree = parse(source)?;
        self.entries.put(source.to_string(), tree.root().clone());
        Ok(tree)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
