//! Memoized size resolution.

use std::sync::Arc;

use panel_core::{LayoutError, LayoutItem, SizeMap};

use crate::resolve::resolve_sizes;

/// Hit and miss counters for a [`SizeCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeCacheStats {
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug)]
struct CacheEntry {
    root: Arc<LayoutItem>,
    ignore_visibility: bool,
    sizes: SizeMap,
}

impl CacheEntry {
    fn matches(&self, root: &Arc<LayoutItem>, ignore_visibility: bool) -> bool {
        Arc::ptr_eq(&self.root, root) && self.ignore_visibility == ignore_visibility
    }
}

/// Keeps the sizes of the most recently resolved tree.
///
/// Trees are compared by identity: a tree edited through [`Arc::make_mut`]
/// while the cache holds it becomes a new allocation and is resolved again.
#[derive(Debug, Default)]
pub struct SizeCache {
    slot: Option<CacheEntry>,
    stats: SizeCacheStats,
}

impl SizeCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the sizes for `root`, resolving only if the tree or the visibility
    /// flag changed since the last call.
    ///
    /// A failed resolution keeps the previous entry.
    pub fn get_sizes(
        &mut self,
        root: &Arc<LayoutItem>,
        ignore_visibility: bool,
    ) -> Result<&SizeMap, LayoutError> {
        let entry = match self.slot.take() {
            Some(entry) if entry.matches(root, ignore_visibility) => {
                self.stats.hits += 1;
                tracing::debug!(root = %root.key, ignore_visibility, "size cache hit");
                entry
            }
            previous => {
                self.stats.misses += 1;
                tracing::debug!(root = %root.key, ignore_visibility, "size cache miss");
                match resolve_sizes(root, ignore_visibility) {
                    Ok(sizes) => CacheEntry {
                        root: Arc::clone(root),
                        ignore_visibility,
                        sizes,
                    },
                    Err(err) => {
                        self.slot = previous;
                        return Err(err);
                    }
                }
            }
        };
        Ok(&self.slot.insert(entry).sizes)
    }

    /// Drop the cached entry.
    pub fn clear(&mut self) {
        self.slot = None;
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    pub fn stats(&self) -> SizeCacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_core::Size;

    fn tree() -> Arc<LayoutItem> {
        Arc::new(
            LayoutItem::row("root")
                .with_size(100.0, 50.0)
                .with_children([LayoutItem::new("a").with_width(30.0), LayoutItem::new("b").hidden()]),
        )
    }

    #[test]
    fn test_same_tree_hits() {
        let root = tree();
        let mut cache = SizeCache::new();

        let first = cache.get_sizes(&root, false).unwrap().clone();
        let second = cache.get_sizes(&root, false).unwrap().clone();

        assert_eq!(first, second);
        assert_eq!(cache.stats(), SizeCacheStats { hits: 1, misses: 1 });
    }

    #[test]
    fn test_flag_change_recomputes() {
        let root = tree();
        let mut cache = SizeCache::new();

        assert_eq!(cache.get_sizes(&root, false).unwrap().get("b"), Some(Size::ZERO));
        assert_eq!(
            cache.get_sizes(&root, true).unwrap().get("b"),
            Some(Size::new(70.0, 50.0))
        );
        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn test_equal_but_distinct_tree_recomputes() {
        let mut cache = SizeCache::new();
        cache.get_sizes(&tree(), false).unwrap();
        cache.get_sizes(&tree(), false).unwrap();
        assert_eq!(cache.stats(), SizeCacheStats { hits: 0, misses: 2 });
    }

    #[test]
    fn test_make_mut_edit_recomputes() {
        let mut root = tree();
        let mut cache = SizeCache::new();
        cache.get_sizes(&root, false).unwrap();

        if let Some(children) = Arc::make_mut(&mut root).children.as_mut() {
            children[0] = LayoutItem::new("a").with_width(60.0);
        }

        let sizes = cache.get_sizes(&root, false).unwrap();
        assert_eq!(sizes.get("a"), Some(Size::new(60.0, 50.0)));
        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn test_error_keeps_previous_entry() {
        let root = tree();
        let invalid = Arc::new(LayoutItem::row("bad"));
        let mut cache = SizeCache::new();

        cache.get_sizes(&root, false).unwrap();
        assert!(cache.get_sizes(&invalid, false).is_err());
        assert!(!cache.is_empty());

        cache.get_sizes(&root, false).unwrap();
        assert_eq!(cache.stats(), SizeCacheStats { hits: 1, misses: 2 });
    }

    #[test]
    fn test_clear() {
        let root = tree();
        let mut cache = SizeCache::new();
        cache.get_sizes(&root, false).unwrap();
        cache.clear();
        assert!(cache.is_empty());
        cache.get_sizes(&root, false).unwrap();
        assert_eq!(cache.stats().misses, 2);
    }
}
