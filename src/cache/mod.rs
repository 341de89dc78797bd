//! Keyed page-instance cache with prefix-based invalidation.

mod key;

pub use key::CacheKey;

use crate::page::{PageHandle, SharedPage};
use log::{debug, trace};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Store of page instances keyed by [`CacheKey`].
///
/// Pages declare their own cacheability through their
/// [`PagePolicy`](crate::page::PagePolicy); the cache only ever stores
/// instances whose policy says so. Non-cacheable pages are constructed on
/// every lookup and never retained.
#[derive(Default)]
pub struct PageCache {
    entries: HashMap<CacheKey, SharedPage>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the page stored at `key`, constructing it on a miss.
    ///
    /// On a hit the stored instance is returned unchanged and `construct`
    /// is never called: cached pages keep their original construction
    /// state by design. On a miss the freshly constructed page is stored
    /// only when its policy is cacheable, and returned either way.
    pub fn get_or_create<F>(&mut self, key: &CacheKey, construct: F) -> SharedPage
    where
        F: FnOnce() -> PageHandle,
    {
        if let Some(page) = self.entries.get(key) {
            trace!("page cache hit for '{key}'");
            return Rc::clone(page);
        }

        let handle = construct();
        let cacheable = handle.policy().cacheable;
        let page: SharedPage = Rc::new(RefCell::new(handle));
        if cacheable {
            debug!("caching page under '{key}'");
            self.entries.insert(key.clone(), Rc::clone(&page));
        }
        page
    }

    /// Look up a stored page without constructing anything.
    pub fn get(&self, key: &CacheKey) -> Option<SharedPage> {
        self.entries.get(key).map(Rc::clone)
    }

    /// Evict cached pages for `key`, returning how many were removed.
    ///
    /// A flat key (no `/`) evicts the exact key plus every key under
    /// `key/`, treating the parameterless route and its parametrized
    /// subtree as one unit. A composite key evicts exactly itself.
    pub fn invalidate(&mut self, key: &CacheKey) -> usize {
        if key.is_composite() {
            let evicted = self.entries.remove(key).is_some() as usize;
            debug!("invalidated '{key}' exactly ({evicted} evicted)");
            return evicted;
        }

        let mut evicted = self.entries.remove(key).is_some() as usize;
        let prefix = format!("{}/", key.as_str());
        let doomed: Vec<CacheKey> = self
            .entries
            .keys()
            .filter(|k| k.as_str().starts_with(&prefix))
            .cloned()
            .collect();
        for k in doomed {
            self.entries.remove(&k);
            evicted += 1;
        }
        debug!("invalidated '{key}' and its subtree ({evicted} evicted)");
        evicted
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The keys currently stored, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &CacheKey> {
        self.entries.keys()
    }
}
