/*!
 * Vocabulary detail caching.
 *
 * One `CachedVocabEntry` per lemma/POS key, filled field by field on demand
 * and kept for the lifetime of the process.
 */

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use log::{debug, warn};
use parking_lot::{Mutex, RwLock};
use serde_json::{Map, Value};

use crate::errors::UpstreamError;

use super::fill::FieldFiller;
use super::models::{CachedVocabEntry, CefrLevel, DetailField, VocabDetail, VocabDetailKey, VocabOptions};

/// Snapshot of cache counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered without a fill, including ones that waited on a concurrent fill
    pub hits: usize,
    /// Lookups that made a fill call
    pub misses: usize,
    /// Successful fill calls
    pub fills: usize,
    /// Number of cached entries
    pub entries: usize,
}

/// Cache of generated vocabulary details
#[derive(Debug)]
pub struct VocabDetailCache {
    /// Entries by key
    entries: RwLock<HashMap<VocabDetailKey, CachedVocabEntry>>,

    /// Per-key fill locks, used when single-flight is on
    fill_locks: Mutex<HashMap<VocabDetailKey, Arc<tokio::sync::Mutex<()>>>>,

    /// Generator for missing fields
    filler: Arc<dyn FieldFiller>,

    /// Serialize fills for the same key
    single_flight: bool,

    hits: AtomicUsize,
    misses: AtomicUsize,
    fills: AtomicUsize,
}

impl VocabDetailCache {
    /// Create a new cache with single-flight fills
    pub fn new(filler: Arc<dyn FieldFiller>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            fill_locks: Mutex::new(HashMap::new()),
            filler,
            single_flight: true,
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
            fills: AtomicUsize::new(0),
        }
    }

    /// Enable or disable per-key fill serialization
    pub fn with_single_flight(mut self, enabled: bool) -> Self {
        self.single_flight = enabled;
        self
    }

    /// Return the requested detail fields of `lemma`/`pos`
    ///
    /// Makes at most one fill call, and only when a requested field is
    /// still unpopulated. A failed fill leaves the entry untouched.
    pub async fn get_detail(
        &self,
        lemma: &str,
        pos: &str,
        options: &VocabOptions,
    ) -> Result<VocabDetail, UpstreamError> {
        let key = VocabDetailKey::new(lemma, pos);

        let entry = self.lookup(&key, lemma, pos);
        if !entry.needs_fill(options) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("Vocab cache hit for {}", key);
            return Ok(entry.project(lemma, pos, options));
        }

        if !self.single_flight {
            return self.fill(&key, lemma, pos, options).await;
        }

        let lock = self.fill_lock(&key);
        let guard = lock.clone().lock_owned().await;

        let entry = self.lookup(&key, lemma, pos);
        let result = if entry.needs_fill(options) {
            self.fill(&key, lemma, pos, options).await
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("Vocab fill for {} completed while waiting", key);
            Ok(entry.project(lemma, pos, options))
        };

        drop(guard);
        self.release_fill_lock(&key, &lock);
        result
    }

    /// One fill call for the requested fields, merged into the entry
    async fn fill(
        &self,
        key: &VocabDetailKey,
        lemma: &str,
        pos: &str,
        options: &VocabOptions,
    ) -> Result<VocabDetail, UpstreamError> {
        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!("Vocab cache miss for {}", key);

        let fields = self.filler.fill_fields(lemma, pos, &options.requested()).await?;
        self.fills.fetch_add(1, Ordering::Relaxed);

        let merged = self.merge(key, &fields);
        Ok(merged.project(lemma, pos, options))
    }

    /// Copy of the entry for `key`, creating an empty one on first use
    fn lookup(&self, key: &VocabDetailKey, lemma: &str, pos: &str) -> CachedVocabEntry {
        if let Some(entry) = self.entries.read().get(key) {
            return entry.clone();
        }
        self.entries
            .write()
            .entry(key.clone())
            .or_insert_with(|| CachedVocabEntry::new(lemma, pos))
            .clone()
    }

    fn fill_lock(&self, key: &VocabDetailKey) -> Arc<tokio::sync::Mutex<()>> {
        self.fill_locks
            .lock()
            .entry(key.clone())
            .or_default()
            .clone()
    }

    /// Drop the lock for `key` once no other request holds or waits on it
    fn release_fill_lock(&self, key: &VocabDetailKey, lock: &Arc<tokio::sync::Mutex<()>>) {
        let mut locks = self.fill_locks.lock();
        // one reference in the table, one in `lock`
        let idle = locks
            .get(key)
            .is_some_and(|current| Arc::ptr_eq(current, lock) && Arc::strong_count(lock) == 2);
        if idle {
            locks.remove(key);
        }
    }

    /// Keys with a fill in progress or waiting
    pub fn pending_fills(&self) -> usize {
        self.fill_locks.lock().len()
    }

    /// Merge recognized, non-empty string fields into the entry for `key`
    fn merge(&self, key: &VocabDetailKey, fields: &Map<String, Value>) -> CachedVocabEntry {
        let mut entries = self.entries.write();
        let entry = entries
            .entry(key.clone())
            .or_insert_with(CachedVocabEntry::default);

        for (name, value) in fields {
            let Some(field) = DetailField::from_name(name) else {
                debug!("Ignoring unknown vocab field '{}' for {}", name, key);
                continue;
            };
            let Value::String(text) = value else {
                debug!("Ignoring non-string value for '{}' on {}", name, key);
                continue;
            };

            if field == DetailField::Level && !text.trim().is_empty() {
                match text.parse::<CefrLevel>() {
                    Ok(level) => {
                        entry.fill(field, level.as_str());
                    }
                    Err(e) => warn!("Discarding level for {}: {}", key, e),
                }
                continue;
            }

            entry.fill(field, text);
        }

        entry.clone()
    }

    /// Cached copy of `lemma`/`pos`, if any lookup created it
    pub fn peek(&self, lemma: &str, pos: &str) -> Option<CachedVocabEntry> {
        self.entries.read().get(&VocabDetailKey::new(lemma, pos)).cloned()
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current counters
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            fills: self.fills.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}
