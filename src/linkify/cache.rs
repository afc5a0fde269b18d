//! ScanCache - content-addressed memo of recent scans.
//!
//! A terminal view re-renders the same log entries on every UI state
//! change. Hashing each input and replaying the previously emitted
//! segments skips the whole regex pass for blobs already seen. Eviction
//! is FIFO over a bounded set of distinct inputs; hit/miss counters
//! feed the scan stats.

use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, VecDeque};
use std::hash::{Hash, Hasher};

use crate::linkify::segment::Segment;

/// Distinct inputs remembered by default.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

// =============================================================================
// CachedScan
// =============================================================================

/// Payload remembered per input: the emitted segments plus the URL
/// suppression count, which cannot be reconstructed from the segments.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedScan {
    pub segments: Vec<Segment>,
    pub suppressed_urls: usize,
}

// =============================================================================
// ScanCache
// =============================================================================

#[derive(Debug)]
pub struct ScanCache {
    entries: HashMap<u64, CachedScan>,
    /// Insertion order of keys, oldest first.
    order: VecDeque<u64>,
    capacity: usize,
    hit_count: u64,
    miss_count: u64,
}

impl Default for ScanCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl ScanCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
            hit_count: 0,
            miss_count: 0,
        }
    }

    /// Content hash used as the cache key for `text`.
    pub fn key_for(text: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        hasher.finish()
    }

    /// Look up a previous scan. Every call counts as a hit or a miss.
    pub fn get(&mut self, key: u64) -> Option<CachedScan> {
        match self.entries.get(&key) {
            Some(cached) => {
                self.hit_count += 1;
                Some(cached.clone())
            }
            None => {
                self.miss_count += 1;
                None
            }
        }
    }

    /// Remember a scan, evicting the oldest entry when at capacity.
    /// Re-inserting a known key leaves the cache unchanged.
    pub fn insert(&mut self, key: u64, scan: CachedScan) {
        if self.entries.contains_key(&key) {
            return;
        }
        if self.order.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
        self.order.push_back(key);
        self.entries.insert(key, scan);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn hit_count(&self) -> u64 {
        self.hit_count
    }

    pub fn miss_count(&self) -> u64 {
        self.miss_count
    }

    /// Percentage of lookups served from the cache.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hit_count + self.miss_count;
        if total == 0 {
            return 0.0;
        }
        (self.hit_count as f64 / total as f64) * 100.0
    }

    /// Drop all entries and counters.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.hit_count = 0;
        self.miss_count = 0;
    }
}

// =============================================================================
// Tests (TDD - written first!)
// =============================================================================
