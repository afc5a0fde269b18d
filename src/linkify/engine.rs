//! Linkifier - scan, suppress, merge, emit.
//!
//! Single linkify() call turns a JSON blob into a renderer-ready segment
//! stream:
//! 1. Scan once per enabled pattern class (PatternBank)
//! 2. Drop URL matches that start inside an image/download span, so a
//!    URL-shaped substring of a quoted path is never double-linked
//! 3. Stable-sort the survivors by start offset
//! 4. Walk left to right emitting Text gaps and Link segments
//!
//! The concatenated visible content of the emitted segments reproduces
//! the input byte for byte. Repeat inputs are served from a content-hash
//! cache without touching the patterns again.
//!
//! Designed for WASM with a single cross-boundary call per scan.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::linkify::cache::{CachedScan, ScanCache};
use crate::linkify::patterns::{PatternBank, PatternMatch};
use crate::linkify::segment::{LinkKind, Segment};

// =============================================================================
// Configuration
// =============================================================================

/// Capability set: which pattern classes a scan applies.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LinkifyConfig {
    #[serde(default = "default_true")]
    pub enable_images: bool,
    #[serde(default = "default_true")]
    pub enable_downloads: bool,
    #[serde(default = "default_true")]
    pub enable_emails: bool,
    #[serde(default = "default_true")]
    pub enable_phones: bool,
    #[serde(default = "default_true")]
    pub enable_urls: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LinkifyConfig {
    fn default() -> Self {
        Self::full()
    }
}

impl LinkifyConfig {
    /// Every class enabled. The contact-page terminal scans with this.
    pub fn full() -> Self {
        Self {
            enable_images: true,
            enable_downloads: true,
            enable_emails: true,
            enable_phones: true,
            enable_urls: true,
        }
    }

    /// Paths and URLs only. The plain log terminal scans with this: it
    /// renders API traffic where emails and phones stay inert text.
    pub fn basic() -> Self {
        Self {
            enable_emails: false,
            enable_phones: false,
            ..Self::full()
        }
    }

    fn enabled(&self, kind: LinkKind) -> bool {
        match kind {
            LinkKind::Image => self.enable_images,
            LinkKind::Download => self.enable_downloads,
            LinkKind::Email => self.enable_emails,
            LinkKind::Phone => self.enable_phones,
            LinkKind::Url => self.enable_urls,
        }
    }
}

// =============================================================================
// Results
// =============================================================================

/// Per-scan statistics
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LinkifyStats {
    pub total_us: u64,
    /// Content hash as hex string (u64 would overflow JS Number.MAX_SAFE_INTEGER)
    pub content_hash: String,
    pub was_cached: bool,
    pub text_length: usize,
    pub images: usize,
    pub downloads: usize,
    pub emails: usize,
    pub phones: usize,
    pub urls: usize,
    /// URL matches dropped by containment suppression
    pub suppressed_urls: usize,
}

impl LinkifyStats {
    fn tally(text: &str, segments: &[Segment], suppressed_urls: usize) -> Self {
        let mut stats = LinkifyStats {
            text_length: text.len(),
            suppressed_urls,
            ..Default::default()
        };
        for segment in segments {
            if let Segment::Link { kind, .. } = segment {
                match kind {
                    LinkKind::Image => stats.images += 1,
                    LinkKind::Download => stats.downloads += 1,
                    LinkKind::Email => stats.emails += 1,
                    LinkKind::Phone => stats.phones += 1,
                    LinkKind::Url => stats.urls += 1,
                }
            }
        }
        stats
    }
}

/// Scan output: the segment stream plus bookkeeping
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LinkifyResult {
    pub segments: Vec<Segment>,
    pub stats: LinkifyStats,
}

// =============================================================================
// Linkifier
// =============================================================================

/// Linkification engine with a per-instance capability set and scan cache.
///
/// # Usage (JavaScript)
/// ```javascript
/// import init, { Linkifier } from 'loglink';
///
/// await init();
/// const linkifier = new Linkifier(null); // null = full capability set
/// const { segments, stats } = linkifier.linkify(jsonString);
/// ```
#[wasm_bindgen]
pub struct Linkifier {
    bank: PatternBank,
    config: LinkifyConfig,
    cache: ScanCache,
}

impl Default for Linkifier {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Linkifier {
    /// Create a linkifier with an optional configuration object.
    ///
    /// # Arguments
    /// * `config` - Optional JSON object with `enable_*` class flags
    #[wasm_bindgen(constructor)]
    pub fn js_new(config: JsValue) -> Result<Linkifier, JsValue> {
        let config: LinkifyConfig = if config.is_null() || config.is_undefined() {
            LinkifyConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?
        };

        Ok(Self::with_config(config))
    }

    /// Linkify a blob and return `{ segments, stats }` (JS binding)
    #[wasm_bindgen(js_name = linkify)]
    pub fn js_linkify(&mut self, text: &str) -> JsValue {
        let result = self.linkify(text);
        match serde_wasm_bindgen::to_value(&result) {
            Ok(v) => v,
            Err(e) => {
                web_sys::console::error_1(
                    &format!("[Linkifier] Serialization failed: {:?}", e).into(),
                );
                JsValue::NULL
            }
        }
    }

    /// Percentage of scans served from the cache
    #[wasm_bindgen(js_name = cacheHitRate)]
    pub fn cache_hit_rate(&self) -> f64 {
        self.cache.hit_rate()
    }

    /// Number of distinct inputs currently cached
    #[wasm_bindgen(js_name = cacheLen)]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Drop cached scans and counters
    #[wasm_bindgen(js_name = reset)]
    pub fn js_reset(&mut self) {
        self.cache.reset();
    }
}

impl Linkifier {
    pub fn new() -> Self {
        Self::with_config(LinkifyConfig::default())
    }

    pub fn with_config(config: LinkifyConfig) -> Self {
        Self {
            bank: PatternBank::new(),
            config,
            cache: ScanCache::default(),
        }
    }

    pub fn config(&self) -> &LinkifyConfig {
        &self.config
    }

    /// Linkify through the scan cache: a repeat input replays the previous
    /// segment list instead of re-running the patterns.
    pub fn linkify(&mut self, text: &str) -> LinkifyResult {
        let scan_start = instant::Instant::now();
        let key = ScanCache::key_for(text);

        if let Some(cached) = self.cache.get(key) {
            let mut stats = LinkifyStats::tally(text, &cached.segments, cached.suppressed_urls);
            stats.content_hash = format!("{:x}", key);
            stats.was_cached = true;
            stats.total_us = scan_start.elapsed().as_micros() as u64;
            return LinkifyResult {
                segments: cached.segments,
                stats,
            };
        }

        let (segments, suppressed_urls) = self.scan(text);
        self.cache.insert(
            key,
            CachedScan {
                segments: segments.clone(),
                suppressed_urls,
            },
        );

        let mut stats = LinkifyStats::tally(text, &segments, suppressed_urls);
        stats.content_hash = format!("{:x}", key);
        stats.total_us = scan_start.elapsed().as_micros() as u64;

        LinkifyResult { segments, stats }
    }

    /// Pure scan path: no cache, no stats. Usable behind a shared reference.
    pub fn segments(&self, text: &str) -> Vec<Segment> {
        self.scan(text).0
    }

    fn scan(&self, text: &str) -> (Vec<Segment>, usize) {
        let (matches, suppressed) = self.collect_matches(text);
        (emit(text, &matches), suppressed)
    }

    /// Per-class collection, URL containment suppression, stable merge.
    fn collect_matches(&self, text: &str) -> (Vec<PatternMatch>, usize) {
        let scan_class = |kind: LinkKind| -> Vec<PatternMatch> {
            if self.config.enabled(kind) {
                self.bank.scan(kind, text)
            } else {
                Vec::new()
            }
        };

        let images = scan_class(LinkKind::Image);
        let downloads = scan_class(LinkKind::Download);
        let emails = scan_class(LinkKind::Email);
        let phones = scan_class(LinkKind::Phone);

        // A URL is suppressed when its START offset falls inside an image or
        // download span. Start containment only: the path match owns the
        // whole quoted region, so that check is sufficient.
        let mut suppressed = 0usize;
        let urls: Vec<PatternMatch> = scan_class(LinkKind::Url)
            .into_iter()
            .filter(|url| {
                let contained = images
                    .iter()
                    .chain(downloads.iter())
                    .any(|m| m.covers(url.start));
                if contained {
                    suppressed += 1;
                }
                !contained
            })
            .collect();

        // Class order here is the tie-break; the sort is stable.
        let mut merged = images;
        merged.extend(downloads);
        merged.extend(emails);
        merged.extend(phones);
        merged.extend(urls);
        merged.sort_by_key(|m| m.start);

        (merged, suppressed)
    }
}

/// Cursor walk over the merged matches. Gaps become Text, matches become
/// Links, and any tail after the last match becomes a final Text. An input
/// with no matches comes back as a single Text segment covering all of it.
fn emit(text: &str, matches: &[PatternMatch]) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(matches.len() * 2 + 1);
    let mut cursor = 0usize;

    for m in matches {
        if m.start > cursor {
            segments.push(Segment::text(&text[cursor..m.start]));
        }
        segments.push(Segment::link(m.kind, &text[m.start..m.end], &m.capture));
        cursor = m.end;
    }

    if cursor < text.len() {
        segments.push(Segment::text(&text[cursor..]));
    }

    if segments.is_empty() {
        segments.push(Segment::text(text));
    }

    segments
}

/// One-shot convenience with the full capability set. Compiles a fresh
/// pattern bank per call; hold a [`Linkifier`] for repeated use.
pub fn linkify(text: &str) -> Vec<Segment> {
    Linkifier::new().segments(text)
}

// =============================================================================
// Tests (TDD - written first!)
// =============================================================================
