//! LogLink: JSON Log Linkification Engine
//!
//! A Rust/WASM implementation of the terminal log renderer's link pipeline.
//!
//! # Architecture
//!
//! ## Linkify Components
//! - `engine.rs` - Linkifier: **Unified entry point** - scan, suppress, merge, emit
//! - `patterns.rs` - PatternBank: the five detection patterns (image, download, email, phone, URL)
//! - `segment.rs` - Segment model: Text runs and classified Links with targets
//! - `cache.rs` - ScanCache: content-addressed memo of recent scans
//!
//! ## Log Components
//! - `entry.rs` - LogLevel / LogEntry wire model
//! - `format.rs` - LogFormatter: entry to renderer-ready data
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { Linkifier, LogFormatter } from 'loglink';
//!
//! await init();
//!
//! // Direct linkification of a JSON blob
//! const linkifier = new Linkifier(null);
//! const { segments, stats } = linkifier.linkify('{"avatar": "/img/me.png"}');
//! // segments: [{type: "text", ...}, {type: "link", kind: "image", ...}, ...]
//!
//! // Or format whole log entries
//! const formatter = new LogFormatter(null);
//! const line = formatter.format({
//!   timestamp: "15:04:05",
//!   level: "success",
//!   message: "GET /api/data/about 200",
//!   data: { email: "abim@rejaka.id" },
//! });
//! console.log(line.tag);      // "[SUCCESS]"
//! console.log(line.payload);  // linkified pretty-printed data
//! ```

pub mod linkify;
pub mod log;

// Public exports - Linkify
pub use linkify::*;

// Public exports - Log
pub use log::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("loglink v{}", env!("CARGO_PKG_VERSION"))
}
