//! PatternBank - the five link-detection patterns.
//!
//! Detects, inside a pretty-printed JSON blob:
//! - Image paths:    quoted site-relative path ending in jpg/jpeg/png/gif/webp/svg
//! - Download paths: quoted site-relative path ending in apk/zip/pdf/exe/dmg/deb/rpm
//! - Emails:         quoted local@domain.tld
//! - Phones:         quoted digit groups with optional +, spaces, dashes, parens
//! - URLs:           bare http(s)://... running to whitespace or `"',}]`
//!
//! Path extensions match case-insensitively; everything else is literal.
//! Each pattern compiles once per bank and scans leftmost, non-overlapping
//! within its own class. Overlap between classes is resolved by the engine,
//! not here.

use regex::Regex;

use crate::linkify::segment::LinkKind;

// =============================================================================
// PatternMatch
// =============================================================================

/// A single raw pattern hit.
///
/// `start`/`end` are byte offsets of the full match in the scanned text
/// (quotes included for the quoted classes); `capture` is the inner group
/// the target gets built from.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternMatch {
    pub kind: LinkKind,
    pub start: usize,
    pub end: usize,
    pub capture: String,
}

impl PatternMatch {
    /// True if `offset` falls inside this match's span.
    pub fn covers(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }
}

// =============================================================================
// PatternBank
// =============================================================================

/// Compiled detection patterns, one per [`LinkKind`].
pub struct PatternBank {
    image_re: Regex,
    download_re: Regex,
    email_re: Regex,
    phone_re: Regex,
    url_re: Regex,
}

impl Default for PatternBank {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternBank {
    pub fn new() -> Self {
        // Quoted absolute path ending in an image extension.
        // Group 1: the path without its quotes.
        let image_re = Regex::new(r#"(?i)"(/[^"]*\.(jpg|jpeg|png|gif|webp|svg))""#)
            .expect("image pattern should compile");

        // Quoted absolute path ending in a download extension. Same shape as
        // the image pattern, different extension alternation.
        let download_re = Regex::new(r#"(?i)"(/[^"]*\.(apk|zip|pdf|exe|dmg|deb|rpm))""#)
            .expect("download pattern should compile");

        // Quoted email: local part, @, domain with a 2+ letter TLD.
        let email_re = Regex::new(r#""([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})""#)
            .expect("email pattern should compile");

        // Quoted phone: optional +, up to three short digit groups separated
        // by an optional space/dash/parens, then a closing run of 4+ digits.
        let phone_re =
            Regex::new(r#""(\+?\d{1,4}[\s-]?\(?\d{1,4}\)?[\s-]?\d{1,4}[\s-]?\d{4,})""#)
                .expect("phone pattern should compile");

        // Bare URL: scheme then everything up to whitespace, quote, comma,
        // apostrophe, closing brace or bracket. Quotes stop the match so a
        // URL inside a JSON string value never swallows its delimiter.
        let url_re =
            Regex::new(r#"(https?://[^\s"',}\]]+)"#).expect("url pattern should compile");

        Self {
            image_re,
            download_re,
            email_re,
            phone_re,
            url_re,
        }
    }

    /// Scan `text` with the pattern for `kind`. Matches come back in
    /// position order and never overlap each other.
    pub fn scan(&self, kind: LinkKind, text: &str) -> Vec<PatternMatch> {
        let re = match kind {
            LinkKind::Image => &self.image_re,
            LinkKind::Download => &self.download_re,
            LinkKind::Email => &self.email_re,
            LinkKind::Phone => &self.phone_re,
            LinkKind::Url => &self.url_re,
        };

        re.captures_iter(text)
            .filter_map(|cap| {
                let full = cap.get(0)?;
                let capture = cap.get(1)?.as_str().to_string();
                Some(PatternMatch {
                    kind,
                    start: full.start(),
                    end: full.end(),
                    capture,
                })
            })
            .collect()
    }
}

// =============================================================================
// Tests (TDD - written first!)
// =============================================================================
