//! Segment model: the linkifier's output unit.
//!
//! A scan decomposes the input into `Text` runs and classified `Link`s:
//! - `Text` carries a verbatim slice of the input
//! - `Link` carries the matched slice plus a resolved target
//!
//! Concatenating the visible content of every segment, in order,
//! reconstructs the input byte for byte. The rendering layer decides how
//! each `LinkKind` becomes an anchor, image preview, or download action.

use serde::{Deserialize, Serialize};

// =============================================================================
// LinkKind
// =============================================================================

/// Category assigned to a detected pattern match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// Quoted site-relative path with an image extension
    Image,
    /// Quoted site-relative path with an archive/installer extension
    Download,
    /// Quoted email address
    Email,
    /// Quoted phone number
    Phone,
    /// Bare http(s) URL
    Url,
}

impl LinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::Image => "image",
            LinkKind::Download => "download",
            LinkKind::Email => "email",
            LinkKind::Phone => "phone",
            LinkKind::Url => "url",
        }
    }
}

// =============================================================================
// Segment
// =============================================================================

/// One unit of linkifier output.
///
/// Serializes with an internal `type` tag (`"text"` / `"link"`) so the
/// frontend can switch on it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment {
    Text {
        content: String,
    },
    Link {
        kind: LinkKind,
        /// Exact matched substring, quotes included for the quoted classes.
        display: String,
        /// Resolved action: a path, `mailto:`, a `wa.me` URL, or the URL itself.
        target: String,
        /// Download only: path component after the last `/`.
        #[serde(skip_serializing_if = "Option::is_none")]
        #[serde(default)]
        file_name: Option<String>,
        /// Download only: upper-cased extension.
        #[serde(skip_serializing_if = "Option::is_none")]
        #[serde(default)]
        extension: Option<String>,
    },
}

impl Segment {
    pub fn text(content: impl Into<String>) -> Self {
        Segment::Text {
            content: content.into(),
        }
    }

    /// Build a link segment from a raw match.
    ///
    /// `display` is the full matched text (what the renderer shows),
    /// `capture` the inner capture group (what the target is built from).
    pub fn link(kind: LinkKind, display: &str, capture: &str) -> Self {
        let (target, file_name, extension) = match kind {
            LinkKind::Image => (capture.to_string(), None, None),
            LinkKind::Download => {
                let name = file_name_of(capture);
                let ext = extension_of(name);
                (capture.to_string(), Some(name.to_string()), Some(ext))
            }
            LinkKind::Email => (format!("mailto:{}", capture), None, None),
            LinkKind::Phone => (
                format!("https://wa.me/{}", phone_digits(capture)),
                None,
                None,
            ),
            LinkKind::Url => (capture.to_string(), None, None),
        };

        Segment::Link {
            kind,
            display: display.to_string(),
            target,
            file_name,
            extension,
        }
    }

    /// The slice of the original input this segment stands for.
    pub fn visible_text(&self) -> &str {
        match self {
            Segment::Text { content } => content,
            Segment::Link { display, .. } => display,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Segment::Link { .. })
    }
}

// =============================================================================
// Target helpers
// =============================================================================

/// File name component of a download path (after the last `/`).
fn file_name_of(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => "file",
    }
}

/// Upper-cased extension of a file name (after the last `.`).
fn extension_of(name: &str) -> String {
    name.rsplit('.').next().unwrap_or("").to_uppercase()
}

/// Digit-only form of a phone capture, for `wa.me` targets.
///
/// Strips whitespace, parentheses, dashes and the leading `+`; every
/// remaining digit is kept in order.
fn phone_digits(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '(' | ')' | '-' | '+'))
        .collect()
}

// =============================================================================
// Tests (TDD - written first!)
// =============================================================================
