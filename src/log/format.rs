//! LogFormatter - entry to renderer-ready data.
//!
//! For each entry: keep the message line verbatim, pretty-print the
//! payload with two-space indentation and run it through the linkifier.
//! UI chrome (colors, image previews, anchor tags) belongs to the
//! consumer; this layer only decides what is text and what is a link.
//!
//! Designed for WASM with a single cross-boundary call per entry.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::linkify::engine::{Linkifier, LinkifyConfig};
use crate::linkify::segment::Segment;
use crate::log::entry::LogEntry;

// =============================================================================
// FormattedEntry
// =============================================================================

/// Renderer-ready form of one log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedEntry {
    pub timestamp: String,
    /// Bracketed level tag, e.g. `[INFO]`.
    pub tag: String,
    /// Message line, never linkified.
    pub message: String,
    /// Linkified pretty-printed payload, when the entry carries data.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub payload: Option<Vec<Segment>>,
}

// =============================================================================
// LogFormatter
// =============================================================================

/// Formats log entries for the terminal renderer.
///
/// # Usage (JavaScript)
/// ```javascript
/// import init, { LogFormatter } from 'loglink';
///
/// await init();
/// const formatter = new LogFormatter(null);
/// const line = formatter.format({
///   timestamp: "15:04:05",
///   level: "success",
///   message: "GET /api/data/about 200",
///   data: { email: "abim@rejaka.id" },
/// });
/// ```
#[wasm_bindgen]
pub struct LogFormatter {
    linkifier: Linkifier,
}

impl Default for LogFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl LogFormatter {
    /// Create a formatter with an optional linkifier configuration.
    #[wasm_bindgen(constructor)]
    pub fn js_new(config: JsValue) -> Result<LogFormatter, JsValue> {
        let config: LinkifyConfig = if config.is_null() || config.is_undefined() {
            LinkifyConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?
        };

        Ok(Self::with_config(config))
    }

    /// Format one entry (JS binding)
    #[wasm_bindgen(js_name = format)]
    pub fn js_format(&mut self, entry: JsValue) -> Result<JsValue, JsValue> {
        let entry: LogEntry = serde_wasm_bindgen::from_value(entry)
            .map_err(|e| JsValue::from_str(&format!("Invalid log entry: {}", e)))?;

        let formatted = self.format(&entry);
        serde_wasm_bindgen::to_value(&formatted).map_err(|e| {
            web_sys::console::error_1(
                &format!("[LogFormatter] Serialization failed: {:?}", e).into(),
            );
            JsValue::from_str("Serialization failed")
        })
    }

    /// Percentage of payload scans served from the linkifier cache
    #[wasm_bindgen(js_name = cacheHitRate)]
    pub fn cache_hit_rate(&self) -> f64 {
        self.linkifier.cache_hit_rate()
    }
}

impl LogFormatter {
    pub fn new() -> Self {
        Self::with_config(LinkifyConfig::default())
    }

    pub fn with_config(config: LinkifyConfig) -> Self {
        Self {
            linkifier: Linkifier::with_config(config),
        }
    }

    /// Pretty-print the payload and linkify it; the message stays verbatim.
    pub fn format(&mut self, entry: &LogEntry) -> FormattedEntry {
        let payload = entry.data.as_ref().map(|data| {
            let pretty =
                serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
            self.linkifier.linkify(&pretty).segments
        });

        FormattedEntry {
            timestamp: entry.timestamp.clone(),
            tag: entry.level.tag().to_string(),
            message: entry.message.clone(),
            payload,
        }
    }
}

// =============================================================================
// Tests (TDD - written first!)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linkify::segment::LinkKind;
    use crate::log::entry::LogLevel;
    use serde_json::json;

    fn payload_links(formatted: &FormattedEntry) -> Vec<(LinkKind, String)> {
        formatted
            .payload
            .as_ref()
            .map(|segments| {
                segments
                    .iter()
                    .filter_map(|s| match s {
                        Segment::Link { kind, target, .. } => Some((*kind, target.clone())),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Requirement 1: Entries without data have no payload
    // -------------------------------------------------------------------------

    #[test]
    fn test_no_data_no_payload() {
        let entry = LogEntry::new(LogLevel::Info, "boot sequence initiated");
        let formatted = LogFormatter::new().format(&entry);

        assert_eq!(formatted.tag, "[INFO]");
        assert_eq!(formatted.message, "boot sequence initiated");
        assert!(formatted.payload.is_none());
    }

    // -------------------------------------------------------------------------
    // Requirement 2: Payloads are pretty-printed then linkified
    // -------------------------------------------------------------------------

    #[test]
    fn test_payload_linkified() {
        let entry = LogEntry::new(LogLevel::Success, "fetched profile").with_data(json!({
            "avatar": "/img/me.png",
            "email": "abim@rejaka.id"
        }));
        let formatted = LogFormatter::new().format(&entry);

        let found = payload_links(&formatted);
        assert!(found.contains(&(LinkKind::Image, "/img/me.png".to_string())));
        assert!(found.contains(&(LinkKind::Email, "mailto:abim@rejaka.id".to_string())));
    }

    #[test]
    fn test_payload_round_trips_pretty_json() {
        let data = json!({"file": "/dl/app.zip", "note": "mirror at https://files.io/app.zip"});
        let entry = LogEntry::new(LogLevel::Info, "release").with_data(data.clone());
        let formatted = LogFormatter::new().format(&entry);

        let pretty = serde_json::to_string_pretty(&data).unwrap();
        let joined: String = formatted
            .payload
            .unwrap()
            .iter()
            .map(|s| s.visible_text())
            .collect();
        assert_eq!(joined, pretty);
    }

    // -------------------------------------------------------------------------
    // Requirement 3: The message line is never linkified
    // -------------------------------------------------------------------------

    #[test]
    fn test_message_stays_verbatim() {
        let entry = LogEntry::new(LogLevel::Warn, "slow response from https://api.rejaka.id");
        let formatted = LogFormatter::new().format(&entry);

        assert_eq!(formatted.message, "slow response from https://api.rejaka.id");
        assert!(formatted.payload.is_none());
    }

    // -------------------------------------------------------------------------
    // Requirement 4: Formatter honors the capability set
    // -------------------------------------------------------------------------

    #[test]
    fn test_basic_config_payload() {
        let entry = LogEntry::new(LogLevel::Info, "contact card").with_data(json!({
            "email": "abim@rejaka.id",
            "site": "https://rejaka.id"
        }));
        let mut formatter = LogFormatter::with_config(LinkifyConfig::basic());
        let found = payload_links(&formatter.format(&entry));

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, LinkKind::Url);
    }

    // -------------------------------------------------------------------------
    // Requirement 5: Formatted entries serialize with payload omitted if absent
    // -------------------------------------------------------------------------

    #[test]
    fn test_formatted_serde_shape() {
        let entry = LogEntry {
            timestamp: "15:04:05".to_string(),
            level: LogLevel::Error,
            message: "GET /api/data/mail 500".to_string(),
            data: None,
        };
        let value = serde_json::to_value(LogFormatter::new().format(&entry)).unwrap();

        assert_eq!(value["timestamp"], "15:04:05");
        assert_eq!(value["tag"], "[ERROR]");
        assert!(value.get("payload").is_none());
    }

    // -------------------------------------------------------------------------
    // Requirement 6: Repeated entries reuse the linkifier cache
    // -------------------------------------------------------------------------

    #[test]
    fn test_repeat_payloads_hit_cache() {
        let entry = LogEntry::new(LogLevel::Success, "fetched profile")
            .with_data(json!({"avatar": "/img/me.png"}));
        let mut formatter = LogFormatter::new();

        let first = formatter.format(&entry);
        let second = formatter.format(&entry);

        assert_eq!(second.payload, first.payload);
        assert!(formatter.cache_hit_rate() > 0.0);
    }
}
