use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Shown when the model supplies no usable emoji.
pub const DEFAULT_EMOJI: &str = "📅";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalEvent {
    pub title: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl HistoricalEvent {
    pub fn display_emoji(&self) -> &str {
        match self.emoji.as_deref().map(str::trim) {
            Some(emoji) if !emoji.is_empty() => emoji,
            _ => DEFAULT_EMOJI,
        }
    }
}

// Loose shape of one array entry in the model's reply. Any field may be
// missing or null; only entries with a non-blank title and summary survive.
#[derive(Debug, Deserialize)]
pub(crate) struct RawEvent {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    emoji: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    year: Option<String>,
}

// Display-only fields: numbers become text, other non-strings are dropped.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

impl RawEvent {
    /// `None` for array entries that are not event objects at all.
    pub(crate) fn from_value(value: Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    pub(crate) fn into_displayable(self) -> Option<HistoricalEvent> {
        let title = self.title.filter(|t| !t.trim().is_empty())?;
        let summary = self.summary.filter(|s| !s.trim().is_empty())?;
        Some(HistoricalEvent {
            title,
            summary,
            emoji: self.emoji,
            year: self.year,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_emoji_falls_back_to_default() {
        let event = HistoricalEvent {
            title: "t".to_string(),
            summary: "s".to_string(),
            emoji: Some("  ".to_string()),
            year: None,
        };
        assert_eq!(event.display_emoji(), DEFAULT_EMOJI);
    }

    #[test]
    fn raw_event_without_summary_is_dropped() {
        let raw: RawEvent = serde_json::from_str(r#"{"title":"A","summary":"   "}"#).unwrap();
        assert!(raw.into_displayable().is_none());
    }

    #[test]
    fn numeric_year_kept_as_text_and_odd_emoji_dropped() {
        let raw: RawEvent =
            serde_json::from_str(r#"{"title":"A","summary":"B","year":1969,"emoji":["x"]}"#)
                .unwrap();
        let event = raw.into_displayable().unwrap();
        assert_eq!(event.year.as_deref(), Some("1969"));
        assert_eq!(event.emoji, None);
        assert_eq!(event.display_emoji(), DEFAULT_EMOJI);
    }

    #[test]
    fn non_object_entry_is_not_an_event() {
        assert!(RawEvent::from_value(Value::String("junk".to_string())).is_none());
        assert!(RawEvent::from_value(serde_json::json!(42)).is_none());
        assert!(RawEvent::from_value(serde_json::json!(["A", "B"])).is_none());
    }
}
