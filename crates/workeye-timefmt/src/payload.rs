//! Rewrites timestamp and duration fields inside dashboard API payloads

use std::collections::BTreeMap;
use std::fmt;

use chrono::TimeZone;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::format::TimeFormat;

/// How a payload field is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStyle {
    Clock,
    DateTime,
    Relative,
    Duration,
}

/// Field name → display style
///
/// Deserializes from a flat JSON object, e.g. `{"last_seen": "relative"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldRules {
    rules: BTreeMap<String, FieldStyle>,
}

const DEFAULT_RULES: &[(&str, FieldStyle)] = &[
    ("last_seen", FieldStyle::Relative),
    ("last_activity", FieldStyle::Relative),
    ("last_punch_in", FieldStyle::Relative),
    ("last_punch_out", FieldStyle::Relative),
    ("lastSeen", FieldStyle::Relative),
    ("lastActivity", FieldStyle::Relative),
    ("timestamp", FieldStyle::Clock),
    ("session_start", FieldStyle::Clock),
    ("punch_in_time", FieldStyle::Clock),
    ("punch_out_time", FieldStyle::Clock),
    ("created_at", FieldStyle::DateTime),
    ("updated_at", FieldStyle::DateTime),
    ("generatedAt", FieldStyle::DateTime),
    ("last_updated", FieldStyle::DateTime),
    ("firstSeen", FieldStyle::DateTime),
    ("firstActivity", FieldStyle::DateTime),
    ("accountCreated", FieldStyle::DateTime),
    ("startDate", FieldStyle::DateTime),
    ("endDate", FieldStyle::DateTime),
    ("totalTime", FieldStyle::Duration),
    ("activeTime", FieldStyle::Duration),
    ("idleTime", FieldStyle::Duration),
    ("otherAppsTime", FieldStyle::Duration),
    ("totalTrackedTime", FieldStyle::Duration),
];

impl Default for FieldRules {
    /// Fields the dashboard API is known to emit
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES
                .iter()
                .map(|(field, style)| (field.to_string(), *style))
                .collect(),
        }
    }
}

impl FieldRules {
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    pub fn with(mut self, field: impl Into<String>, style: FieldStyle) -> Self {
        self.rules.insert(field.into(), style);
        self
    }

    /// Adds or overrides rules from `other`
    pub fn extend(&mut self, other: FieldRules) {
        self.rules.extend(other.rules);
    }

    pub fn style_for(&self, field: &str) -> Option<FieldStyle> {
        self.rules.get(field).copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Counts from one [`TimeFormat::render_payload`] pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    /// Fields replaced with a display string
    pub rewritten: usize,
    /// Ruled fields left as-is because their value did not parse
    pub unparsed: usize,
}

impl<Tz> TimeFormat<Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    /// Walks `value` recursively and formats every field named in `rules`.
    ///
    /// Strings and nulls go through the field's formatter (nulls therefore
    /// become sentinels); numbers are only taken by `duration` rules. Values
    /// that fail to parse stay untouched. Ruled fields holding objects or
    /// arrays are walked like any other value.
    pub fn render_payload(&self, value: &mut Value, rules: &FieldRules) -> RenderSummary {
        let mut summary = RenderSummary::default();
        self.render_value(value, rules, &mut summary);
        summary
    }

    fn render_value(&self, value: &mut Value, rules: &FieldRules, summary: &mut RenderSummary) {
        match value {
            Value::Object(map) => {
                for (key, field) in map.iter_mut() {
                    let handled = match rules.style_for(key) {
                        Some(style) => self.render_field(style, field, summary),
                        None => false,
                    };
                    if !handled {
                        self.render_value(field, rules, summary);
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    self.render_value(item, rules, summary);
                }
            }
            _ => {}
        }
    }

    fn render_field(&self, style: FieldStyle, field: &mut Value, summary: &mut RenderSummary) -> bool {
        let raw = match &*field {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            Value::Number(n) if style == FieldStyle::Duration => Some(n.to_string()),
            _ => return false,
        };

        match self.try_format(style, raw.as_deref()) {
            Ok(text) => {
                *field = Value::String(text);
                summary.rewritten += 1;
            }
            Err(err) => {
                log::debug!("{}; leaving field as-is", err);
                summary.unparsed += 1;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_cover_backend_fields() {
        let rules = FieldRules::default();
        assert_eq!(rules.style_for("last_seen"), Some(FieldStyle::Relative));
        assert_eq!(rules.style_for("timestamp"), Some(FieldStyle::Clock));
        assert_eq!(rules.style_for("created_at"), Some(FieldStyle::DateTime));
        assert_eq!(rules.style_for("totalTime"), Some(FieldStyle::Duration));
        assert_eq!(rules.style_for("last_punch_out"), Some(FieldStyle::Relative));
        assert_eq!(rules.style_for("lastSeen"), Some(FieldStyle::Relative));
        assert_eq!(rules.style_for("firstActivity"), Some(FieldStyle::DateTime));
        assert_eq!(rules.style_for("name"), None);
        assert_eq!(rules.len(), DEFAULT_RULES.len());
    }

    #[test]
    fn test_rules_deserialize_from_flat_object() {
        let rules: FieldRules =
            serde_json::from_str(r#"{"seen_at": "relative", "took": "duration", "stamp": "date_time"}"#).unwrap();
        assert_eq!(rules.style_for("seen_at"), Some(FieldStyle::Relative));
        assert_eq!(rules.style_for("took"), Some(FieldStyle::Duration));
        assert_eq!(rules.style_for("stamp"), Some(FieldStyle::DateTime));
    }

    #[test]
    fn test_extend_overrides() {
        let mut rules = FieldRules::default();
        rules.extend(FieldRules::empty().with("timestamp", FieldStyle::DateTime));
        assert_eq!(rules.style_for("timestamp"), Some(FieldStyle::DateTime));
        assert_eq!(rules.style_for("last_seen"), Some(FieldStyle::Relative));
    }
}
