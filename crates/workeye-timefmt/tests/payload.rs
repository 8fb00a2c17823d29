//! Tests for payload rendering

use chrono::{DateTime, FixedOffset, Utc};
use serde_json::json;
use workeye_timefmt::{FieldRules, FieldStyle, FixedClock, RenderSummary, TimeFormat};

fn formatter() -> TimeFormat<FixedOffset> {
    let now = DateTime::parse_from_rfc3339("2025-12-22T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc);
    TimeFormat::new(FixedOffset::east_opt(0).unwrap(), FixedClock(now))
}

// ── dashboard payloads ───────────────────────────────────────────────────────

#[test]
fn test_device_list_payload() {
    let mut payload = json!({
        "success": true,
        "devices": [
            {
                "name": "alice",
                "last_seen": "2025-12-22T11:58:00",
                "last_activity": null,
                "session_start": "2025-12-22T08:05:00"
            },
            {
                "name": "bob",
                "last_seen": "Unknown",
                "session_start": "Recent"
            }
        ]
    });

    let summary = formatter().render_payload(&mut payload, &FieldRules::default());

    assert_eq!(summary, RenderSummary { rewritten: 5, unparsed: 0 });
    assert_eq!(payload["devices"][0]["last_seen"], "2 minutes ago");
    assert_eq!(payload["devices"][0]["last_activity"], "Never");
    assert_eq!(payload["devices"][0]["session_start"], "08:05 AM");
    assert_eq!(payload["devices"][1]["last_seen"], "Never");
    assert_eq!(payload["devices"][1]["session_start"], "Recent");
    assert_eq!(payload["devices"][0]["name"], "alice");
    assert_eq!(payload["success"], true);
}

#[test]
fn test_app_usage_durations() {
    let mut payload = json!({
        "apps": [
            { "name": "code.exe", "totalTime": 5425.5, "activeTime": 4800, "idleTime": "625.5" }
        ],
        "totalTrackedTime": 42.0,
        "totalTrackedHours": 0.01
    });

    let summary = formatter().render_payload(&mut payload, &FieldRules::default());

    assert_eq!(summary.rewritten, 4);
    assert_eq!(payload["apps"][0]["totalTime"], "1h 30m");
    assert_eq!(payload["apps"][0]["activeTime"], "1h 20m");
    assert_eq!(payload["apps"][0]["idleTime"], "10m 25s");
    assert_eq!(payload["totalTrackedTime"], "42s");
    assert_eq!(payload["totalTrackedHours"], 0.01);
}

#[test]
fn test_unparsed_values_are_counted_and_kept() {
    let mut payload = json!({
        "logs": [
            { "timestamp": "sometime", "created_at": "2025-12-22 06:36:15" },
            { "timestamp": 1734850000 }
        ]
    });

    let summary = formatter().render_payload(&mut payload, &FieldRules::default());

    assert_eq!(summary, RenderSummary { rewritten: 1, unparsed: 1 });
    assert_eq!(payload["logs"][0]["timestamp"], "sometime");
    assert_eq!(payload["logs"][0]["created_at"], "2025-12-22 06:36:15");
    // numbers are only taken by duration rules
    assert_eq!(payload["logs"][1]["timestamp"], 1734850000);
}

#[test]
fn test_custom_rules_replace_defaults() {
    let rules = FieldRules::empty().with("seen", FieldStyle::Relative);
    let mut payload = json!({ "seen": "2025-12-20T12:00:00Z", "last_seen": "2025-12-20T12:00:00Z" });

    formatter().render_payload(&mut payload, &rules);

    assert_eq!(payload["seen"], "2 days ago");
    assert_eq!(payload["last_seen"], "2025-12-20T12:00:00Z");
}

#[test]
fn test_ruled_object_is_descended_into() {
    let rules = FieldRules::empty().with("timestamp", FieldStyle::Clock);
    let mut payload = json!({ "timestamp": { "timestamp": "2025-12-22T06:36:15Z" } });

    let summary = formatter().render_payload(&mut payload, &rules);

    assert_eq!(summary.rewritten, 1);
    assert_eq!(payload["timestamp"]["timestamp"], "06:36 AM");
}

#[test]
fn test_members_payload_formats_both_punches() {
    let mut payload = json!({
        "members": [
            {
                "email": "alice@example.com",
                "last_punch_in": "2025-12-22T11:00:00",
                "last_punch_out": "2025-12-22T11:30:00",
                "created_at": "2025-12-01T09:00:00"
            }
        ]
    });

    let summary = formatter().render_payload(&mut payload, &FieldRules::default());

    assert_eq!(summary, RenderSummary { rewritten: 3, unparsed: 0 });
    let member = &payload["members"][0];
    assert_eq!(member["last_punch_in"], "1 hour ago");
    assert_eq!(member["last_punch_out"], "30 minutes ago");
    assert_eq!(member["created_at"], "2025-12-01 09:00:00");
}

#[test]
fn test_export_payload_camel_case_fields() {
    let mut payload = json!({
        "startDate": "2025-12-15T12:00:00",
        "endDate": "2025-12-22T12:00:00",
        "devices": [
            {
                "lastSeen": "2025-12-22T11:55:00",
                "lastActivity": null,
                "accountCreated": "2025-11-03T08:15:30"
            }
        ],
        "apps": [
            { "firstSeen": "2025-12-22T08:00:00", "lastSeen": "2025-12-22T10:00:00" }
        ],
        "days": [
            { "firstActivity": "2025-12-21T09:01:02", "lastActivity": "2025-12-21T17:45:00" }
        ]
    });

    let summary = formatter().render_payload(&mut payload, &FieldRules::default());

    assert_eq!(summary, RenderSummary { rewritten: 9, unparsed: 0 });
    assert_eq!(payload["startDate"], "2025-12-15 12:00:00");
    assert_eq!(payload["endDate"], "2025-12-22 12:00:00");
    assert_eq!(payload["devices"][0]["lastSeen"], "5 minutes ago");
    assert_eq!(payload["devices"][0]["lastActivity"], "Never");
    assert_eq!(payload["devices"][0]["accountCreated"], "2025-11-03 08:15:30");
    assert_eq!(payload["apps"][0]["firstSeen"], "2025-12-22 08:00:00");
    assert_eq!(payload["apps"][0]["lastSeen"], "2 hours ago");
    assert_eq!(payload["days"][0]["firstActivity"], "2025-12-21 09:01:02");
    assert_eq!(payload["days"][0]["lastActivity"], "18 hours ago");
}
