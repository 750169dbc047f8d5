//! Feed payload types and validation for the Pulseboard backend feeds.
//!
//! This crate is shared by presence-core and every client to prevent schema
//! drift. The backend remains the authority on what it sends; clients reuse
//! these types to parse the same shapes everywhere.
//!
//! Three feeds exist:
//!
//! - the employee roster (`GET /employee/list/{companyId}/`), an array of
//!   employee objects;
//! - the roster-status endpoint, a `{ "status": 1, "data": [...] }` envelope
//!   of per-employee status overrides;
//! - the realtime log feed, a map of employee id to the latest tracking
//!   signal (`{ "<id>": { "latestLog": { "status": bool, "timestamp": .. } } }`).
//!
//! Parsing is deliberately lenient: unknown fields are preserved or ignored,
//! ids may arrive as strings or numbers. Validation is a separate pass that
//! reports [`FeedIssue`]s instead of failing the parse — a half-broken feed
//! still renders a board.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Roster-status envelopes report success with this value.
pub const STATUS_OK: i64 = 1;

/// Serde adapter for ids that arrive as either a JSON string or a number.
///
/// Older backend exports used numeric ids; current ones use object-id
/// strings. Both normalize to `String` so map lookups and roster joins
/// compare one representation.
pub mod lenient_id {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S: Serializer>(id: &str, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(id)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            _ => Err(D::Error::custom("id must be a string or a number")),
        }
    }
}

/// One employee record from the roster feed.
///
/// Rosters carry many screen-specific fields (designation, contact info,
/// payroll flags); everything not modeled explicitly is preserved in `extra`
/// so a merged view keeps the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id", with = "lenient_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "isActive")]
    pub is_active: Option<bool>,
    /// Manually-set status string, if the employee has one. Kept as the raw
    /// wire string; whether it names a recognized manual status is decided
    /// at resolution time, not at parse time.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// One record from the roster-status endpoint's `data` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterStatus {
    #[serde(with = "lenient_id")]
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Envelope returned by the roster-status endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusListResponse {
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub data: Vec<RosterStatus>,
}

impl StatusListResponse {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// The realtime tracking signal for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingLog {
    /// `true` while time-tracking is running; `false` once it stopped.
    #[serde(rename = "status")]
    pub tracking: bool,
    /// RFC 3339 instant the signal was recorded at.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Per-employee slot in the realtime feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogSlot {
    #[serde(default, rename = "latestLog")]
    pub latest_log: Option<TrackingLog>,
}

/// A whole realtime feed snapshot, keyed by employee id.
pub type LogFeed = HashMap<String, LogSlot>;

/// A problem found while validating a feed payload.
///
/// Issues never abort parsing; they exist so operators can see why an
/// employee renders Offline when the feed looks healthy from the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedIssue {
    /// Which entry the issue is about (employee id, or `-` for the envelope).
    pub entry: String,
    pub code: &'static str,
    pub message: String,
}

impl FeedIssue {
    fn new(entry: impl Into<String>, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
            code,
            message: message.into(),
        }
    }
}

/// Checks a roster payload for entries the merge step cannot key on.
pub fn validate_roster(employees: &[Employee]) -> Vec<FeedIssue> {
    let mut issues = Vec::new();
    let mut seen = std::collections::HashSet::new();

    for employee in employees {
        if employee.id.trim().is_empty() {
            issues.push(FeedIssue::new("-", "empty_id", "employee record has an empty _id"));
            continue;
        }
        if !seen.insert(employee.id.as_str()) {
            issues.push(FeedIssue::new(
                employee.id.clone(),
                "duplicate_id",
                "roster contains this _id more than once; first record wins on merge",
            ));
        }
    }

    issues
}

/// Checks a roster-status envelope.
pub fn validate_status_list(response: &StatusListResponse) -> Vec<FeedIssue> {
    let mut issues = Vec::new();

    if !response.is_ok() {
        issues.push(FeedIssue::new(
            "-",
            "envelope_not_ok",
            format!("status envelope reports {}, expected {}", response.status, STATUS_OK),
        ));
    }

    for record in &response.data {
        if record.id.trim().is_empty() {
            issues.push(FeedIssue::new("-", "empty_id", "status record has an empty id"));
        }
    }

    issues
}

/// Checks a realtime feed snapshot for timestamps the recency check will
/// reject. A bad timestamp is not fatal — that employee resolves Offline —
/// but it usually means the tracker client is misbehaving.
pub fn validate_log_feed(feed: &LogFeed) -> Vec<FeedIssue> {
    let mut issues = Vec::new();

    for (id, slot) in feed {
        let Some(log) = &slot.latest_log else {
            continue;
        };
        match &log.timestamp {
            Some(raw) if DateTime::parse_from_rfc3339(raw).is_err() => {
                issues.push(FeedIssue::new(
                    id.clone(),
                    "bad_timestamp",
                    format!("latestLog timestamp is not RFC 3339: {raw:?}"),
                ));
            }
            None if !log.tracking => {
                issues.push(FeedIssue::new(
                    id.clone(),
                    "missing_timestamp",
                    "stopped tracking log carries no timestamp; employee will resolve Offline",
                ));
            }
            _ => {}
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_string_and_numeric_ids() {
        let raw = r#"[
            {"_id": "66b2f1", "name": "Asha", "isActive": true},
            {"_id": 42, "name": "Jonas", "status": "Commuting"}
        ]"#;
        let roster: Vec<Employee> = serde_json::from_str(raw).expect("parse roster");
        assert_eq!(roster[0].id, "66b2f1");
        assert_eq!(roster[1].id, "42");
        assert_eq!(roster[1].status.as_deref(), Some("Commuting"));
    }

    #[test]
    fn preserves_unmodeled_roster_fields() {
        let raw = r#"{"_id": "e1", "name": "Asha", "designation": "QA Engineer", "phone": "555"}"#;
        let employee: Employee = serde_json::from_str(raw).expect("parse employee");
        assert_eq!(
            employee.extra.get("designation").and_then(Value::as_str),
            Some("QA Engineer")
        );

        let round = serde_json::to_value(&employee).expect("serialize");
        assert_eq!(round.get("designation").and_then(Value::as_str), Some("QA Engineer"));
        assert_eq!(round.get("_id").and_then(Value::as_str), Some("e1"));
    }

    #[test]
    fn rejects_object_ids() {
        let raw = r#"{"_id": {"$oid": "abc"}, "name": "Asha"}"#;
        assert!(serde_json::from_str::<Employee>(raw).is_err());
    }

    #[test]
    fn parses_status_envelope() {
        let raw = r#"{"status": 1, "data": [{"id": 7, "status": "On leave"}]}"#;
        let response: StatusListResponse = serde_json::from_str(raw).expect("parse envelope");
        assert!(response.is_ok());
        assert_eq!(response.data[0].id, "7");
        assert_eq!(response.data[0].status.as_deref(), Some("On leave"));
    }

    #[test]
    fn parses_log_feed() {
        let raw = r#"{
            "e1": {"latestLog": {"status": true, "timestamp": "2026-08-06T09:00:00Z"}},
            "e2": {"latestLog": {"status": false}},
            "e3": {}
        }"#;
        let feed: LogFeed = serde_json::from_str(raw).expect("parse feed");
        assert!(feed["e1"].latest_log.as_ref().map(|l| l.tracking).unwrap_or(false));
        assert_eq!(feed["e2"].latest_log.as_ref().and_then(|l| l.timestamp.clone()), None);
        assert!(feed["e3"].latest_log.is_none());
    }

    #[test]
    fn validate_roster_flags_empty_and_duplicate_ids() {
        let roster: Vec<Employee> = serde_json::from_str(
            r#"[{"_id": "a"}, {"_id": "a"}, {"_id": "  "}]"#,
        )
        .expect("parse");
        let issues = validate_roster(&roster);
        assert!(issues.iter().any(|i| i.code == "duplicate_id"));
        assert!(issues.iter().any(|i| i.code == "empty_id"));
    }

    #[test]
    fn validate_status_list_flags_failed_envelope() {
        let response = StatusListResponse {
            status: 0,
            data: vec![],
        };
        let issues = validate_status_list(&response);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, "envelope_not_ok");
    }

    #[test]
    fn validate_log_feed_flags_bad_timestamps() {
        let feed: LogFeed = serde_json::from_str(
            r#"{
                "ok": {"latestLog": {"status": false, "timestamp": "2026-08-06T09:00:00Z"}},
                "bad": {"latestLog": {"status": false, "timestamp": "yesterday"}},
                "none": {"latestLog": {"status": false}}
            }"#,
        )
        .expect("parse");
        let issues = validate_log_feed(&feed);
        assert!(issues.iter().any(|i| i.entry == "bad" && i.code == "bad_timestamp"));
        assert!(issues.iter().any(|i| i.entry == "none" && i.code == "missing_timestamp"));
        assert!(!issues.iter().any(|i| i.entry == "ok"));
    }

    #[test]
    fn validate_log_feed_ignores_running_log_without_timestamp() {
        let feed: LogFeed =
            serde_json::from_str(r#"{"e1": {"latestLog": {"status": true}}}"#).expect("parse");
        assert!(validate_log_feed(&feed).is_empty());
    }
}
