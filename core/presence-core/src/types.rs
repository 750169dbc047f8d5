//! Core types shared across all Pulseboard clients.
//!
//! These types are the lingua franca of the board: every client renders from
//! the same [`CompositeEmployee`] and [`LiveStatus`] values, so a status can
//! never mean different things on different screens.

use pulseboard_roster_protocol::{lenient_id, Employee, TrackingLog};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// A status an employee sets by hand in the dashboard, stored in the backend
/// roster. Fixed set; anything else on the wire is not a manual status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManualStatus {
    OnLeave,
    OutForLunch,
    Commuting,
    WorkingRemotely,
    InAMeeting,
    DoNotDisturb,
    Focusing,
    OutSick,
}

impl ManualStatus {
    pub const ALL: [ManualStatus; 8] = [
        ManualStatus::OnLeave,
        ManualStatus::OutForLunch,
        ManualStatus::Commuting,
        ManualStatus::WorkingRemotely,
        ManualStatus::InAMeeting,
        ManualStatus::DoNotDisturb,
        ManualStatus::Focusing,
        ManualStatus::OutSick,
    ];

    /// The exact string the backend stores for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ManualStatus::OnLeave => "On leave",
            ManualStatus::OutForLunch => "Out for Lunch",
            ManualStatus::Commuting => "Commuting",
            ManualStatus::WorkingRemotely => "Working remotely",
            ManualStatus::InAMeeting => "In a meeting",
            ManualStatus::DoNotDisturb => "Do not disturb",
            ManualStatus::Focusing => "Focusing",
            ManualStatus::OutSick => "Out sick",
        }
    }

    /// Exact-match parse. Unrecognized strings are ignored by resolution,
    /// not treated as manual statuses.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|status| status.as_str() == value)
    }
}

impl fmt::Display for ManualStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The canonical resolved status shown for an employee.
///
/// Derived fresh on every read, never persisted. The wire form is the plain
/// status string, matching what the dashboard displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiveStatus {
    /// Time-tracking is running right now.
    Active,
    /// Tracking stopped earlier today.
    Away,
    /// No tracking signal, or one from a previous day.
    Offline,
    /// A status the employee set by hand.
    Manual(ManualStatus),
}

impl LiveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LiveStatus::Active => "Active",
            LiveStatus::Away => "Away",
            LiveStatus::Offline => "Offline",
            LiveStatus::Manual(manual) => manual.as_str(),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Active" => Some(LiveStatus::Active),
            "Away" => Some(LiveStatus::Away),
            "Offline" => Some(LiveStatus::Offline),
            other => ManualStatus::parse(other).map(LiveStatus::Manual),
        }
    }

    /// Whether time-tracking is running for this status.
    pub fn is_tracking(&self) -> bool {
        matches!(self, LiveStatus::Active)
    }

    /// Whether the employee chose this status themselves.
    pub fn is_manual(&self) -> bool {
        matches!(self, LiveStatus::Manual(_))
    }
}

impl fmt::Display for LiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LiveStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LiveStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        LiveStatus::parse(&raw)
            .ok_or_else(|| D::Error::custom(format!("unknown canonical status: {raw:?}")))
    }
}

/// One employee as the dashboard sees them: the roster record with the
/// roster-status override applied and the realtime log attached.
///
/// Created fresh on every merge call; nothing caches these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeEmployee {
    #[serde(rename = "_id", with = "lenient_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "isActive")]
    pub is_active: Option<bool>,
    /// The effective stored status: the roster-status override when one
    /// matched, otherwise the roster record's own `status`.
    #[serde(default)]
    pub status: Option<String>,
    /// The matching realtime log entry, if the feed had one.
    #[serde(default, rename = "latestLog")]
    pub latest_log: Option<TrackingLog>,
    /// Roster fields the core does not model, carried through untouched.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl CompositeEmployee {
    /// A composite view of a roster record with no override and no log.
    pub fn from_roster(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            is_active: employee.is_active,
            status: employee.status,
            latest_log: None,
            extra: employee.extra,
        }
    }

    /// The manual status, if the stored string names one of the fixed set.
    pub fn manual_status(&self) -> Option<ManualStatus> {
        self.status.as_deref().and_then(ManualStatus::parse)
    }
}
