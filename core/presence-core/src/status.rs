//! Display metadata for canonical statuses.
//!
//! One immutable table, defined at compile time and indexed once on first
//! use. The mapper does no validation and no fallback: an unknown name is a
//! missing key, and what an unknown status looks like is the caller's call.

use crate::types::{LiveStatus, ManualStatus};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Display metadata for one canonical status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    pub emoji: &'static str,
    /// Hex color the dashboard tints the status chip with.
    pub color: &'static str,
    pub text: &'static str,
}

const ACTIVE: StatusEntry = StatusEntry {
    emoji: "🟢",
    color: "#2eb67d",
    text: "Active",
};
const AWAY: StatusEntry = StatusEntry {
    emoji: "🌙",
    color: "#e2a52e",
    text: "Away",
};
const OFFLINE: StatusEntry = StatusEntry {
    emoji: "⚪",
    color: "#9aa0a6",
    text: "Offline",
};
const ON_LEAVE: StatusEntry = StatusEntry {
    emoji: "🌴",
    color: "#e0675f",
    text: "On leave",
};
const OUT_FOR_LUNCH: StatusEntry = StatusEntry {
    emoji: "🍴",
    color: "#f2a654",
    text: "Out for Lunch",
};
const COMMUTING: StatusEntry = StatusEntry {
    emoji: "🚗",
    color: "#5b8def",
    text: "Commuting",
};
const WORKING_REMOTELY: StatusEntry = StatusEntry {
    emoji: "🏠",
    color: "#36c5f0",
    text: "Working remotely",
};
const IN_A_MEETING: StatusEntry = StatusEntry {
    emoji: "📅",
    color: "#7a5cc9",
    text: "In a meeting",
};
const DO_NOT_DISTURB: StatusEntry = StatusEntry {
    emoji: "⛔",
    color: "#d93025",
    text: "Do not disturb",
};
const FOCUSING: StatusEntry = StatusEntry {
    emoji: "🎯",
    color: "#2d9d78",
    text: "Focusing",
};
const OUT_SICK: StatusEntry = StatusEntry {
    emoji: "🤒",
    color: "#c77dba",
    text: "Out sick",
};

static STATUS_TABLE: Lazy<HashMap<&'static str, &'static StatusEntry>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for status in [LiveStatus::Active, LiveStatus::Away, LiveStatus::Offline] {
        table.insert(status.as_str(), status.display());
    }
    for manual in ManualStatus::ALL {
        let status = LiveStatus::Manual(manual);
        table.insert(status.as_str(), status.display());
    }
    table
});

/// Constant lookup by canonical status name.
///
/// Unknown names return `None`; the mapper never invents a display.
pub fn display_for(name: &str) -> Option<&'static StatusEntry> {
    STATUS_TABLE.get(name).copied()
}

impl LiveStatus {
    /// Display metadata for this status. Total: every canonical status has
    /// an entry.
    pub fn display(&self) -> &'static StatusEntry {
        match self {
            LiveStatus::Active => &ACTIVE,
            LiveStatus::Away => &AWAY,
            LiveStatus::Offline => &OFFLINE,
            LiveStatus::Manual(manual) => match manual {
                ManualStatus::OnLeave => &ON_LEAVE,
                ManualStatus::OutForLunch => &OUT_FOR_LUNCH,
                ManualStatus::Commuting => &COMMUTING,
                ManualStatus::WorkingRemotely => &WORKING_REMOTELY,
                ManualStatus::InAMeeting => &IN_A_MEETING,
                ManualStatus::DoNotDisturb => &DO_NOT_DISTURB,
                ManualStatus::Focusing => &FOCUSING,
                ManualStatus::OutSick => &OUT_SICK,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_canonical_status() {
        for status in [LiveStatus::Active, LiveStatus::Away, LiveStatus::Offline] {
            assert_eq!(display_for(status.as_str()), Some(status.display()));
        }
        for manual in ManualStatus::ALL {
            let status = LiveStatus::Manual(manual);
            assert_eq!(display_for(status.as_str()), Some(status.display()));
        }
    }

    #[test]
    fn entry_text_matches_canonical_name() {
        for manual in ManualStatus::ALL {
            let status = LiveStatus::Manual(manual);
            assert_eq!(status.display().text, status.as_str());
        }
        assert_eq!(LiveStatus::Active.display().text, "Active");
    }

    #[test]
    fn unknown_name_has_no_entry() {
        assert_eq!(display_for("Banana"), None);
        assert_eq!(display_for("active"), None);
        assert_eq!(display_for(""), None);
    }

    #[test]
    fn lookup_is_stable_across_calls() {
        let first = display_for("Away");
        let second = display_for("Away");
        assert_eq!(first, second);
    }
}
