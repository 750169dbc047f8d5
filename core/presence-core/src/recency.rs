//! Calendar-day recency checks for tracking timestamps.
//!
//! A tracker that stopped today renders Away; one that stopped on an earlier
//! day renders Offline. "Today" is computed against a [`ReferenceClock`]:
//! the hosted dashboard always used the viewer's wall clock, so `Local` is
//! the default, but a team spanning timezones usually wants the company's
//! configured offset instead (see `BoardConfig`).

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};

/// Which timezone "today" is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceClock {
    /// The process-local timezone (original dashboard behavior).
    #[default]
    Local,
    /// Coordinated universal time.
    Utc,
    /// A fixed company-wide UTC offset.
    Offset(FixedOffset),
}

impl ReferenceClock {
    /// Builds a fixed-offset clock from minutes east of UTC.
    ///
    /// Out-of-range offsets (beyond ±24h) yield `None`.
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(ReferenceClock::Offset)
    }

    /// The civil date of `instant` on this clock.
    fn civil_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        match self {
            ReferenceClock::Local => instant.with_timezone(&Local).date_naive(),
            ReferenceClock::Utc => instant.date_naive(),
            ReferenceClock::Offset(offset) => instant.with_timezone(offset).date_naive(),
        }
    }
}

/// Parses an RFC 3339 timestamp into UTC. Anything else is `None`.
pub fn parse_rfc3339(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Whether `timestamp` falls on the current local calendar day.
///
/// Missing or unparsable input is never "today".
pub fn is_today(timestamp: Option<&str>) -> bool {
    is_today_at(ReferenceClock::Local, timestamp, Utc::now())
}

/// Deterministic variant of [`is_today`] with an explicit clock and "now".
pub fn is_today_at(clock: ReferenceClock, timestamp: Option<&str>, now: DateTime<Utc>) -> bool {
    let Some(raw) = timestamp else {
        return false;
    };
    let Some(instant) = parse_rfc3339(raw) else {
        return false;
    };
    clock.civil_date(instant) == clock.civil_date(now)
}
