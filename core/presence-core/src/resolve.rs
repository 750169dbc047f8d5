//! Live-status resolution.
//!
//! Combines the realtime tracking signal, the manually-set status, and the
//! last-seen timestamp into one canonical status. First match wins:
//!
//! 1. tracking right now        -> Active (overrides any manual status)
//! 2. recognized manual status  -> that status
//! 3. tracking stopped          -> Away if it stopped today, else Offline
//! 4. no signal at all          -> Offline
//!
//! Active work superseding a stale "Out for Lunch" flag is intentional: the
//! tracker is the stronger signal whenever it is actually running.
//!
//! Total over all inputs; malformed data degrades to Offline, nothing
//! panics. Resolution is re-run on every render cycle — there is no stored
//! state machine, only the classification branch taken this call.

use crate::recency::{is_today_at, ReferenceClock};
use crate::types::{CompositeEmployee, LiveStatus};
use chrono::{DateTime, Utc};

/// Resolves an employee's live status against the local wall clock.
pub fn live_status(employee: &CompositeEmployee) -> LiveStatus {
    live_status_at(employee, ReferenceClock::Local, Utc::now())
}

/// Deterministic variant of [`live_status`] with an explicit reference
/// clock and "now". The engine uses the company clock here; tests pin both.
pub fn live_status_at(
    employee: &CompositeEmployee,
    clock: ReferenceClock,
    now: DateTime<Utc>,
) -> LiveStatus {
    if let Some(log) = &employee.latest_log {
        if log.tracking {
            return LiveStatus::Active;
        }
    }

    if let Some(manual) = employee.manual_status() {
        return LiveStatus::Manual(manual);
    }

    match &employee.latest_log {
        Some(log) if is_today_at(clock, log.timestamp.as_deref(), now) => LiveStatus::Away,
        Some(_) => LiveStatus::Offline,
        None => LiveStatus::Offline,
    }
}
