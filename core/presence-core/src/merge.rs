//! Joins roster records with status overrides and realtime logs.
//!
//! The merger only assembles data; it never resolves a status. Resolution
//! ([`crate::resolve`]) is a separate consumer of the merged value, so merge
//! correctness and status semantics can change independently.

use crate::types::CompositeEmployee;
use pulseboard_roster_protocol::{Employee, LogFeed, RosterStatus};

/// Combines one roster record with the roster-status list and the realtime
/// feed into the composite view the dashboard renders.
///
/// - a missing employee yields `None`, no error;
/// - the first roster-status record matching on id wins (the feed is
///   expected to carry at most one per id); a matched record with no status
///   falls back to the employee's own stored status;
/// - the realtime feed contributes `latest_log`, or `None` when absent.
///
/// All other roster fields are carried through untouched.
pub fn combine_employee(
    employee: Option<&Employee>,
    roster_statuses: &[RosterStatus],
    logs: &LogFeed,
) -> Option<CompositeEmployee> {
    let employee = employee?;
    let mut composite = CompositeEmployee::from_roster(employee.clone());

    if let Some(status) = roster_statuses
        .iter()
        .find(|record| record.id == composite.id)
        .and_then(|record| record.status.clone())
    {
        composite.status = Some(status);
    }

    composite.latest_log = logs
        .get(&composite.id)
        .and_then(|slot| slot.latest_log.clone());

    Some(composite)
}

/// Merges a whole roster; every employee yields exactly one row.
pub fn combine_roster(
    employees: &[Employee],
    roster_statuses: &[RosterStatus],
    logs: &LogFeed,
) -> Vec<CompositeEmployee> {
    employees
        .iter()
        .filter_map(|employee| combine_employee(Some(employee), roster_statuses, logs))
        .collect()
}
