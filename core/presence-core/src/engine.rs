//! PresenceEngine - the main entry point for Pulseboard clients.
//!
//! One unified, synchronous API: the collaborator doing the fetching pushes
//! feed snapshots in, clients pull a display-ready board out. Each board
//! call recomputes from the latest snapshots; nothing is cached or
//! persisted, so a render can never show a status the inputs no longer
//! support.

use crate::config::BoardConfig;
use crate::merge::combine_roster;
use crate::resolve::live_status_at;
use crate::types::{CompositeEmployee, LiveStatus};
use chrono::{DateTime, Utc};
use pulseboard_roster_protocol::{Employee, LogFeed, RosterStatus, StatusListResponse, TrackingLog};
use serde::Serialize;
use tracing::{debug, warn};

/// One display-ready board row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeView {
    pub id: String,
    pub name: Option<String>,
    pub status: LiveStatus,
    pub emoji: &'static str,
    pub color: &'static str,
    pub label: &'static str,
    pub latest_log: Option<TrackingLog>,
}

/// Board-level counts for the header strip.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoardSummary {
    pub total: usize,
    pub active: usize,
    pub away: usize,
    pub offline: usize,
    pub manual: usize,
}

/// The engine all clients render from.
pub struct PresenceEngine {
    config: BoardConfig,
    roster: Vec<Employee>,
    statuses: Vec<RosterStatus>,
    logs: LogFeed,
}

impl PresenceEngine {
    pub fn new() -> Self {
        Self::with_config(BoardConfig::default())
    }

    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            config,
            roster: Vec::new(),
            statuses: Vec::new(),
            logs: LogFeed::new(),
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Replaces the roster snapshot.
    pub fn update_roster(&mut self, roster: Vec<Employee>) {
        debug!(count = roster.len(), "roster snapshot updated");
        self.roster = roster;
    }

    /// Replaces the status overrides from a raw endpoint response. A non-ok
    /// envelope is ignored wholesale: a failed status fetch must not wipe
    /// the overrides from the last good one.
    pub fn update_status_list(&mut self, response: StatusListResponse) {
        if !response.is_ok() {
            warn!(status = response.status, "ignoring non-ok status envelope");
            return;
        }
        self.update_statuses(response.data);
    }

    /// Replaces the status overrides.
    pub fn update_statuses(&mut self, statuses: Vec<RosterStatus>) {
        debug!(count = statuses.len(), "status overrides updated");
        self.statuses = statuses;
    }

    /// Replaces the realtime log feed snapshot.
    pub fn update_log_feed(&mut self, feed: LogFeed) {
        debug!(count = feed.len(), "log feed snapshot updated");
        self.logs = feed;
    }

    /// The merged composite roster, unresolved.
    pub fn merged(&self) -> Vec<CompositeEmployee> {
        combine_roster(&self.roster, &self.statuses, &self.logs)
    }

    /// The display-ready board as of now.
    pub fn board(&self) -> Vec<EmployeeView> {
        self.board_at(Utc::now())
    }

    /// Deterministic variant of [`Self::board`] for tests and replays.
    pub fn board_at(&self, now: DateTime<Utc>) -> Vec<EmployeeView> {
        let clock = self.config.reference_clock();
        self.merged()
            .into_iter()
            .map(|employee| {
                let status = live_status_at(&employee, clock, now);
                let entry = status.display();
                EmployeeView {
                    id: employee.id,
                    name: employee.name,
                    status,
                    emoji: entry.emoji,
                    color: entry.color,
                    label: entry.text,
                    latest_log: employee.latest_log,
                }
            })
            .collect()
    }

    /// Counts per status bucket as of now.
    pub fn summary(&self) -> BoardSummary {
        self.summary_at(Utc::now())
    }

    pub fn summary_at(&self, now: DateTime<Utc>) -> BoardSummary {
        let mut summary = BoardSummary::default();
        for row in self.board_at(now) {
            summary.total += 1;
            match row.status {
                LiveStatus::Active => summary.active += 1,
                LiveStatus::Away => summary.away += 1,
                LiveStatus::Offline => summary.offline += 1,
                LiveStatus::Manual(_) => summary.manual += 1,
            }
        }
        summary
    }
}

impl Default for PresenceEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ManualStatus;
    use chrono::TimeZone;
    use pulseboard_roster_protocol::LogSlot;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
    }

    fn utc_engine() -> PresenceEngine {
        PresenceEngine::with_config(BoardConfig {
            reference_utc_offset_minutes: Some(0),
            ..BoardConfig::default()
        })
    }

    fn roster() -> Vec<Employee> {
        serde_json::from_str(
            r#"[
                {"_id": "e1", "name": "Asha"},
                {"_id": "e2", "name": "Jonas", "status": "On leave"},
                {"_id": "e3", "name": "Mira"}
            ]"#,
        )
        .expect("parse roster")
    }

    fn feed() -> LogFeed {
        let mut feed = LogFeed::new();
        feed.insert(
            "e1".into(),
            LogSlot {
                latest_log: Some(TrackingLog {
                    tracking: true,
                    timestamp: Some("2026-08-06T11:59:00Z".into()),
                }),
            },
        );
        feed.insert(
            "e3".into(),
            LogSlot {
                latest_log: Some(TrackingLog {
                    tracking: false,
                    timestamp: Some("2026-08-06T08:00:00Z".into()),
                }),
            },
        );
        feed
    }

    #[test]
    fn empty_engine_renders_empty_board() {
        let engine = utc_engine();
        assert!(engine.board_at(now()).is_empty());
        assert_eq!(engine.summary_at(now()), BoardSummary::default());
    }

    #[test]
    fn board_resolves_and_decorates_each_row() {
        let mut engine = utc_engine();
        engine.update_roster(roster());
        engine.update_log_feed(feed());

        let board = engine.board_at(now());
        assert_eq!(board.len(), 3);

        assert_eq!(board[0].status, LiveStatus::Active);
        assert_eq!(board[0].emoji, "🟢");
        assert_eq!(board[0].label, "Active");

        assert_eq!(board[1].status, LiveStatus::Manual(ManualStatus::OnLeave));
        assert_eq!(board[1].label, "On leave");

        assert_eq!(board[2].status, LiveStatus::Away);
        assert_eq!(board[2].latest_log.as_ref().map(|l| l.tracking), Some(false));
    }

    #[test]
    fn status_override_reaches_the_board() {
        let mut engine = utc_engine();
        engine.update_roster(roster());
        engine.update_status_list(StatusListResponse {
            status: 1,
            data: vec![RosterStatus {
                id: "e1".into(),
                status: Some("Out sick".into()),
            }],
        });

        let board = engine.board_at(now());
        assert_eq!(board[0].status, LiveStatus::Manual(ManualStatus::OutSick));
    }

    #[test]
    fn non_ok_envelope_keeps_previous_overrides() {
        let mut engine = utc_engine();
        engine.update_roster(roster());
        engine.update_statuses(vec![RosterStatus {
            id: "e1".into(),
            status: Some("Focusing".into()),
        }]);

        engine.update_status_list(StatusListResponse {
            status: 0,
            data: vec![],
        });

        let board = engine.board_at(now());
        assert_eq!(board[0].status, LiveStatus::Manual(ManualStatus::Focusing));
    }

    #[test]
    fn summary_counts_every_bucket() {
        let mut engine = utc_engine();
        engine.update_roster(roster());
        engine.update_log_feed(feed());

        let summary = engine.summary_at(now());
        assert_eq!(summary.total, 3);
        assert_eq!(summary.active, 1);
        assert_eq!(summary.manual, 1);
        assert_eq!(summary.away, 1);
        assert_eq!(summary.offline, 0);
    }

    #[test]
    fn board_rows_serialize_for_clients() {
        let mut engine = utc_engine();
        engine.update_roster(roster());
        engine.update_log_feed(feed());

        let value = serde_json::to_value(engine.board_at(now())).expect("serialize board");
        assert_eq!(value[0]["status"], "Active");
        assert_eq!(value[1]["status"], "On leave");
        assert_eq!(value[1]["color"], "#e0675f");
    }
}
