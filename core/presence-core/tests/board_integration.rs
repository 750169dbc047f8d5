//! End-to-end board tests: raw feed payloads in, resolved board out.

use chrono::{TimeZone, Utc};
use presence_core::{
    load_log_feed, load_roster, load_status_list, BoardConfig, DataPaths, LiveStatus,
    ManualStatus, PresenceEngine,
};
use tempfile::TempDir;

fn utc_config() -> BoardConfig {
    BoardConfig {
        reference_utc_offset_minutes: Some(0),
        ..BoardConfig::default()
    }
}

#[test]
fn snapshot_files_drive_a_full_board() {
    let dir = TempDir::new().unwrap();
    let paths = DataPaths::with_root(dir.path());

    fs_err::write(
        paths.roster_file(),
        r#"[
            {"_id": "e1", "name": "Asha", "isActive": true, "designation": "QA"},
            {"_id": 2, "name": "Jonas", "status": "Do not disturb"},
            {"_id": "e3", "name": "Mira", "status": "Offline"},
            {"_id": "e4", "name": "Priya"}
        ]"#,
    )
    .unwrap();

    fs_err::write(
        paths.status_file(),
        r#"{"status": 1, "data": [{"id": "e3", "status": "Working remotely"}]}"#,
    )
    .unwrap();

    fs_err::write(
        paths.log_feed_file(),
        r#"{
            "e1": {"latestLog": {"status": true, "timestamp": "2026-08-06T11:58:00Z"}},
            "2":  {"latestLog": {"status": false, "timestamp": "2026-08-06T09:15:00Z"}},
            "e4": {"latestLog": {"status": false, "timestamp": "2026-08-04T17:00:00Z"}}
        }"#,
    )
    .unwrap();

    let mut engine = PresenceEngine::with_config(utc_config());
    engine.update_roster(load_roster(&paths.roster_file()));
    engine.update_statuses(load_status_list(&paths.status_file()));
    engine.update_log_feed(load_log_feed(&paths.log_feed_file()));

    let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
    let board = engine.board_at(now);
    assert_eq!(board.len(), 4);

    // e1: tracking right now.
    assert_eq!(board[0].status, LiveStatus::Active);

    // Numeric wire id "2": manual status beats the stopped-today log.
    assert_eq!(board[1].id, "2");
    assert_eq!(board[1].status, LiveStatus::Manual(ManualStatus::DoNotDisturb));

    // e3: override replaced the stored "Offline" string.
    assert_eq!(board[2].status, LiveStatus::Manual(ManualStatus::WorkingRemotely));

    // e4: stopped two days ago.
    assert_eq!(board[3].status, LiveStatus::Offline);

    let summary = engine.summary_at(now);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.active, 1);
    assert_eq!(summary.manual, 2);
    assert_eq!(summary.offline, 1);
    assert_eq!(summary.away, 0);
}

#[test]
fn missing_snapshots_render_everyone_offline() {
    let dir = TempDir::new().unwrap();
    let paths = DataPaths::with_root(dir.path());

    fs_err::write(paths.roster_file(), r#"[{"_id": "e1"}, {"_id": "e2"}]"#).unwrap();

    let mut engine = PresenceEngine::with_config(utc_config());
    engine.update_roster(load_roster(&paths.roster_file()));
    engine.update_statuses(load_status_list(&paths.status_file()));
    engine.update_log_feed(load_log_feed(&paths.log_feed_file()));

    let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
    for row in engine.board_at(now) {
        assert_eq!(row.status, LiveStatus::Offline);
        assert_eq!(row.emoji, "⚪");
    }
}

#[test]
fn board_is_stable_across_repeated_renders() {
    let mut engine = PresenceEngine::with_config(utc_config());
    engine.update_roster(
        serde_json::from_str(r#"[{"_id": "e1", "status": "Focusing"}]"#).unwrap(),
    );

    let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
    let first = engine.board_at(now);
    let second = engine.board_at(now);
    assert_eq!(first, second);
}
