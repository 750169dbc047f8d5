//! `pulseboard check`: validation harness for feed snapshots.
//!
//! The board loaders deliberately swallow feed problems; this subcommand is
//! where those problems become visible. It re-reads each snapshot strictly,
//! runs the protocol validators, and reports everything it finds.

use crate::CliError;
use presence_core::{load_config_strict, DataPaths};
use pulseboard_roster_protocol::{
    validate_log_feed, validate_roster, validate_status_list, Employee, FeedIssue, LogFeed,
    StatusListResponse,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Serialize)]
struct ReportIssue {
    feed: &'static str,
    entry: String,
    code: String,
    message: String,
}

impl ReportIssue {
    fn from_feed(feed: &'static str, issue: FeedIssue) -> Self {
        Self {
            feed,
            entry: issue.entry,
            code: issue.code.to_string(),
            message: issue.message,
        }
    }

    fn file_problem(feed: &'static str, code: &str, message: String) -> Self {
        Self {
            feed,
            entry: "-".to_string(),
            code: code.to_string(),
            message,
        }
    }
}

#[derive(Debug, Serialize)]
struct CheckReport {
    roster_count: usize,
    status_count: usize,
    log_count: usize,
    issues: Vec<ReportIssue>,
}

pub fn run(paths: &DataPaths, json: bool) -> Result<bool, CliError> {
    // A broken config is a hard failure: the board would silently render
    // with defaults and nobody would know why "today" moved.
    let config = load_config_strict(paths)?;

    let mut issues = Vec::new();

    let roster = check_roster(&paths.roster_file(), &mut issues);
    issues.extend(
        validate_roster(&roster)
            .into_iter()
            .map(|issue| ReportIssue::from_feed("roster", issue)),
    );

    let status_list = check_status_list(&paths.status_file(), &mut issues);
    issues.extend(
        validate_status_list(&status_list)
            .into_iter()
            .map(|issue| ReportIssue::from_feed("roster-status", issue)),
    );

    let feed = check_log_feed(&paths.log_feed_file(), &mut issues);
    issues.extend(
        validate_log_feed(&feed)
            .into_iter()
            .map(|issue| ReportIssue::from_feed("log-feed", issue)),
    );

    let report = CheckReport {
        roster_count: roster.len(),
        status_count: status_list.data.len(),
        log_count: feed.len(),
        issues,
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        print_report(paths, &config, &report);
    }

    Ok(report.issues.is_empty())
}

fn print_report(paths: &DataPaths, config: &presence_core::BoardConfig, report: &CheckReport) {
    println!("Data directory: {}", paths.root().display());
    let clock = match config.reference_utc_offset_minutes {
        Some(minutes) => format!("company clock UTC{:+03}:{:02}", minutes / 60, (minutes % 60).abs()),
        None => "viewer-local clock".to_string(),
    };
    println!("Config: {clock}, flush every {}s", config.flush_interval_secs);
    println!();

    println!("── Feeds ─────────────────────────────────────────────────");
    println!("  roster         {} records", report.roster_count);
    println!("  roster-status  {} records", report.status_count);
    println!("  log-feed       {} entries", report.log_count);
    println!();

    println!("── Issues ────────────────────────────────────────────────");
    if report.issues.is_empty() {
        println!("  (none)");
    } else {
        for issue in &report.issues {
            println!("  {}/{} {}: {}", issue.feed, issue.entry, issue.code, issue.message);
        }
    }
}

fn read_optional(path: &Path, feed: &'static str, issues: &mut Vec<ReportIssue>) -> Option<String> {
    if !path.exists() {
        issues.push(ReportIssue::file_problem(
            feed,
            "missing_file",
            format!("{} does not exist; this feed is empty", path.display()),
        ));
        return None;
    }
    match fs_err::read_to_string(path) {
        Ok(content) => Some(content),
        Err(err) => {
            issues.push(ReportIssue::file_problem(feed, "unreadable", err.to_string()));
            None
        }
    }
}

fn check_roster(path: &Path, issues: &mut Vec<ReportIssue>) -> Vec<Employee> {
    let Some(content) = read_optional(path, "roster", issues) else {
        return Vec::new();
    };

    if let Ok(list) = serde_json::from_str::<Vec<Employee>>(&content) {
        return list;
    }

    #[derive(Deserialize)]
    struct Wrapped {
        #[serde(default)]
        data: Vec<Employee>,
    }

    match serde_json::from_str::<Wrapped>(&content) {
        Ok(wrapped) => wrapped.data,
        Err(err) => {
            issues.push(ReportIssue::file_problem("roster", "unparsable", err.to_string()));
            Vec::new()
        }
    }
}

fn check_status_list(path: &Path, issues: &mut Vec<ReportIssue>) -> StatusListResponse {
    let Some(content) = read_optional(path, "roster-status", issues) else {
        return StatusListResponse { status: 1, data: Vec::new() };
    };

    match serde_json::from_str(&content) {
        Ok(response) => response,
        Err(err) => {
            issues.push(ReportIssue::file_problem(
                "roster-status",
                "unparsable",
                err.to_string(),
            ));
            StatusListResponse { status: 1, data: Vec::new() }
        }
    }
}

fn check_log_feed(path: &Path, issues: &mut Vec<ReportIssue>) -> LogFeed {
    let Some(content) = read_optional(path, "log-feed", issues) else {
        return LogFeed::new();
    };

    match serde_json::from_str(&content) {
        Ok(feed) => feed,
        Err(err) => {
            issues.push(ReportIssue::file_problem("log-feed", "unparsable", err.to_string()));
            LogFeed::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_data_dir_reports_missing_feeds() {
        let dir = TempDir::new().unwrap();
        let paths = DataPaths::with_root(dir.path());

        let clean = run(&paths, true).expect("check runs");
        assert!(!clean);
    }

    #[test]
    fn healthy_feeds_pass() {
        let dir = TempDir::new().unwrap();
        let paths = DataPaths::with_root(dir.path());
        fs_err::create_dir_all(paths.root()).unwrap();
        fs_err::write(paths.roster_file(), r#"[{"_id": "e1", "name": "Asha"}]"#).unwrap();
        fs_err::write(
            paths.status_file(),
            r#"{"status": 1, "data": [{"id": "e1", "status": "On leave"}]}"#,
        )
        .unwrap();
        fs_err::write(
            paths.log_feed_file(),
            r#"{"e1": {"latestLog": {"status": true, "timestamp": "2026-08-06T09:00:00Z"}}}"#,
        )
        .unwrap();

        let clean = run(&paths, true).expect("check runs");
        assert!(clean);
    }

    #[test]
    fn malformed_config_is_a_hard_failure() {
        let dir = TempDir::new().unwrap();
        let paths = DataPaths::with_root(dir.path());
        fs_err::create_dir_all(paths.root()).unwrap();
        fs_err::write(paths.config_file(), "{oops").unwrap();

        assert!(run(&paths, true).is_err());
    }

    #[test]
    fn duplicate_roster_ids_are_reported() {
        let dir = TempDir::new().unwrap();
        let paths = DataPaths::with_root(dir.path());
        fs_err::create_dir_all(paths.root()).unwrap();
        fs_err::write(paths.roster_file(), r#"[{"_id": "a"}, {"_id": "a"}]"#).unwrap();
        fs_err::write(paths.status_file(), r#"{"status": 1, "data": []}"#).unwrap();
        fs_err::write(paths.log_feed_file(), "{}").unwrap();

        let clean = run(&paths, true).expect("check runs");
        assert!(!clean);
    }
}
