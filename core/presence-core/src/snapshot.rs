//! Feed snapshot loading for clients that read from disk.
//!
//! Loaders never fail: a missing or corrupt snapshot is an empty feed. The
//! board would rather show everyone Offline for one refresh than crash on a
//! half-written file.

use pulseboard_roster_protocol::{Employee, LogFeed, RosterStatus, StatusListResponse};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Loads the employee roster.
///
/// Accepts both the bare-array export and the `{status, data}` envelope some
/// backend endpoints wrap lists in.
pub fn load_roster(path: &Path) -> Vec<Employee> {
    let content = match fs_err::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Vec::new(),
    };

    if let Ok(list) = serde_json::from_str::<Vec<Employee>>(&content) {
        debug!(path = %path.display(), count = list.len(), "roster snapshot loaded");
        return list;
    }

    #[derive(Deserialize)]
    struct Wrapped {
        #[serde(default)]
        data: Vec<Employee>,
    }

    match serde_json::from_str::<Wrapped>(&content) {
        Ok(wrapped) => {
            debug!(path = %path.display(), count = wrapped.data.len(), "roster snapshot loaded (enveloped)");
            wrapped.data
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "roster snapshot unreadable; treating as empty");
            Vec::new()
        }
    }
}

/// Loads roster-status overrides.
///
/// A non-ok envelope contributes nothing: a failed status fetch must not
/// blank statuses the roster itself still carries.
pub fn load_status_list(path: &Path) -> Vec<RosterStatus> {
    let content = match fs_err::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Vec::new(),
    };

    match serde_json::from_str::<StatusListResponse>(&content) {
        Ok(response) if response.is_ok() => response.data,
        Ok(response) => {
            warn!(path = %path.display(), status = response.status, "status snapshot envelope not ok; ignoring");
            Vec::new()
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "status snapshot unreadable; treating as empty");
            Vec::new()
        }
    }
}

/// Loads a realtime log feed snapshot.
pub fn load_log_feed(path: &Path) -> LogFeed {
    let content = match fs_err::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return LogFeed::new(),
    };

    match serde_json::from_str::<LogFeed>(&content) {
        Ok(feed) => feed,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "log feed snapshot unreadable; treating as empty");
            LogFeed::new()
        }
    }
}
