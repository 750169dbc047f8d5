//! Board configuration and data paths.
//!
//! Settings live in `config.json` under the Pulseboard data directory
//! (`~/.pulseboard` by default). Loading falls back to defaults when the
//! file is missing or unreadable; tests inject a temp root.

use crate::error::{PresenceError, Result};
use crate::recency::ReferenceClock;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Central path configuration for Pulseboard data.
///
/// Production code uses `DataPaths::default()`; tests use
/// `DataPaths::with_root(temp_dir)` for isolation.
#[derive(Debug, Clone)]
pub struct DataPaths {
    root: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        let home = dirs::home_dir().expect("Could not find home directory");
        Self {
            root: home.join(".pulseboard"),
        }
    }
}

impl DataPaths {
    /// Creates paths rooted at a custom directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to config.json (board settings).
    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.json")
    }

    /// Path to roster.json (employee list snapshot).
    pub fn roster_file(&self) -> PathBuf {
        self.root.join("roster.json")
    }

    /// Path to roster-status.json (status override snapshot).
    pub fn status_file(&self) -> PathBuf {
        self.root.join("roster-status.json")
    }

    /// Path to log-feed.json (realtime tracking snapshot).
    pub fn log_feed_file(&self) -> PathBuf {
        self.root.join("log-feed.json")
    }

    /// Path to logs/ (CLI log files).
    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }
}

fn default_flush_interval_secs() -> u64 {
    2
}

/// Per-company board settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Company whose roster this board renders.
    #[serde(default)]
    pub company_id: Option<String>,
    /// Company timezone as minutes east of UTC, used when classifying
    /// whether a tracker stopped "today". `None` keeps the viewer's local
    /// clock, which is what the hosted dashboard always did.
    #[serde(default)]
    pub reference_utc_offset_minutes: Option<i32>,
    /// How often the realtime feed may trigger a re-render.
    #[serde(default = "default_flush_interval_secs")]
    pub flush_interval_secs: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            company_id: None,
            reference_utc_offset_minutes: None,
            flush_interval_secs: default_flush_interval_secs(),
        }
    }
}

impl BoardConfig {
    /// The clock "today" is measured on. Unset or out-of-range offsets fall
    /// back to the local clock.
    pub fn reference_clock(&self) -> ReferenceClock {
        self.reference_utc_offset_minutes
            .and_then(ReferenceClock::from_offset_minutes)
            .unwrap_or_default()
    }

    pub fn flush_interval(&self) -> Duration {
        Duration::from_secs(self.flush_interval_secs)
    }
}

/// Loads the board configuration, returning defaults if the file is missing
/// or unreadable.
pub fn load_config(paths: &DataPaths) -> BoardConfig {
    fs_err::read_to_string(paths.config_file())
        .ok()
        .and_then(|content| serde_json::from_str(&content).ok())
        .unwrap_or_default()
}

/// Strict variant for tooling that wants to surface a broken config instead
/// of silently rendering with defaults.
pub fn load_config_strict(paths: &DataPaths) -> Result<BoardConfig> {
    let path = paths.config_file();
    if !path.exists() {
        return Ok(BoardConfig::default());
    }

    let content = fs_err::read_to_string(&path).map_err(|source| PresenceError::Io {
        context: format!("reading {}", path.display()),
        source,
    })?;

    serde_json::from_str(&content).map_err(|err| PresenceError::ConfigMalformed {
        path,
        details: err.to_string(),
    })
}

/// Saves the board configuration to disk, creating the data directory if
/// needed.
pub fn save_config(paths: &DataPaths, config: &BoardConfig) -> Result<()> {
    fs_err::create_dir_all(paths.root()).map_err(|source| PresenceError::Io {
        context: format!("creating {}", paths.root().display()),
        source,
    })?;

    let content = serde_json::to_string_pretty(config).map_err(|source| PresenceError::Json {
        context: "serializing board config".to_string(),
        source,
    })?;

    fs_err::write(paths.config_file(), content).map_err(|source| {
        PresenceError::ConfigWriteFailed {
            path: paths.config_file(),
            source,
        }
    })
}
