//! # presence-core
//!
//! Core library for Pulseboard, providing the shared presence logic for all
//! clients (web dashboard, TUI, internal tools).
//!
//! ## Design Principles
//!
//! - **Synchronous**: No async runtime dependency. Clients can wrap with
//!   async if needed.
//! - **Pure core**: Merging and resolution only read their arguments and one
//!   constant lookup table. Fetching rosters and subscribing to the realtime
//!   feed is the surrounding client's job; this crate sees snapshots.
//! - **Graceful degradation**: Missing or malformed feed data renders an
//!   employee as Offline, never an error.
//! - **Single source of truth**: All clients share these types and logic.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use presence_core::PresenceEngine;
//!
//! let mut engine = PresenceEngine::new();
//! engine.update_roster(roster);
//! engine.update_log_feed(feed);
//! for row in engine.board() {
//!     println!("{} {} {}", row.emoji, row.name.as_deref().unwrap_or("?"), row.label);
//! }
//! ```

pub mod config;
pub mod debounce;
pub mod engine;
pub mod error;
pub mod merge;
pub mod recency;
pub mod resolve;
pub mod snapshot;
pub mod status;
pub mod types;

pub use config::{load_config, load_config_strict, save_config, BoardConfig, DataPaths};
pub use debounce::{coalesced_channel, CoalescedFeed, FeedSender};
pub use engine::{BoardSummary, EmployeeView, PresenceEngine};
pub use error::{PresenceError, Result};
pub use merge::{combine_employee, combine_roster};
pub use recency::{is_today, is_today_at, parse_rfc3339, ReferenceClock};
pub use resolve::{live_status, live_status_at};
pub use snapshot::{load_log_feed, load_roster, load_status_list};
pub use status::{display_for, StatusEntry};
pub use types::{CompositeEmployee, LiveStatus, ManualStatus};
