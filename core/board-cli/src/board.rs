//! `pulseboard board`: render the live board from snapshot files.

use presence_core::{
    load_config, load_log_feed, load_roster, load_status_list, DataPaths, PresenceEngine,
};

pub fn run(paths: &DataPaths) {
    let engine = load_engine(paths);
    println!("Data directory: {}", paths.root().display());
    println!();
    render(&engine);
}

/// Builds an engine from whatever snapshots exist on disk. Missing files
/// simply leave that feed empty.
pub(crate) fn load_engine(paths: &DataPaths) -> PresenceEngine {
    let mut engine = PresenceEngine::with_config(load_config(paths));
    engine.update_roster(load_roster(&paths.roster_file()));
    engine.update_statuses(load_status_list(&paths.status_file()));
    engine.update_log_feed(load_log_feed(&paths.log_feed_file()));
    engine
}

pub(crate) fn render(engine: &PresenceEngine) {
    let board = engine.board();

    println!("── Live board ────────────────────────────────────────────");
    if board.is_empty() {
        println!("  (no employees in roster snapshot)");
    } else {
        for row in &board {
            println!(
                "  {} {:<24} {}",
                row.emoji,
                row.name.as_deref().unwrap_or(row.id.as_str()),
                row.label
            );
        }
    }
    println!();

    let summary = engine.summary();
    println!(
        "  {} on roster · {} active · {} away · {} offline · {} manual",
        summary.total, summary.active, summary.away, summary.offline, summary.manual
    );
}
