//! `pulseboard watch`: follow the realtime feed file and re-render.
//!
//! A poller thread watches the feed file's mtime and pushes fresh snapshots
//! into a coalesced channel; the render loop flushes at the configured
//! interval, so a flapping tracker cannot redraw the terminal dozens of
//! times a second.

use crate::board;
use crate::CliError;
use chrono::Local;
use presence_core::{coalesced_channel, load_log_feed, DataPaths, PresenceEngine};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// How often the feed file's mtime is sampled.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub fn run(paths: &DataPaths, interval_secs: Option<u64>) -> Result<(), CliError> {
    let mut engine = board::load_engine(paths);
    let interval = interval_secs
        .map(Duration::from_secs)
        .unwrap_or_else(|| engine.config().flush_interval());

    let log_path = paths.log_feed_file();
    let (tx, mut feed) = coalesced_channel(interval);

    let poller_path = log_path.clone();
    thread::spawn(move || {
        let mut last_mtime = None;
        loop {
            let mtime = fs_err::metadata(&poller_path)
                .ok()
                .and_then(|meta| meta.modified().ok());
            if mtime.is_some() && mtime != last_mtime {
                last_mtime = mtime;
                debug!(path = %poller_path.display(), "feed file changed");
                tx.push(load_log_feed(&poller_path));
            }
            thread::sleep(POLL_INTERVAL);
        }
    });

    info!(path = %log_path.display(), interval_secs = interval.as_secs(), "watching feed");
    println!("Watching {} (Ctrl-C to stop)", log_path.display());
    println!();

    // First frame from whatever is on disk, even if the feed never moves.
    render_frame(&engine);

    while let Some(snapshot) = feed.recv() {
        engine.update_log_feed(snapshot);
        render_frame(&engine);
    }

    // recv only returns None when the poller thread died.
    Err(CliError::WatcherStopped)
}

fn render_frame(engine: &PresenceEngine) {
    println!("as of {}", Local::now().format("%H:%M:%S"));
    board::render(engine);
    println!();
}
