//! Timer-coalescing wrapper for push-based feed subscriptions.
//!
//! Realtime log feeds can push many snapshots per second while a tracker
//! flaps; re-rendering the board for each one is wasted work. A
//! [`CoalescedFeed`] keeps only the newest snapshot and releases it at a
//! fixed flush interval. The pure merge/resolve functions never see this
//! type — it sits between the subscription callback and the render loop.

use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

/// Producer half of a coalesced feed. Cheap to clone into a subscription
/// callback or a poller thread.
pub struct FeedSender<T>(Sender<T>);

impl<T> FeedSender<T> {
    /// Pushes a snapshot, replacing anything the consumer has not flushed
    /// yet. A hung-up consumer drops the push silently; the producer side of
    /// a dead feed has nothing useful to do with the error.
    pub fn push(&self, snapshot: T) {
        let _ = self.0.send(snapshot);
    }
}

impl<T> Clone for FeedSender<T> {
    fn clone(&self) -> Self {
        FeedSender(self.0.clone())
    }
}

/// Consumer half: the newest snapshot, at most once per flush interval.
pub struct CoalescedFeed<T> {
    rx: Receiver<T>,
    interval: Duration,
    last_flush: Option<Instant>,
    pending: Option<T>,
}

/// Creates a coalesced feed pair with the given flush interval.
pub fn coalesced_channel<T>(interval: Duration) -> (FeedSender<T>, CoalescedFeed<T>) {
    let (tx, rx) = channel();
    (
        FeedSender(tx),
        CoalescedFeed {
            rx,
            interval,
            last_flush: None,
            pending: None,
        },
    )
}

impl<T> CoalescedFeed<T> {
    /// Drains everything queued, keeping only the newest snapshot.
    fn drain(&mut self) {
        while let Ok(snapshot) = self.rx.try_recv() {
            self.pending = Some(snapshot);
        }
    }

    fn due(&self) -> bool {
        match self.last_flush {
            Some(last) => last.elapsed() >= self.interval,
            None => true,
        }
    }

    /// Non-blocking poll: the newest snapshot if one is buffered and the
    /// flush interval has elapsed. The first snapshot ever flushes
    /// immediately so a fresh board renders promptly.
    pub fn poll(&mut self) -> Option<T> {
        self.drain();
        if self.pending.is_none() || !self.due() {
            return None;
        }
        self.last_flush = Some(Instant::now());
        self.pending.take()
    }

    /// Blocks until a snapshot is due, or returns `None` once every sender
    /// is gone and nothing is buffered.
    pub fn recv(&mut self) -> Option<T> {
        loop {
            if let Some(snapshot) = self.poll() {
                return Some(snapshot);
            }

            let wait = match (&self.pending, self.last_flush) {
                // Something buffered: sleep only until its flush is due.
                (Some(_), Some(last)) => self.interval.saturating_sub(last.elapsed()),
                _ => self.interval,
            };

            match self.rx.recv_timeout(wait) {
                Ok(snapshot) => self.pending = Some(snapshot),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => return self.pending.take(),
            }
        }
    }
}
