//! Fire-and-forget play recording.
//!
//! `play()` must return immediately after updating in-memory state, so the
//! play-count increment runs on a worker thread fed through a channel.
//! Failures are logged and swallowed; recording plays is telemetry, not
//! part of the playback contract.

use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use super::remote::CatalogService;

#[derive(Debug)]
enum RecorderCmd {
    /// Record one play of the given track id.
    Record(u64),
    /// Stop the worker after draining already-queued records.
    Quit,
}

/// Handle to the play-recording worker thread.
pub struct PlayRecorder {
    tx: Sender<RecorderCmd>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl PlayRecorder {
    /// Spawn the worker against the given catalog.
    pub fn spawn(catalog: Arc<dyn CatalogService>) -> Self {
        let (tx, rx) = mpsc::channel::<RecorderCmd>();

        let handle = thread::spawn(move || {
            while let Ok(cmd) = rx.recv() {
                match cmd {
                    RecorderCmd::Record(id) => match catalog.record_play(id) {
                        Ok(()) => debug!(track_id = id, "recorded play"),
                        Err(e) => warn!(track_id = id, error = %e, "failed to record play"),
                    },
                    RecorderCmd::Quit => break,
                }
            }
        });

        Self {
            tx,
            join: Mutex::new(Some(handle)),
        }
    }

    /// Enqueue a play record and return immediately.
    pub fn record(&self, track_id: u64) {
        let _ = self.tx.send(RecorderCmd::Record(track_id));
    }

    /// Stop the worker, letting queued records finish first.
    pub fn shutdown(&self) {
        let _ = self.tx.send(RecorderCmd::Quit);

        if let Ok(mut join) = self.join.lock() {
            if let Some(handle) = join.take() {
                let _ = handle.join();
            }
        }
    }
}
