use std::path::PathBuf;
use std::sync::Arc;

use rand::RngExt;
use tracing::{debug, warn};

use crate::catalog::{CatalogError, CatalogService, HttpCatalog, PlayRecorder, Track};
use crate::config::Settings;
use crate::session::{PlaybackState, SessionStore, resolve_state_path};

/// The playback sequencer.
///
/// Single-writer: all mutations happen through `&mut self` from whatever
/// drives the UI. The current track is held as a snapshot and its position
/// is re-derived by id lookup against the live list on every `next`/`prev`,
/// so list mutations can never leave a stale index pointing at the wrong
/// track.
pub struct Player {
    tracks: Vec<Track>,
    state: PlaybackState,
    playing: bool,
    catalog: Arc<dyn CatalogService>,
    recorder: PlayRecorder,
    store: SessionStore,
}

impl Player {
    /// Create a player over `catalog`, persisting state through `store`,
    /// starting from `initial` (configured defaults, before any restore).
    pub fn new(catalog: Arc<dyn CatalogService>, store: SessionStore, initial: PlaybackState) -> Self {
        let recorder = PlayRecorder::spawn(catalog.clone());
        Self {
            tracks: Vec::new(),
            state: initial,
            playing: false,
            catalog,
            recorder,
            store,
        }
    }

    /// Wire a player from loaded settings: HTTP catalog, resolved session
    /// path, configured playback defaults.
    pub fn from_settings(settings: &Settings) -> Result<Self, CatalogError> {
        let catalog = Arc::new(HttpCatalog::new(&settings.catalog)?);
        let path = resolve_state_path(settings.session.state_path.as_deref())
            .unwrap_or_else(|| PathBuf::from("vivace-session.json"));
        let initial = PlaybackState {
            volume: settings.playback.volume,
            rate: settings.playback.rate,
            ..PlaybackState::default()
        };
        Ok(Self::new(catalog, SessionStore::new(path), initial))
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.state.current_track.as_ref()
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn volume(&self) -> f64 {
        self.state.volume
    }

    pub fn rate(&self) -> f64 {
        self.state.rate
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.state.elapsed_seconds
    }

    /// Replace the track list.
    pub fn set_tracks(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
    }

    /// Re-fetch the track list from the catalog. On failure the existing
    /// list is kept and the error is logged.
    pub fn refresh_tracks(&mut self) {
        match self.catalog.fetch_track_list() {
            Ok(tracks) => {
                debug!(count = tracks.len(), "refreshed track list");
                self.tracks = tracks;
            }
            Err(e) => warn!(error = %e, "failed to fetch track list"),
        }
    }

    /// Start playing `track`: it becomes the current track, elapsed time
    /// resets and a play record is enqueued fire-and-forget.
    pub fn play(&mut self, track: Track) {
        self.recorder.record(track.id);
        self.state.current_track = Some(track);
        self.state.elapsed_seconds = 0.0;
        self.playing = true;
        self.persist();
    }

    /// Advance one position in the list, wrapping past the end to the head.
    ///
    /// No-op when idle or the list is empty. When the current id has
    /// vanished from the list (it changed underneath), playback restarts at
    /// the head.
    pub fn next(&mut self) {
        if self.state.current_track.is_none() || self.tracks.is_empty() {
            return;
        }
        let idx = match self.current_position() {
            Some(p) => (p + 1) % self.tracks.len(),
            None => 0,
        };
        self.play(self.tracks[idx].clone());
    }

    /// Step back one position, wrapping below zero to the last index.
    /// Symmetric with `next`: a vanished current id lands on the tail.
    pub fn prev(&mut self) {
        if self.state.current_track.is_none() || self.tracks.is_empty() {
            return;
        }
        let idx = match self.current_position() {
            Some(0) | None => self.tracks.len() - 1,
            Some(p) => p - 1,
        };
        self.play(self.tracks[idx].clone());
    }

    /// Play a uniformly random track from the list. No-op on an empty list.
    pub fn play_random(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        let idx = rand::rng().random_range(0..self.tracks.len());
        self.play(self.tracks[idx].clone());
    }

    /// Pause without losing the current track.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Resume, if there is a current track to resume.
    pub fn resume(&mut self) {
        if self.state.current_track.is_some() {
            self.playing = true;
        }
    }

    /// Set the output volume, clamped to `[0.0, 1.0]`.
    pub fn set_volume(&mut self, volume: f64) {
        if !volume.is_finite() {
            return;
        }
        self.state.volume = volume.clamp(0.0, 1.0);
        self.persist();
    }

    /// Set the playback rate; non-positive or non-finite values are ignored.
    pub fn set_rate(&mut self, rate: f64) {
        if !rate.is_finite() || rate <= 0.0 {
            return;
        }
        self.state.rate = rate;
        self.persist();
    }

    /// Track the playback position. In-memory only: elapsed time is
    /// captured by the teardown flush, not persisted per tick.
    pub fn set_elapsed(&mut self, seconds: f64) {
        if seconds.is_finite() && seconds >= 0.0 {
            self.state.elapsed_seconds = seconds;
        }
    }

    /// Toggle the favorite flag of `track` against the catalog.
    ///
    /// On a confirmed response the returned flag is written into all three
    /// places that may hold this track: the argument, the current-track
    /// snapshot and the matching list entry. On error nothing changes and
    /// `None` is returned; there is no optimistic update.
    pub fn toggle_favorite(&mut self, track: &mut Track) -> Option<bool> {
        match self.catalog.toggle_favorite(track.id) {
            Ok(toggle) => {
                let flag = toggle.is_favorited;
                track.favorite = flag;

                let mut snapshot_changed = false;
                if let Some(current) = self.state.current_track.as_mut() {
                    if current.id == track.id {
                        current.favorite = flag;
                        snapshot_changed = true;
                    }
                }
                if let Some(entry) = self.tracks.iter_mut().find(|t| t.id == track.id) {
                    entry.favorite = flag;
                }

                debug!(track_id = track.id, favorited = flag, message = %toggle.message, "favorite toggled");
                if snapshot_changed {
                    // Keep the stored current-track snapshot accurate.
                    self.persist();
                }
                Some(flag)
            }
            Err(e) => {
                warn!(track_id = track.id, error = %e, "failed to toggle favorite");
                None
            }
        }
    }

    /// Merge persisted state into the current state. Call once at startup;
    /// playback resumes paused.
    pub fn restore(&mut self) {
        self.state = self.store.load(self.state.clone());
        self.playing = false;
    }

    /// Write the full state once more (covers elapsed-time changes that are
    /// not persisted per tick).
    pub fn flush(&self) {
        self.persist();
    }

    /// Flush state and stop the play-recording worker.
    pub fn shutdown(&self) {
        self.flush();
        self.recorder.shutdown();
    }

    fn current_position(&self) -> Option<usize> {
        let id = self.state.current_track.as_ref()?.id;
        self.tracks.iter().position(|t| t.id == id)
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.state) {
            warn!(path = %self.store.path().display(), error = %e, "failed to persist playback state");
        }
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        // Last-chance flush for hosts that never call `shutdown`.
        self.shutdown();
    }
}
