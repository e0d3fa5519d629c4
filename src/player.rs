//! Player module: the playback sequencer.
//!
//! `Player` owns the track list, the current-track reference and the
//! persisted playback state, and computes next/previous/random selection
//! with wraparound.

mod model;

pub use model::*;
