//! Session module: persistence of minimal playback state.
//!
//! `PlaybackState` is written to a single JSON file on every relevant
//! mutation and once more at teardown, then read back defensively at the
//! next startup.

mod store;

pub use store::*;
