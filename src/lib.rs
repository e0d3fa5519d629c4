//! Playback core for a personal music-streaming client.
//!
//! The crate covers the client-side logic that does not belong to any
//! particular UI: parsing LRC lyric documents (`lyrics`), sequencing
//! playback over a remote track catalog (`player`), talking to that
//! catalog (`catalog`), persisting minimal playback state between
//! sessions (`session`) and loading configuration (`config`).

pub mod catalog;
pub mod config;
pub mod lyrics;
pub mod player;
pub mod session;
