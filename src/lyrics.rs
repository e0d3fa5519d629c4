//! Lyrics module: LRC parsing and active-line lookup.
//!
//! The parser turns a raw timestamped lyrics document into an ordered
//! sequence of display lines; `active_index` picks the line to highlight
//! for a given playback position.

mod parse;

pub use parse::*;

#[cfg(test)]
mod tests;
