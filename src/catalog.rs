//! Catalog module: track model and the remote catalog service.
//!
//! The catalog server owns the track list, play counts and favorites; this
//! module defines the wire model, the `CatalogService` seam, the blocking
//! HTTP client and the fire-and-forget play recorder.

mod model;
mod recorder;
mod remote;

pub use model::*;
pub use recorder::*;
pub use remote::*;
