//! Snapshot store: the hidden-state records that make a reveal reversible.
//!
//! # Invariants
//! - One generation at a time: populated by a single reveal, cleared by a single restore.
//! - A block coordinate appears at most once per generation.
//! - Transient; nothing here outlives the loaded world.

mod snapshot;

pub use snapshot::{BlockSnapshot, SnapshotStore};

pub fn crate_info() -> &'static str {
    "mapreveal-persist v0.1.0"
}
