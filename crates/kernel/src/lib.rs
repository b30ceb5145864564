//! World Kernel: the contracts the reveal engine needs from its host simulation,
//! plus an in-memory block world implementing all of them.
//!
//! # Invariants
//! - Map mutation only happens while the host simulation is suspended.
//! - Suspension is scoped: every acquired [`Suspension`] resumes the host on drop.

pub mod fixture;
pub mod host;
pub mod suspend;
pub mod world;

pub use fixture::{BlockFixture, FixtureError, WorldFixture};
pub use host::{
    BlockFeatures, FeatureAccess, Host, MapAccess, ModeQuery, PauseControl, SimulationControl,
    TileBlock,
};
pub use suspend::Suspension;
pub use world::{Block, World, WorldEvent};

pub fn crate_info() -> &'static str {
    "mapreveal-kernel v0.1.0"
}
