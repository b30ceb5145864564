//! Map reveal: expose every hidden tile of the loaded map, remember exactly
//! what was hidden, and put it back on demand.
//!
//! # Invariants
//! - reveal followed by unreveal leaves every block's hidden flags bit-for-bit unchanged.
//! - A failed operation mutates nothing and leaves the reveal state as it was.
//! - In safe mode, blocks touching hazardous features are never exposed or snapshotted.
//! - While fully revealed, the simulation is kept paused on every tick.

pub mod classifier;
pub mod command;
pub mod engine;
pub mod error;
pub mod session;

pub use classifier::is_safe;
pub use command::{COMMANDS, Command, CommandOutput, CommandParseError, CommandSpec, CommandStatus};
pub use engine::{RestoreReport, RevealMode, RevealReport};
pub use error::RevealError;
pub use session::{RevealSession, RevealState, ToggleOutcome};

pub fn crate_info() -> &'static str {
    "mapreveal-reveal v0.1.0"
}
