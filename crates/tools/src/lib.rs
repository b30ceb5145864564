//! Developer Tooling: read-only inspection of the map and the reveal session.
//!
//! # Invariants
//! - Inspection never mutates the world or the session.

mod inspector;

pub use inspector::{MapInspector, MapSummary, SessionSummary};

pub fn crate_info() -> &'static str {
    "mapreveal-tools v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("tools"));
    }
}
