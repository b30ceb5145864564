//! Reveal and restore traversals.
//!
//! Both run with the host suspended for their whole duration and check every
//! precondition before the first write.

use mapreveal_common::WorldDimensions;
use mapreveal_kernel::{Host, Suspension, TileBlock};
use mapreveal_persist::{BlockSnapshot, SnapshotStore};

use crate::classifier::is_safe;
use crate::error::RevealError;

/// Which blocks a reveal may expose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealMode {
    /// Skip blocks that touch hazardous features.
    #[default]
    Safe,
    /// Expose everything, underworld included. Forces the simulation to pause.
    Full,
}

impl RevealMode {
    pub fn excludes_hazards(self) -> bool {
        self == RevealMode::Safe
    }
}

/// Outcome of a successful reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealReport {
    pub mode: RevealMode,
    pub dims: WorldDimensions,
    /// Blocks snapshotted and cleared.
    pub revealed_blocks: usize,
    /// Blocks left alone because they were classified unsafe.
    pub skipped_blocks: usize,
    /// Tiles that went from hidden to visible.
    pub exposed_tiles: usize,
}

/// Outcome of a successful restore.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreReport {
    pub restored_blocks: usize,
    /// Tiles hidden again.
    pub hidden_tiles: usize,
}

/// Snapshot and clear every eligible block of the map.
///
/// `store` must be empty and not hold an open generation.
pub fn reveal<H: Host + ?Sized>(
    host: &mut H,
    store: &mut SnapshotStore,
    mode: RevealMode,
) -> Result<RevealReport, RevealError> {
    if store.is_open() || !store.is_empty() {
        return Err(RevealError::AlreadyRevealed);
    }

    let _span = tracing::info_span!("reveal", ?mode).entered();
    let mut host = Suspension::acquire(host);

    let found = host.game_mode();
    if !found.is_interactive() {
        return Err(RevealError::WrongMode { found });
    }
    if !host.start() {
        return Err(RevealError::MapInitFailed);
    }
    if mode.excludes_hazards() && !host.start_features() {
        return Err(RevealError::FeatureInitFailed);
    }

    let dims = host.size();
    if !store.begin(dims) {
        return Err(RevealError::AlreadyRevealed);
    }

    let mut report = RevealReport {
        mode,
        dims,
        revealed_blocks: 0,
        skipped_blocks: 0,
        exposed_tiles: 0,
    };

    for coord in dims.coords() {
        if host.block(coord).is_none() {
            continue;
        }
        if mode.excludes_hazards() && !is_safe(&*host, coord) {
            tracing::debug!(%coord, "leaving hazardous block hidden");
            report.skipped_blocks += 1;
            continue;
        }
        let Some(block) = host.block_mut(coord) else {
            continue;
        };
        let hidden = block.hidden_mask();
        if store.record(BlockSnapshot::new(coord, hidden)) {
            block.reveal_all();
            report.revealed_blocks += 1;
            report.exposed_tiles += hidden.hidden_count();
        }
    }

    if mode == RevealMode::Full {
        host.set_paused(true);
    }

    tracing::info!(
        dims = %dims,
        revealed = report.revealed_blocks,
        skipped = report.skipped_blocks,
        tiles = report.exposed_tiles,
        "map revealed"
    );
    Ok(report)
}

/// Write every snapshot in `store` back to the map, then clear the store.
///
/// Saved flags overwrite whatever the blocks hold now.
pub fn restore<H: Host + ?Sized>(
    host: &mut H,
    store: &mut SnapshotStore,
) -> Result<RestoreReport, RevealError> {
    let Some(recorded) = store.dimensions() else {
        return Err(RevealError::NothingToRevert);
    };

    let _span = tracing::info_span!("unreveal").entered();
    let mut host = Suspension::acquire(host);

    let found = host.game_mode();
    if !found.is_interactive() {
        return Err(RevealError::WrongMode { found });
    }
    if !host.start() {
        return Err(RevealError::MapInitFailed);
    }

    // Size equality is the only check that this is still the same map.
    let current = host.size();
    if current != recorded {
        return Err(RevealError::MapSizeMismatch { recorded, current });
    }
    if let Some(missing) = store.iter().find(|snap| host.block(snap.coord).is_none()) {
        return Err(RevealError::MissingBlock {
            coord: missing.coord,
        });
    }

    let mut report = RestoreReport::default();
    for snap in store.iter() {
        if let Some(block) = host.block_mut(snap.coord) {
            block.set_hidden_mask(&snap.hidden);
            report.restored_blocks += 1;
            report.hidden_tiles += snap.hidden.hidden_count();
        }
    }
    store.clear();

    tracing::info!(
        restored = report.restored_blocks,
        tiles = report.hidden_tiles,
        "map hidden"
    );
    Ok(report)
}
