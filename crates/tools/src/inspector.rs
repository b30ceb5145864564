use mapreveal_common::{GameMode, TILES_PER_BLOCK, WorldDimensions};
use mapreveal_kernel::{MapAccess, ModeQuery, PauseControl, TileBlock, World};
use mapreveal_reveal::{RevealSession, RevealState};

/// Map and session inspector for developer tooling.
pub struct MapInspector;

impl MapInspector {
    /// Produce a summary of the map's visibility.
    pub fn summary(world: &World) -> MapSummary {
        let hidden_tiles = world
            .blocks()
            .values()
            .map(|b| b.hidden_mask().hidden_count())
            .sum();
        MapSummary {
            dims: world.size(),
            blocks: world.block_count(),
            hidden_tiles,
            total_tiles: world.block_count() * TILES_PER_BLOCK,
            mode: world.game_mode(),
            paused: world.is_paused(),
            tick: world.tick(),
        }
    }

    /// Produce a summary of a reveal session.
    pub fn session(session: &RevealSession) -> SessionSummary {
        SessionSummary {
            state: session.state(),
            snapshots: session.store().len(),
            recorded_dims: session.store().dimensions(),
        }
    }
}

/// Visibility summary of a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapSummary {
    pub dims: WorldDimensions,
    /// Blocks present in the grid.
    pub blocks: usize,
    pub hidden_tiles: usize,
    pub total_tiles: usize,
    pub mode: GameMode,
    pub paused: bool,
    pub tick: u64,
}

impl std::fmt::Display for MapSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Map: {} blocks={} hidden={}/{} mode={:?} paused={} tick={}",
            self.dims,
            self.blocks,
            self.hidden_tiles,
            self.total_tiles,
            self.mode,
            self.paused,
            self.tick
        )
    }
}

/// State of a reveal session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub state: RevealState,
    pub snapshots: usize,
    pub recorded_dims: Option<WorldDimensions>,
}

impl std::fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Reveal: state={:?} snapshots={}", self.state, self.snapshots)?;
        if let Some(dims) = self.recorded_dims {
            write!(f, " recorded={dims}")?;
        }
        Ok(())
    }
}
