//! JSON world descriptions.
//!
//! ```json
//! {
//!   "dims": { "x_max": 2, "y_max": 2, "z_max": 1 },
//!   "fill": true,
//!   "blocks": [
//!     { "x": 1, "y": 1, "z": 0, "global_feature": "underworld" }
//!   ]
//! }
//! ```

use std::path::Path;

use mapreveal_common::{BlockCoord, FeatureKind, GameMode, HiddenMask, WorldDimensions};
use serde::{Deserialize, Serialize};

use crate::world::{Block, World};

/// Errors from loading a world fixture.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("block {coord} lies outside the {dims} map")]
    OutOfBounds {
        coord: BlockCoord,
        dims: WorldDimensions,
    },
}

/// Serializable description of a world.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldFixture {
    pub dims: WorldDimensions,
    #[serde(default)]
    pub mode: GameMode,
    /// Put a fully hidden, featureless block in every slot before applying `blocks`.
    #[serde(default)]
    pub fill: bool,
    #[serde(default)]
    pub blocks: Vec<BlockFixture>,
}

/// One block entry of a [`WorldFixture`]. Later entries replace earlier ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockFixture {
    #[serde(flatten)]
    pub coord: BlockCoord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_feature: Option<FeatureKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_feature: Option<FeatureKind>,
    #[serde(default)]
    pub unreadable_features: bool,
    /// Defaults to all hidden.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<HiddenMask>,
}

impl World {
    /// Build a world from a fixture.
    pub fn from_fixture(fixture: &WorldFixture) -> Result<Self, FixtureError> {
        let mut world = if fixture.fill {
            World::filled(fixture.dims)
        } else {
            World::new(fixture.dims)
        };
        world.set_mode(fixture.mode);

        for entry in &fixture.blocks {
            let mut block = Block::with_mask(entry.hidden.unwrap_or_default());
            if let Some(kind) = entry.local_feature {
                block = block.with_local_feature(kind);
            }
            if let Some(kind) = entry.global_feature {
                block = block.with_global_feature(kind);
            }
            if entry.unreadable_features {
                block = block.with_unreadable_features();
            }
            if !world.insert_block(entry.coord, block) {
                return Err(FixtureError::OutOfBounds {
                    coord: entry.coord,
                    dims: fixture.dims,
                });
            }
        }

        tracing::debug!(
            dims = %fixture.dims,
            blocks = world.block_count(),
            "world built from fixture"
        );
        Ok(world)
    }

    /// Load a world from a JSON fixture file.
    pub fn load_fixture(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let file = std::fs::File::open(path.as_ref())?;
        let fixture: WorldFixture = serde_json::from_reader(std::io::BufReader::new(file))?;
        Self::from_fixture(&fixture)
    }
}
