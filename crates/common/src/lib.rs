//! Shared value types: block coordinates, world extents, per-block hidden masks,
//! feature and game-mode tags.

mod types;

pub use types::{
    BLOCK_EDGE, BlockCoord, CoordIter, FeatureKind, GameMode, HiddenMask, TILES_PER_BLOCK,
    WorldDimensions,
};
