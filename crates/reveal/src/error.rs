use mapreveal_common::{BlockCoord, GameMode, WorldDimensions};

/// Reasons a reveal or unreveal was refused.
///
/// Every variant is detected before the map is touched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RevealError {
    #[error("map is already revealed or this is a different map")]
    AlreadyRevealed,
    #[error("only available in fortress mode (current mode: {found:?})")]
    WrongMode { found: GameMode },
    #[error("can't init map")]
    MapInitFailed,
    #[error("unable to read local features; can't reveal map safely")]
    FeatureInitFailed,
    #[error("there's nothing to revert")]
    NothingToRevert,
    #[error("the map is not of the same size (revealed at {recorded}, now {current})")]
    MapSizeMismatch {
        recorded: WorldDimensions,
        current: WorldDimensions,
    },
    #[error("block {coord} was revealed but no longer exists")]
    MissingBlock { coord: BlockCoord },
}
