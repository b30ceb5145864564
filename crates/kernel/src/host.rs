use mapreveal_common::{BlockCoord, FeatureKind, GameMode, HiddenMask, WorldDimensions};

/// Reports which mode the host simulation is in.
pub trait ModeQuery {
    fn game_mode(&self) -> GameMode;
}

/// Hidden-flag access to a single block.
pub trait TileBlock {
    fn hidden_mask(&self) -> HiddenMask;

    fn set_hidden_mask(&mut self, mask: &HiddenMask);

    /// Mark every tile visible.
    fn reveal_all(&mut self) {
        self.set_hidden_mask(&HiddenMask::all_visible());
    }
}

/// Access to the block grid of the loaded map.
pub trait MapAccess {
    type Block: TileBlock;

    /// Initialize map access. Returns false if the map cannot be read.
    fn start(&mut self) -> bool;

    fn size(&self) -> WorldDimensions;

    /// The block at `coord`, or `None` if that slot holds no block.
    fn block(&self, coord: BlockCoord) -> Option<&Self::Block>;

    fn block_mut(&mut self, coord: BlockCoord) -> Option<&mut Self::Block>;
}

/// Local and global features attached to one block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockFeatures {
    pub local: Option<FeatureKind>,
    pub global: Option<FeatureKind>,
}

/// Access to map feature data.
pub trait FeatureAccess {
    /// Initialize feature reading. Returns false if features are unavailable.
    fn start_features(&mut self) -> bool;

    /// Features of the block at `coord`; `None` when the data cannot be read.
    fn read_features(&self, coord: BlockCoord) -> Option<BlockFeatures>;
}

/// Control over the simulation's pause state.
pub trait PauseControl {
    fn set_paused(&mut self, paused: bool);

    fn is_paused(&self) -> bool;
}

/// Stops and restarts the host's concurrent stepping.
///
/// Prefer [`crate::Suspension`] over calling these directly.
pub trait SimulationControl {
    fn suspend(&mut self);

    fn resume(&mut self);
}

/// Everything the reveal engine needs from a host.
pub trait Host: ModeQuery + MapAccess + FeatureAccess + PauseControl + SimulationControl {}

impl<T> Host for T where T: ModeQuery + MapAccess + FeatureAccess + PauseControl + SimulationControl
{}
