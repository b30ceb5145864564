use std::collections::BTreeMap;

use mapreveal_common::{BlockCoord, FeatureKind, GameMode, HiddenMask, WorldDimensions};

use crate::host::{
    BlockFeatures, FeatureAccess, MapAccess, ModeQuery, PauseControl, SimulationControl, TileBlock,
};

/// A host-visible side effect recorded by the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldEvent {
    Suspended,
    Resumed,
    /// Pause state was written (even if unchanged).
    PauseSet { paused: bool },
    /// Simulation advanced one tick.
    Stepped { tick: u64 },
    /// Mutable access to a block was handed out.
    BlockMutated { coord: BlockCoord, suspended: bool },
}

/// One 16x16 block of the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    hidden: HiddenMask,
    local_feature: Option<FeatureKind>,
    global_feature: Option<FeatureKind>,
    features_readable: bool,
}

impl Block {
    /// A block with every tile hidden and no features.
    pub fn hidden() -> Self {
        Self::with_mask(HiddenMask::all_hidden())
    }

    pub fn with_mask(hidden: HiddenMask) -> Self {
        Self {
            hidden,
            local_feature: None,
            global_feature: None,
            features_readable: true,
        }
    }

    pub fn with_local_feature(mut self, kind: FeatureKind) -> Self {
        self.local_feature = Some(kind);
        self
    }

    pub fn with_global_feature(mut self, kind: FeatureKind) -> Self {
        self.global_feature = Some(kind);
        self
    }

    /// Make feature reads for this block fail.
    pub fn with_unreadable_features(mut self) -> Self {
        self.features_readable = false;
        self
    }

    pub fn local_feature(&self) -> Option<FeatureKind> {
        self.local_feature
    }

    pub fn global_feature(&self) -> Option<FeatureKind> {
        self.global_feature
    }
}

impl Default for Block {
    fn default() -> Self {
        Self::hidden()
    }
}

impl TileBlock for Block {
    fn hidden_mask(&self) -> HiddenMask {
        self.hidden
    }

    fn set_hidden_mask(&mut self, mask: &HiddenMask) {
        self.hidden = *mask;
    }
}

/// In-memory host simulation: a sparse block grid with mode, pause and
/// suspension state.
///
/// Uses BTreeMap so block iteration follows coordinate order.
#[derive(Debug, Clone)]
pub struct World {
    dims: WorldDimensions,
    blocks: BTreeMap<BlockCoord, Block>,
    mode: GameMode,
    paused: bool,
    tick: u64,
    suspend_depth: u32,
    map_available: bool,
    features_available: bool,
    event_log: Vec<WorldEvent>,
}

impl World {
    /// An empty map of the given extent in fortress mode, unpaused.
    pub fn new(dims: WorldDimensions) -> Self {
        Self {
            dims,
            blocks: BTreeMap::new(),
            mode: GameMode::Fortress,
            paused: false,
            tick: 0,
            suspend_depth: 0,
            map_available: true,
            features_available: true,
            event_log: Vec::new(),
        }
    }

    /// A map where every slot holds a fully hidden block.
    pub fn filled(dims: WorldDimensions) -> Self {
        let mut world = Self::new(dims);
        for coord in dims.coords() {
            world.blocks.insert(coord, Block::hidden());
        }
        world
    }

    /// Place a block. Returns false if `coord` is outside the map.
    pub fn insert_block(&mut self, coord: BlockCoord, block: Block) -> bool {
        if !self.dims.contains(coord) {
            return false;
        }
        self.blocks.insert(coord, block);
        true
    }

    pub fn remove_block(&mut self, coord: BlockCoord) -> Option<Block> {
        self.blocks.remove(&coord)
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
    }

    /// Make `start()` fail, as if the map could not be read.
    pub fn set_map_available(&mut self, available: bool) {
        self.map_available = available;
    }

    /// Make `start_features()` fail.
    pub fn set_features_available(&mut self, available: bool) {
        self.features_available = available;
    }

    /// Change the map extent, as if a different map had been loaded.
    /// Blocks outside the new extent are dropped.
    pub fn resize(&mut self, dims: WorldDimensions) {
        self.dims = dims;
        self.blocks.retain(|coord, _| dims.contains(*coord));
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn is_suspended(&self) -> bool {
        self.suspend_depth > 0
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn blocks(&self) -> &BTreeMap<BlockCoord, Block> {
        &self.blocks
    }

    /// Hidden masks of every present block, keyed by coordinate.
    pub fn hidden_masks(&self) -> BTreeMap<BlockCoord, HiddenMask> {
        self.blocks
            .iter()
            .map(|(coord, block)| (*coord, block.hidden))
            .collect()
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[WorldEvent] {
        &self.event_log
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Advance the simulation by one tick.
    ///
    /// Does nothing while paused or suspended. Returns whether time advanced.
    pub fn step(&mut self) -> bool {
        if self.paused || self.is_suspended() {
            return false;
        }
        self.tick += 1;
        self.event_log.push(WorldEvent::Stepped { tick: self.tick });
        true
    }
}

impl ModeQuery for World {
    fn game_mode(&self) -> GameMode {
        self.mode
    }
}

impl MapAccess for World {
    type Block = Block;

    fn start(&mut self) -> bool {
        self.map_available
    }

    fn size(&self) -> WorldDimensions {
        self.dims
    }

    fn block(&self, coord: BlockCoord) -> Option<&Block> {
        self.blocks.get(&coord)
    }

    fn block_mut(&mut self, coord: BlockCoord) -> Option<&mut Block> {
        let block = self.blocks.get_mut(&coord)?;
        self.event_log.push(WorldEvent::BlockMutated {
            coord,
            suspended: self.suspend_depth > 0,
        });
        Some(block)
    }
}

impl FeatureAccess for World {
    fn start_features(&mut self) -> bool {
        self.features_available
    }

    fn read_features(&self, coord: BlockCoord) -> Option<BlockFeatures> {
        if !self.features_available {
            return None;
        }
        let block = self.blocks.get(&coord)?;
        if !block.features_readable {
            return None;
        }
        Some(BlockFeatures {
            local: block.local_feature,
            global: block.global_feature,
        })
    }
}

impl PauseControl for World {
    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        self.event_log.push(WorldEvent::PauseSet { paused });
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}

impl SimulationControl for World {
    fn suspend(&mut self) {
        self.suspend_depth += 1;
        self.event_log.push(WorldEvent::Suspended);
    }

    fn resume(&mut self) {
        debug_assert!(self.suspend_depth > 0, "resume without matching suspend");
        self.suspend_depth = self.suspend_depth.saturating_sub(1);
        self.event_log.push(WorldEvent::Resumed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Suspension;

    #[test]
    fn filled_world_has_every_block_hidden() {
        let w = World::filled(WorldDimensions::new(2, 3, 1));
        assert_eq!(w.block_count(), 6);
        assert!(
            w.hidden_masks()
                .values()
                .all(|m| *m == HiddenMask::all_hidden())
        );
    }

    #[test]
    fn insert_outside_bounds_is_rejected() {
        let mut w = World::new(WorldDimensions::new(1, 1, 1));
        assert!(w.insert_block(BlockCoord::new(0, 0, 0), Block::hidden()));
        assert!(!w.insert_block(BlockCoord::new(1, 0, 0), Block::hidden()));
        assert_eq!(w.block_count(), 1);
    }

    #[test]
    fn absent_blocks_read_as_none() {
        let w = World::new(WorldDimensions::new(2, 2, 2));
        assert!(w.block(BlockCoord::new(1, 1, 1)).is_none());
        assert!(w.read_features(BlockCoord::new(1, 1, 1)).is_none());
    }

    #[test]
    fn step_respects_pause_and_suspension() {
        let mut w = World::new(WorldDimensions::new(1, 1, 1));
        assert!(w.step());
        w.set_paused(true);
        assert!(!w.step());
        w.set_paused(false);
        {
            let mut guard = Suspension::acquire(&mut w);
            assert!(!guard.step());
        }
        assert!(w.step());
        assert_eq!(w.tick(), 2);
    }

    #[test]
    fn features_reflect_block_and_availability() {
        let mut w = World::new(WorldDimensions::new(2, 1, 1));
        let a = BlockCoord::new(0, 0, 0);
        let b = BlockCoord::new(1, 0, 0);
        w.insert_block(a, Block::hidden().with_global_feature(FeatureKind::Underworld));
        w.insert_block(b, Block::hidden().with_unreadable_features());

        let f = w.read_features(a).unwrap();
        assert_eq!(f.global, Some(FeatureKind::Underworld));
        assert_eq!(f.local, None);
        assert!(w.read_features(b).is_none());

        w.set_features_available(false);
        assert!(!w.start_features());
        assert!(w.read_features(a).is_none());
    }

    #[test]
    fn resize_drops_out_of_range_blocks() {
        let mut w = World::filled(WorldDimensions::new(2, 2, 1));
        w.resize(WorldDimensions::new(1, 2, 1));
        assert_eq!(w.block_count(), 2);
        assert_eq!(w.size(), WorldDimensions::new(1, 2, 1));
    }

    #[test]
    fn block_mutation_records_suspension() {
        let mut w = World::filled(WorldDimensions::new(1, 1, 1));
        let coord = BlockCoord::new(0, 0, 0);
        w.block_mut(coord).unwrap().reveal_all();
        {
            let mut guard = Suspension::acquire(&mut w);
            guard.block_mut(coord).unwrap().set_hidden_mask(&HiddenMask::all_hidden());
        }
        assert!(w.block_mut(BlockCoord::new(0, 0, 1)).is_none());
        assert_eq!(
            w.events(),
            &[
                WorldEvent::BlockMutated {
                    coord,
                    suspended: false
                },
                WorldEvent::Suspended,
                WorldEvent::BlockMutated {
                    coord,
                    suspended: true
                },
                WorldEvent::Resumed,
            ]
        );
    }

    #[test]
    fn suspend_and_pause_are_logged() {
        let mut w = World::new(WorldDimensions::new(1, 1, 1));
        w.suspend();
        w.set_paused(true);
        w.resume();
        assert_eq!(
            w.drain_events(),
            vec![
                WorldEvent::Suspended,
                WorldEvent::PauseSet { paused: true },
                WorldEvent::Resumed,
            ]
        );
        assert!(w.events().is_empty());
    }
}
