use std::collections::HashSet;

use mapreveal_common::{BlockCoord, HiddenMask, WorldDimensions};

/// Hidden flags of one block as they were immediately before a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSnapshot {
    pub coord: BlockCoord,
    pub hidden: HiddenMask,
}

impl BlockSnapshot {
    pub fn new(coord: BlockCoord, hidden: HiddenMask) -> Self {
        Self { coord, hidden }
    }
}

/// Append-only record of one reveal generation.
///
/// Holds the block snapshots in traversal order plus the map extent seen when
/// the generation began.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    blocks: Vec<BlockSnapshot>,
    seen: HashSet<BlockCoord>,
    dims: Option<WorldDimensions>,
}

impl SnapshotStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a generation for a map of extent `dims`.
    ///
    /// Returns false, leaving the store untouched, if a generation is already open.
    pub fn begin(&mut self, dims: WorldDimensions) -> bool {
        if self.dims.is_some() || !self.blocks.is_empty() {
            tracing::warn!("snapshot generation already open");
            return false;
        }
        self.dims = Some(dims);
        self.blocks.reserve(dims.block_count().min(1 << 16) as usize);
        true
    }

    /// Append a snapshot. Returns false if no generation is open or its
    /// coordinate was already recorded in this generation.
    pub fn record(&mut self, snapshot: BlockSnapshot) -> bool {
        if !self.is_open() {
            tracing::warn!(coord = %snapshot.coord, "snapshot outside a generation");
            return false;
        }
        if !self.seen.insert(snapshot.coord) {
            tracing::warn!(coord = %snapshot.coord, "block already snapshotted");
            return false;
        }
        self.blocks.push(snapshot);
        true
    }

    /// Map extent recorded by `begin`, if a generation is open.
    pub fn dimensions(&self) -> Option<WorldDimensions> {
        self.dims
    }

    /// Whether a generation has been started and not yet cleared.
    pub fn is_open(&self) -> bool {
        self.dims.is_some()
    }

    /// Number of snapshots stored.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn contains(&self, coord: BlockCoord) -> bool {
        self.seen.contains(&coord)
    }

    /// Snapshots in the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = &BlockSnapshot> {
        self.blocks.iter()
    }

    /// Drop the whole generation and give back its memory.
    pub fn clear(&mut self) {
        self.blocks = Vec::new();
        self.seen = HashSet::new();
        self.dims = None;
    }
}
