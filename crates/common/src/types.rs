use serde::{Deserialize, Serialize};

/// Number of tiles along each horizontal edge of a block.
pub const BLOCK_EDGE: usize = 16;

/// Tiles in one block.
pub const TILES_PER_BLOCK: usize = BLOCK_EDGE * BLOCK_EDGE;

/// Address of a block in the world grid.
///
/// Ordering is x, then y, then z, which is also the traversal order used when
/// revealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockCoord {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl BlockCoord {
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }
}

impl std::fmt::Display for BlockCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Extent of the block grid, in blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldDimensions {
    pub x_max: u32,
    pub y_max: u32,
    pub z_max: u32,
}

impl WorldDimensions {
    pub fn new(x_max: u32, y_max: u32, z_max: u32) -> Self {
        Self {
            x_max,
            y_max,
            z_max,
        }
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, coord: BlockCoord) -> bool {
        coord.x < self.x_max && coord.y < self.y_max && coord.z < self.z_max
    }

    /// Number of block slots in the grid (present or not).
    pub fn block_count(&self) -> u64 {
        self.x_max as u64 * self.y_max as u64 * self.z_max as u64
    }

    /// Every coordinate in the grid, x outermost, z innermost.
    pub fn coords(&self) -> CoordIter {
        CoordIter {
            dims: *self,
            next: (self.block_count() > 0).then(|| BlockCoord::new(0, 0, 0)),
        }
    }
}

impl std::fmt::Display for WorldDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.x_max, self.y_max, self.z_max)
    }
}

/// Iterator over all block coordinates of a [`WorldDimensions`].
#[derive(Debug, Clone)]
pub struct CoordIter {
    dims: WorldDimensions,
    next: Option<BlockCoord>,
}

impl Iterator for CoordIter {
    type Item = BlockCoord;

    fn next(&mut self) -> Option<BlockCoord> {
        let current = self.next?;
        let mut n = current;
        n.z += 1;
        if n.z == self.dims.z_max {
            n.z = 0;
            n.y += 1;
            if n.y == self.dims.y_max {
                n.y = 0;
                n.x += 1;
            }
        }
        self.next = (n.x < self.dims.x_max).then_some(n);
        Some(current)
    }
}

/// Per-tile hidden flags of one block, indexed `[x][y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenMask(pub [[bool; BLOCK_EDGE]; BLOCK_EDGE]);

impl HiddenMask {
    pub fn all_hidden() -> Self {
        Self([[true; BLOCK_EDGE]; BLOCK_EDGE])
    }

    pub fn all_visible() -> Self {
        Self([[false; BLOCK_EDGE]; BLOCK_EDGE])
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.0[x][y]
    }

    pub fn set(&mut self, x: usize, y: usize, hidden: bool) {
        self.0[x][y] = hidden;
    }

    /// Number of hidden tiles.
    pub fn hidden_count(&self) -> usize {
        self.0.iter().flatten().filter(|h| **h).count()
    }

    pub fn is_fully_visible(&self) -> bool {
        self.hidden_count() == 0
    }
}

impl Default for HiddenMask {
    fn default() -> Self {
        Self::all_hidden()
    }
}

/// Category of a map feature attached to a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    /// Generic feature with no special structure.
    Other,
    AdamantineTube,
    HellTemple,
    /// The hazardous region at the bottom of the world.
    Underworld,
}

/// Mode the host simulation is running in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// The interactive fortress mode; the only mode in which the map may be touched.
    #[default]
    Fortress,
    Adventure,
    Arena,
    Legends,
}

impl GameMode {
    pub fn is_interactive(self) -> bool {
        self == GameMode::Fortress
    }
}
