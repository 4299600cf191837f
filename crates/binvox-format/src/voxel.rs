//! Voxel grid data model.
//!
//! BINVOX names its three axes `depth`, `width` and `height`. A [`Voxel`] maps onto
//! them as `x < depth`, `y < width`, `z < height`. Encoded cells are visited with
//! `x` slowest, then `z`, then `y` fastest; [`Voxel::traversal_cmp`] orders voxels
//! the same way.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Axis extents of the voxel grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    /// Extent of the `x` axis (slowest varying).
    pub depth: u32,
    /// Extent of the `y` axis (fastest varying).
    pub width: u32,
    /// Extent of the `z` axis.
    pub height: u32,
}

impl Dimension {
    /// Creates a dimension from its three extents.
    pub const fn new(depth: u32, width: u32, height: u32) -> Self {
        Self {
            depth,
            width,
            height,
        }
    }

    /// Total number of cells in the grid.
    pub fn cell_count(&self) -> u64 {
        u64::from(self.depth) * u64::from(self.width) * u64::from(self.height)
    }
}

/// Spatial offset of the grid. Stored and written back unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub depth: f64,
    pub width: f64,
    pub height: f64,
}

impl Translation {
    /// Creates a translation from its three components.
    pub const fn new(depth: f64, width: f64, height: f64) -> Self {
        Self {
            depth,
            width,
            height,
        }
    }
}

/// An occupied grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Voxel {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Voxel {
    /// The first cell visited by the encoder.
    pub const ORIGIN: Voxel = Voxel { x: 0, y: 0, z: 0 };

    /// Creates a voxel at `(x, y, z)`.
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Returns `true` if every coordinate lies inside `dimension`.
    pub fn is_within(&self, dimension: &Dimension) -> bool {
        self.x < dimension.depth && self.y < dimension.width && self.z < dimension.height
    }

    /// Compares two voxels by encode order: `x`, then `z`, then `y`.
    pub fn traversal_cmp(&self, other: &Voxel) -> Ordering {
        (self.x, self.z, self.y).cmp(&(other.x, other.z, other.y))
    }
}

/// A complete BINVOX model: grid shape, placement and occupied cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoxelData {
    pub dimension: Dimension,
    pub translate: Translation,
    pub scale: f64,
    /// Occupied cells, expected in traversal order.
    pub voxels: Vec<Voxel>,
}

impl VoxelData {
    /// Creates an empty model with no translation and unit scale.
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            translate: Translation::default(),
            scale: 1.0,
            voxels: Vec::new(),
        }
    }

    /// Sorts voxels into traversal order and removes duplicates.
    ///
    /// The builder only recognizes voxels that arrive in this order, so callers
    /// assembling voxels by hand should run this before building.
    pub fn sort_voxels(&mut self) {
        self.voxels.sort_by(Voxel::traversal_cmp);
        self.voxels.dedup();
    }

    /// Returns `true` if voxels are strictly increasing in traversal order.
    pub fn is_sorted(&self) -> bool {
        self.voxels
            .windows(2)
            .all(|pair| pair[0].traversal_cmp(&pair[1]) == Ordering::Less)
    }

    /// Voxels lying outside the grid.
    pub fn out_of_bounds(&self) -> impl Iterator<Item = &Voxel> + '_ {
        self.voxels
            .iter()
            .filter(move |voxel| !voxel.is_within(&self.dimension))
    }

    /// Fraction of grid cells that hold an in-bounds voxel (0.0 for an empty grid).
    pub fn occupancy(&self) -> f64 {
        let cells = self.dimension.cell_count();
        if cells == 0 {
            return 0.0;
        }
        let inside = self
            .voxels
            .iter()
            .filter(|voxel| voxel.is_within(&self.dimension))
            .count();
        inside as f64 / cells as f64
    }
}
