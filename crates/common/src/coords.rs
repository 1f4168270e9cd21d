use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::types::GridCoord;

/// World-space size of one grid cell.
pub const UNIT: f32 = 1.0;

/// Width (X) and depth (Z) of the ground grid, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    pub width: u32,
    pub depth: u32,
}

impl GridDimensions {
    pub fn new(width: u32, depth: u32) -> Self {
        Self { width, depth }
    }

    /// Number of cells on the ground plane.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.depth as usize
    }
}

/// Map a grid coordinate to the world-space center of its cell.
///
/// The grid is centered on the origin along X and Z; Y is not shifted, so
/// layer 0 sits on the ground plane.
pub fn grid_to_world(coord: GridCoord, dims: GridDimensions) -> Vec3 {
    Vec3::new(
        coord.x as f32 * UNIT - dims.width as f32 / 2.0,
        coord.y as f32 * UNIT,
        coord.z as f32 * UNIT - dims.depth as f32 / 2.0,
    )
}
