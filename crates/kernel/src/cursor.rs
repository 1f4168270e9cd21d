use blockgrid_common::{Axis, Color, GridCoord, GridDimensions};
use blockgrid_geometry::{CURSOR_HALF_EXTENT, solid_cube};

use crate::block::Block;

/// The highlighted cell and the cube drawn over it.
///
/// The cursor block is not part of the grid.
#[derive(Debug, Clone)]
pub struct Cursor {
    position: GridCoord,
    block: Block,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new(&Color::white())
    }
}

impl Cursor {
    /// Cursor at the origin cell, drawn as a solid cube of `color`.
    pub fn new(color: &Color) -> Self {
        Self {
            position: GridCoord::default(),
            block: Block::new(solid_cube(CURSOR_HALF_EXTENT, color)),
        }
    }

    pub fn position(&self) -> GridCoord {
        self.position
    }

    pub fn block(&self) -> &Block {
        &self.block
    }

    /// Whether the cursor sits over ground cell `(x, z)`.
    pub fn is_over(&self, x: u32, z: u32) -> bool {
        self.position.x == x as i32 && self.position.z == z as i32
    }

    /// Move along `axis` by `delta`, clamped to the grid.
    ///
    /// X and Z stay within `dims`. Y stops at 0 and has no upper bound.
    /// Returns whether the position changed.
    pub fn step(&mut self, axis: Axis, delta: i32, dims: GridDimensions) -> bool {
        let before = self.position;
        let p = &mut self.position;
        match axis {
            Axis::X => p.x = clamp_index(p.x, delta, dims.width),
            Axis::Z => p.z = clamp_index(p.z, delta, dims.depth),
            Axis::Y => p.y = p.y.saturating_add(delta).max(0),
        }
        self.position != before
    }
}

fn clamp_index(value: i32, delta: i32, len: u32) -> i32 {
    let max = len.saturating_sub(1).min(i32::MAX as u32) as i32;
    value.saturating_add(delta).clamp(0, max)
}
