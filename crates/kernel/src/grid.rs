use blockgrid_common::GridDimensions;

use crate::block::Block;

/// Fixed-size ground plane of blocks.
///
/// Cells are stored X-major: every Z cell of column 0, then column 1, and so
/// on. Iteration follows the same order.
#[derive(Debug, Clone)]
pub struct Grid {
    dims: GridDimensions,
    blocks: Vec<Block>,
}

impl Grid {
    /// Allocate `width * depth` independent ground blocks of the given size.
    pub fn new(dims: GridDimensions, half_extent: f32) -> Self {
        let blocks = (0..dims.cell_count())
            .map(|_| Block::ground(half_extent))
            .collect();
        Self { dims, blocks }
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dims
    }

    pub fn width(&self) -> u32 {
        self.dims.width
    }

    pub fn depth(&self) -> u32 {
        self.dims.depth
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Block at column `x`, row `z`, if inside the grid.
    pub fn get(&self, x: u32, z: u32) -> Option<&Block> {
        if x < self.dims.width && z < self.dims.depth {
            self.blocks.get(self.index(x, z))
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u32, z: u32) -> Option<&mut Block> {
        if x < self.dims.width && z < self.dims.depth {
            let i = self.index(x, z);
            self.blocks.get_mut(i)
        } else {
            None
        }
    }

    /// Every cell as `(x, z, block)` in X-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, &Block)> + '_ {
        let depth = self.dims.depth;
        self.blocks.iter().enumerate().map(move |(i, block)| {
            let i = i as u32;
            (i / depth, i % depth, block)
        })
    }

    fn index(&self, x: u32, z: u32) -> usize {
        x as usize * self.dims.depth as usize + z as usize
    }
}
