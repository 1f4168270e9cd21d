use serde::{Deserialize, Serialize};

use crate::coords::GridDimensions;

/// Upper bound on `world_width * world_depth`.
pub const MAX_GRID_CELLS: usize = 1 << 20;

/// Errors from validating a [`ViewerConfig`].
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("grid must have at least one cell, got {width}x{depth}")]
    EmptyGrid { width: u32, depth: u32 },
    #[error("grid {width}x{depth} exceeds {max} cells")]
    GridTooLarge { width: u32, depth: u32, max: usize },
    #[error("block half extent must be positive, got {0}")]
    InvalidHalfExtent(f32),
}

/// Viewer configuration: grid size, block size, input steps and frustum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Grid cells along X.
    pub world_width: u32,
    /// Grid cells along Z.
    pub world_depth: u32,
    /// Half extent of a ground block. Kept under half a unit so adjacent
    /// blocks show a seam.
    pub block_half_extent: f32,
    /// Camera translation per pan key release.
    pub pan_step: f32,
    /// Rotation increment in degrees. No key is bound to it yet.
    pub angle_step: f32,
    /// Vertical field of view in degrees.
    pub field_of_view: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            world_width: 50,
            world_depth: 50,
            block_half_extent: 0.49,
            pan_step: 1.0,
            angle_step: 5.0,
            field_of_view: 60.0,
            near: 1.0,
            far: 100.0,
        }
    }
}

impl ViewerConfig {
    /// Default configuration with a custom grid size.
    pub fn with_grid(width: u32, depth: u32) -> Self {
        Self {
            world_width: width,
            world_depth: depth,
            ..Self::default()
        }
    }

    pub fn dimensions(&self) -> GridDimensions {
        GridDimensions::new(self.world_width, self.world_depth)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.world_width == 0 || self.world_depth == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.world_width,
                depth: self.world_depth,
            });
        }
        if self.dimensions().cell_count() > MAX_GRID_CELLS {
            return Err(ConfigError::GridTooLarge {
                width: self.world_width,
                depth: self.world_depth,
                max: MAX_GRID_CELLS,
            });
        }
        if self.block_half_extent.is_nan() || self.block_half_extent <= 0.0 {
            return Err(ConfigError::InvalidHalfExtent(self.block_half_extent));
        }
        Ok(())
    }
}
