use blockgrid_common::{Axis, ConfigError, GridDimensions, ViewerConfig};

use crate::camera::Camera;
use crate::cursor::Cursor;
use crate::grid::Grid;

/// Application state read by the render pipeline and mutated by input.
///
/// Owns the grid, camera and cursor. There is no global state; callers pass
/// a `&Scene` or `&mut Scene` explicitly.
#[derive(Debug, Clone)]
pub struct Scene {
    config: ViewerConfig,
    grid: Grid,
    camera: Camera,
    cursor: Cursor,
}

impl Scene {
    /// Build the grid, camera and cursor for `config`.
    pub fn new(config: ViewerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.dimensions(), config.block_half_extent);
        tracing::info!(
            width = config.world_width,
            depth = config.world_depth,
            "scene initialized"
        );
        Ok(Self {
            config,
            grid,
            camera: Camera::default(),
            cursor: Cursor::default(),
        })
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.grid.dimensions()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Translate the camera along one axis.
    pub fn pan_camera(&mut self, axis: Axis, delta: f32) {
        self.camera.pan(axis, delta);
        tracing::debug!(?axis, delta, position = ?self.camera.position, "camera panned");
    }

    /// Move the cursor one axis at a time, clamped to the grid. Returns
    /// whether the cursor moved.
    pub fn move_cursor(&mut self, axis: Axis, delta: i32) -> bool {
        let dims = self.grid.dimensions();
        let moved = self.cursor.step(axis, delta, dims);
        if moved {
            tracing::debug!(?axis, delta, position = ?self.cursor.position(), "cursor moved");
        } else {
            tracing::warn!(
                ?axis,
                delta,
                position = ?self.cursor.position(),
                "cursor move clamped"
            );
        }
        moved
    }
}

impl Default for Scene {
    fn default() -> Self {
        let config = ViewerConfig::default();
        Self {
            grid: Grid::new(config.dimensions(), config.block_half_extent),
            config,
            camera: Camera::default(),
            cursor: Cursor::default(),
        }
    }
}
