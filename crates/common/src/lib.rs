//! Shared vocabulary for the block grid viewer: colors, orientations, grid
//! coordinates, viewer configuration and the grid-to-world mapper.
//!
//! # Invariants
//! - Colors are immutable once created; clones share one allocation.
//! - `grid_to_world` is a pure function of the coordinate and grid dimensions.

pub mod config;
pub mod coords;
pub mod types;

pub use config::{ConfigError, MAX_GRID_CELLS, ViewerConfig};
pub use coords::{GridDimensions, UNIT, grid_to_world};
pub use types::{Axis, Color, GridCoord, Orientation};
