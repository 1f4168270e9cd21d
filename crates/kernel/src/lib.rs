//! Scene Model: the ground grid, the camera and the cursor.
//!
//! # Invariants
//! - The grid shape is fixed at construction; cells are never added or removed.
//! - Cursor X and Z stay inside the grid; cursor Y never goes below 0.
//! - All state mutations flow through explicit `Scene` operations.

mod block;
mod camera;
mod cursor;
mod grid;
mod scene;

pub use block::Block;
pub use camera::Camera;
pub use cursor::Cursor;
pub use grid::Grid;
pub use scene::Scene;
