//! Render Pipeline: walks the scene and issues draw commands to a backend.
//!
//! # Invariants
//! - The renderer never mutates the scene.
//! - Every matrix push is matched by a pop, including on error paths.
//! - Camera and block rotations are issued pitch (X), yaw (Y), roll (Z).
//!
//! Backends implement [`RenderBackend`]. [`RecordingBackend`] records the
//! command stream and is used for tests and headless runs.

mod backend;
mod error;
mod matrix;
mod pipeline;
mod recording;

pub use backend::{RenderBackend, Viewport, with_matrix_scope};
pub use error::RenderError;
pub use matrix::{MAX_STACK_DEPTH, MatrixMode, MatrixStack};
pub use pipeline::{FrameStats, Projection, render_frame, reshape};
pub use recording::{DrawCommand, RecordingBackend};
