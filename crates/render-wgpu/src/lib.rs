//! wgpu render backend for the block grid viewer.
//!
//! [`ImmediateBatch`] implements the fixed-function `RenderBackend` on the
//! CPU: quads are transformed to clip space as they are submitted and
//! collected into a triangle list. [`WgpuRenderer`] uploads and draws one
//! batch per frame.
//!
//! # Invariants
//! - Renderer never mutates scene state.
//! - Front faces are counter-clockwise; back faces are culled.

mod batch;
mod gpu;
mod shaders;

pub use batch::{ColorVertex, ImmediateBatch};
pub use gpu::WgpuRenderer;
