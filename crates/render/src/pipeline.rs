use blockgrid_common::{GridCoord, Orientation, ViewerConfig, grid_to_world};
use blockgrid_kernel::{Block, Camera, Scene};
use glam::Vec3;
use serde::Serialize;

use crate::backend::{RenderBackend, Viewport, with_matrix_scope};
use crate::error::RenderError;
use crate::matrix::MatrixMode;

/// Fixed perspective frustum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self::from_config(&ViewerConfig::default())
    }
}

impl Projection {
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            fov_y_degrees: config.field_of_view,
            near: config.near,
            far: config.far,
        }
    }

    /// Reset the projection matrix to this frustum at the viewport's aspect
    /// ratio, then leave the backend in modelview mode.
    pub fn apply<B>(&self, backend: &mut B, viewport: Viewport) -> Result<(), RenderError>
    where
        B: RenderBackend + ?Sized,
    {
        backend.matrix_mode(MatrixMode::Projection)?;
        backend.load_identity()?;
        backend.perspective(self.fov_y_degrees, viewport.aspect(), self.near, self.far)?;
        backend.matrix_mode(MatrixMode::Modelview)
    }
}

/// Counts for one rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FrameStats {
    /// Ground blocks drawn.
    pub blocks: usize,
    /// Cursor cubes drawn.
    pub cursors: usize,
    /// Quads submitted in total.
    pub quads: usize,
}

/// React to a viewport resize: set the new viewport and reset the frustum.
pub fn reshape<B>(
    backend: &mut B,
    viewport: Viewport,
    projection: &Projection,
) -> Result<(), RenderError>
where
    B: RenderBackend + ?Sized,
{
    tracing::debug!(width = viewport.width, height = viewport.height, "reshape");
    backend.set_viewport(viewport)?;
    projection.apply(backend, viewport)
}

/// Draw one frame of `scene`.
///
/// Blocks are drawn column by column; the cursor cube is drawn right after
/// the ground cell it sits over. Any backend error ends the frame and is
/// returned as is.
pub fn render_frame<B>(scene: &Scene, backend: &mut B) -> Result<FrameStats, RenderError>
where
    B: RenderBackend + ?Sized,
{
    let _span = tracing::trace_span!("render_frame").entered();

    backend.clear()?;
    let viewport = backend.viewport();
    Projection::from_config(scene.config()).apply(backend, viewport)?;
    backend.load_identity()?;
    apply_camera(backend, scene.camera())?;

    let dims = scene.dimensions();
    let cursor = scene.cursor();
    let mut stats = FrameStats::default();

    for (x, z, block) in scene.grid().iter() {
        let location = grid_to_world(GridCoord::new(x as i32, 0, z as i32), dims);
        stats.quads += draw_block(backend, location, block)?;
        stats.blocks += 1;

        if cursor.is_over(x, z) {
            let location = grid_to_world(cursor.position(), dims);
            stats.quads += draw_block(backend, location, cursor.block())?;
            stats.cursors += 1;
        }
    }

    tracing::trace!(
        blocks = stats.blocks,
        cursors = stats.cursors,
        quads = stats.quads,
        "frame complete"
    );
    Ok(stats)
}

fn apply_camera<B>(backend: &mut B, camera: &Camera) -> Result<(), RenderError>
where
    B: RenderBackend + ?Sized,
{
    backend.translate(camera.position)?;
    apply_orientation(backend, &camera.orientation)
}

fn apply_orientation<B>(backend: &mut B, o: &Orientation) -> Result<(), RenderError>
where
    B: RenderBackend + ?Sized,
{
    backend.rotate(o.pitch, Vec3::X)?;
    backend.rotate(o.yaw, Vec3::Y)?;
    backend.rotate(o.roll, Vec3::Z)
}

/// Draw `block` at `location` inside its own matrix scope. Returns the
/// number of quads submitted.
fn draw_block<B>(backend: &mut B, location: Vec3, block: &Block) -> Result<usize, RenderError>
where
    B: RenderBackend + ?Sized,
{
    with_matrix_scope(backend, |backend| {
        backend.translate(location)?;
        apply_orientation(backend, &block.orientation)?;
        let mut quads = 0;
        for (color, corners) in block.cube.faces() {
            backend.quad(color.rgb(), corners)?;
            quads += 1;
        }
        Ok(quads)
    })
}
