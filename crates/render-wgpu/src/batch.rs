use blockgrid_render::{MatrixMode, MatrixStack, RenderBackend, RenderError, Viewport};
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// A clip-space vertex with its face color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 4],
    pub color: [f32; 3],
}

/// Triangle fan order used to split a quad.
const QUAD_TRIANGLES: [usize; 6] = [0, 1, 2, 0, 2, 3];

/// CPU-side immediate-mode backend. Collects one frame of triangles for
/// [`crate::WgpuRenderer`].
#[derive(Debug, Clone)]
pub struct ImmediateBatch {
    viewport: Viewport,
    stack: MatrixStack,
    vertices: Vec<ColorVertex>,
}

impl ImmediateBatch {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            stack: MatrixStack::new(),
            vertices: Vec::new(),
        }
    }

    pub fn vertices(&self) -> &[ColorVertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl RenderBackend for ImmediateBatch {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_viewport(&mut self, viewport: Viewport) -> Result<(), RenderError> {
        self.viewport = viewport;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), RenderError> {
        self.vertices.clear();
        Ok(())
    }

    fn matrix_mode(&mut self, mode: MatrixMode) -> Result<(), RenderError> {
        self.stack.set_mode(mode);
        Ok(())
    }

    fn load_identity(&mut self) -> Result<(), RenderError> {
        self.stack.load_identity();
        Ok(())
    }

    fn perspective(
        &mut self,
        fov_y_degrees: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Result<(), RenderError> {
        // wgpu clip space has depth in [0, 1].
        self.stack.multiply(Mat4::perspective_rh(
            fov_y_degrees.to_radians(),
            aspect,
            near,
            far,
        ));
        Ok(())
    }

    fn push_matrix(&mut self) -> Result<(), RenderError> {
        self.stack.push()
    }

    fn pop_matrix(&mut self) -> Result<(), RenderError> {
        self.stack.pop()
    }

    fn translate(&mut self, offset: Vec3) -> Result<(), RenderError> {
        self.stack.translate(offset);
        Ok(())
    }

    fn rotate(&mut self, degrees: f32, axis: Vec3) -> Result<(), RenderError> {
        self.stack.rotate(degrees, axis);
        Ok(())
    }

    fn quad(&mut self, color: [f32; 3], corners: [Vec3; 4]) -> Result<(), RenderError> {
        let clip = corners.map(|c| self.stack.to_clip(c).to_array());
        self.vertices
            .extend(QUAD_TRIANGLES.iter().map(|&i| ColorVertex {
                position: clip[i],
                color,
            }));
        Ok(())
    }
}
