use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::matrix::MatrixMode;

/// Drawable area in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height; a zero height counts as one pixel.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// Immediate-mode drawing surface with fixed-function matrix stacks.
///
/// The pipeline issues commands in a fixed order and expects matrix
/// operations to compose as in a classic GL context: each call
/// post-multiplies the current matrix of the active mode.
pub trait RenderBackend {
    /// Current drawable size.
    fn viewport(&self) -> Viewport;

    fn set_viewport(&mut self, viewport: Viewport) -> Result<(), RenderError>;

    /// Clear color and depth buffers.
    fn clear(&mut self) -> Result<(), RenderError>;

    fn matrix_mode(&mut self, mode: MatrixMode) -> Result<(), RenderError>;

    fn load_identity(&mut self) -> Result<(), RenderError>;

    /// Multiply the current matrix by a perspective frustum.
    fn perspective(
        &mut self,
        fov_y_degrees: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Result<(), RenderError>;

    fn push_matrix(&mut self) -> Result<(), RenderError>;

    fn pop_matrix(&mut self) -> Result<(), RenderError>;

    fn translate(&mut self, offset: Vec3) -> Result<(), RenderError>;

    /// Rotate by `degrees` about `axis`.
    fn rotate(&mut self, degrees: f32, axis: Vec3) -> Result<(), RenderError>;

    /// Submit one flat-colored quad in object space, corners in winding order.
    fn quad(&mut self, color: [f32; 3], corners: [Vec3; 4]) -> Result<(), RenderError>;
}

/// Run `f` between a matrix push and pop.
///
/// The pop is issued even when `f` fails; the first error is returned.
pub fn with_matrix_scope<B, T, F>(backend: &mut B, f: F) -> Result<T, RenderError>
where
    B: RenderBackend + ?Sized,
    F: FnOnce(&mut B) -> Result<T, RenderError>,
{
    backend.push_matrix()?;
    let result = f(backend);
    let popped = backend.pop_matrix();
    let value = result?;
    popped?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingBackend;

    #[test]
    fn aspect_ratio() {
        assert_eq!(Viewport::new(800, 400).aspect(), 2.0);
        assert_eq!(Viewport::new(640, 0).aspect(), 640.0);
    }

    #[test]
    fn scope_pops_after_success() {
        let mut b = RecordingBackend::new(Viewport::new(10, 10));
        let v = with_matrix_scope(&mut b, |b| {
            b.translate(Vec3::X)?;
            Ok(7)
        })
        .unwrap();
        assert_eq!(v, 7);
        assert_eq!(b.push_count(), 1);
        assert_eq!(b.pop_count(), 1);
    }

    #[test]
    fn scope_pops_after_failure() {
        let mut b = RecordingBackend::new(Viewport::new(10, 10));
        let err = with_matrix_scope(&mut b, |_| -> Result<(), RenderError> {
            Err(RenderError::Backend("boom".into()))
        })
        .unwrap_err();
        assert_eq!(err, RenderError::Backend("boom".into()));
        assert_eq!(b.push_count(), b.pop_count());
        assert_eq!(b.stack().depth(), 1);
    }
}
