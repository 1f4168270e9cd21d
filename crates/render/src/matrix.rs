use glam::{Mat4, Vec3, Vec4};
use serde::Serialize;

use crate::error::RenderError;

/// Maximum depth of each matrix stack, including the current matrix.
pub const MAX_STACK_DEPTH: usize = 32;

/// Which stack matrix operations target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatrixMode {
    Projection,
    Modelview,
}

#[derive(Debug, Clone)]
struct Stack {
    top: Mat4,
    saved: Vec<Mat4>,
}

impl Stack {
    fn new() -> Self {
        Self {
            top: Mat4::IDENTITY,
            saved: Vec::new(),
        }
    }
}

/// Software projection and modelview stacks with fixed-function semantics:
/// every operation post-multiplies the current matrix, so the last
/// transform issued is the first applied to a vertex.
#[derive(Debug, Clone)]
pub struct MatrixStack {
    mode: MatrixMode,
    projection: Stack,
    modelview: Stack,
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixStack {
    pub fn new() -> Self {
        Self {
            mode: MatrixMode::Modelview,
            projection: Stack::new(),
            modelview: Stack::new(),
        }
    }

    pub fn mode(&self) -> MatrixMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: MatrixMode) {
        self.mode = mode;
    }

    pub fn projection(&self) -> Mat4 {
        self.projection.top
    }

    pub fn modelview(&self) -> Mat4 {
        self.modelview.top
    }

    /// Depth of the active stack, counting the current matrix.
    pub fn depth(&self) -> usize {
        self.active().saved.len() + 1
    }

    pub fn load_identity(&mut self) {
        self.active_mut().top = Mat4::IDENTITY;
    }

    pub fn multiply(&mut self, m: Mat4) {
        let stack = self.active_mut();
        stack.top *= m;
    }

    pub fn translate(&mut self, offset: Vec3) {
        self.multiply(Mat4::from_translation(offset));
    }

    /// Rotate by `degrees` around `axis`.
    pub fn rotate(&mut self, degrees: f32, axis: Vec3) {
        self.multiply(Mat4::from_axis_angle(axis.normalize(), degrees.to_radians()));
    }

    pub fn push(&mut self) -> Result<(), RenderError> {
        let stack = self.active_mut();
        if stack.saved.len() + 1 >= MAX_STACK_DEPTH {
            return Err(RenderError::StackOverflow {
                limit: MAX_STACK_DEPTH,
            });
        }
        stack.saved.push(stack.top);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<(), RenderError> {
        let stack = self.active_mut();
        stack.top = stack.saved.pop().ok_or(RenderError::StackUnderflow)?;
        Ok(())
    }

    /// Object-space point to eye space.
    pub fn to_eye(&self, point: Vec3) -> Vec3 {
        self.modelview.top.transform_point3(point)
    }

    /// Object-space point to clip space.
    pub fn to_clip(&self, point: Vec3) -> Vec4 {
        self.projection.top * self.modelview.top * point.extend(1.0)
    }

    fn active(&self) -> &Stack {
        match self.mode {
            MatrixMode::Projection => &self.projection,
            MatrixMode::Modelview => &self.modelview,
        }
    }

    fn active_mut(&mut self) -> &mut Stack {
        match self.mode {
            MatrixMode::Projection => &mut self.projection,
            MatrixMode::Modelview => &mut self.modelview,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_transforms_apply_first() {
        let mut m = MatrixStack::new();
        m.translate(Vec3::new(10.0, 0.0, 0.0));
        m.rotate(90.0, Vec3::Y);
        let p = m.to_eye(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::new(10.0, 0.0, -1.0), 1e-5), "{p}");
    }

    #[test]
    fn push_pop_restores_matrix() {
        let mut m = MatrixStack::new();
        m.translate(Vec3::ONE);
        let before = m.modelview();
        m.push().unwrap();
        m.rotate(45.0, Vec3::Z);
        assert_ne!(m.modelview(), before);
        m.pop().unwrap();
        assert_eq!(m.modelview(), before);
        assert_eq!(m.depth(), 1);
    }

    #[test]
    fn pop_on_empty_stack_underflows() {
        let mut m = MatrixStack::new();
        assert_eq!(m.pop(), Err(RenderError::StackUnderflow));
    }

    #[test]
    fn push_beyond_limit_overflows() {
        let mut m = MatrixStack::new();
        for _ in 1..MAX_STACK_DEPTH {
            m.push().unwrap();
        }
        assert_eq!(m.depth(), MAX_STACK_DEPTH);
        assert_eq!(
            m.push(),
            Err(RenderError::StackOverflow {
                limit: MAX_STACK_DEPTH
            })
        );
    }

    #[test]
    fn modes_have_separate_stacks() {
        let mut m = MatrixStack::new();
        m.set_mode(MatrixMode::Projection);
        m.multiply(Mat4::from_scale(Vec3::splat(2.0)));
        m.set_mode(MatrixMode::Modelview);
        assert_eq!(m.modelview(), Mat4::IDENTITY);
        assert_eq!(m.projection(), Mat4::from_scale(Vec3::splat(2.0)));
        let clip = m.to_clip(Vec3::ONE);
        assert_eq!(clip, Vec4::new(2.0, 2.0, 2.0, 1.0));
    }
}
