use glam::Vec3;
use std::fmt::Write;

use crate::backend::{RenderBackend, Viewport};
use crate::error::RenderError;
use crate::matrix::{MatrixMode, MatrixStack};

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    SetViewport(Viewport),
    MatrixMode(MatrixMode),
    LoadIdentity,
    Perspective {
        fov_y_degrees: f32,
        aspect: f32,
        near: f32,
        far: f32,
    },
    PushMatrix,
    PopMatrix,
    Translate(Vec3),
    Rotate {
        degrees: f32,
        axis: Vec3,
    },
    /// Quad corners already transformed to eye space.
    Quad {
        color: [f32; 3],
        corners: [Vec3; 4],
    },
}

/// Backend that records every command and tracks the matrix stacks in
/// software. Used for tests and headless frames.
#[derive(Debug, Clone)]
pub struct RecordingBackend {
    viewport: Viewport,
    stack: MatrixStack,
    commands: Vec<DrawCommand>,
    fail_on_quad: Option<usize>,
    quads: usize,
}

impl RecordingBackend {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            stack: MatrixStack::new(),
            commands: Vec::new(),
            fail_on_quad: None,
            quads: 0,
        }
    }

    /// Fail with a backend error when the quad with this zero-based index
    /// is submitted.
    pub fn fail_on_quad(mut self, index: usize) -> Self {
        self.fail_on_quad = Some(index);
        self
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop recorded commands, keeping the viewport and matrices.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
        self.quads = 0;
    }

    pub fn stack(&self) -> &MatrixStack {
        &self.stack
    }

    pub fn push_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::PushMatrix))
    }

    pub fn pop_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::PopMatrix))
    }

    pub fn quad_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Quad { .. }))
    }

    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(*c)).count()
    }

    /// Human-readable digest of the recorded frame.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "=== Frame ({}x{}) ===",
            self.viewport.width, self.viewport.height
        );
        let _ = writeln!(out, "Commands: {}", self.commands.len());
        let _ = writeln!(
            out,
            "Matrix push/pop: {}/{}",
            self.push_count(),
            self.pop_count()
        );
        let _ = writeln!(out, "Quads: {}", self.quad_count());
        out
    }

    fn record(&mut self, command: DrawCommand) -> Result<(), RenderError> {
        self.commands.push(command);
        Ok(())
    }
}

impl RenderBackend for RecordingBackend {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_viewport(&mut self, viewport: Viewport) -> Result<(), RenderError> {
        self.viewport = viewport;
        self.record(DrawCommand::SetViewport(viewport))
    }

    fn clear(&mut self) -> Result<(), RenderError> {
        self.record(DrawCommand::Clear)
    }

    fn matrix_mode(&mut self, mode: MatrixMode) -> Result<(), RenderError> {
        self.stack.set_mode(mode);
        self.record(DrawCommand::MatrixMode(mode))
    }

    fn load_identity(&mut self) -> Result<(), RenderError> {
        self.stack.load_identity();
        self.record(DrawCommand::LoadIdentity)
    }

    fn perspective(
        &mut self,
        fov_y_degrees: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Result<(), RenderError> {
        self.stack.multiply(glam::Mat4::perspective_rh_gl(
            fov_y_degrees.to_radians(),
            aspect,
            near,
            far,
        ));
        self.record(DrawCommand::Perspective {
            fov_y_degrees,
            aspect,
            near,
            far,
        })
    }

    fn push_matrix(&mut self) -> Result<(), RenderError> {
        self.stack.push()?;
        self.record(DrawCommand::PushMatrix)
    }

    fn pop_matrix(&mut self) -> Result<(), RenderError> {
        self.stack.pop()?;
        self.record(DrawCommand::PopMatrix)
    }

    fn translate(&mut self, offset: Vec3) -> Result<(), RenderError> {
        self.stack.translate(offset);
        self.record(DrawCommand::Translate(offset))
    }

    fn rotate(&mut self, degrees: f32, axis: Vec3) -> Result<(), RenderError> {
        self.stack.rotate(degrees, axis);
        self.record(DrawCommand::Rotate { degrees, axis })
    }

    fn quad(&mut self, color: [f32; 3], corners: [Vec3; 4]) -> Result<(), RenderError> {
        if self.fail_on_quad == Some(self.quads) {
            return Err(RenderError::Backend(format!(
                "injected failure at quad {}",
                self.quads
            )));
        }
        self.quads += 1;
        let corners = corners.map(|c| self.stack.to_eye(c));
        self.record(DrawCommand::Quad { color, corners })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_commands_in_order() {
        let mut b = RecordingBackend::new(Viewport::new(4, 4));
        b.clear().unwrap();
        b.push_matrix().unwrap();
        b.translate(Vec3::Y).unwrap();
        b.pop_matrix().unwrap();
        assert_eq!(
            b.commands(),
            &[
                DrawCommand::Clear,
                DrawCommand::PushMatrix,
                DrawCommand::Translate(Vec3::Y),
                DrawCommand::PopMatrix,
            ]
        );
    }

    #[test]
    fn quads_are_recorded_in_eye_space() {
        let mut b = RecordingBackend::new(Viewport::new(4, 4));
        b.translate(Vec3::new(0.0, 0.0, -5.0)).unwrap();
        b.quad([1.0, 0.0, 0.0], [Vec3::ZERO, Vec3::X, Vec3::ONE, Vec3::Y])
            .unwrap();
        match &b.commands()[1] {
            DrawCommand::Quad { corners, .. } => {
                assert_eq!(corners[0], Vec3::new(0.0, 0.0, -5.0));
                assert_eq!(corners[2], Vec3::new(1.0, 1.0, -4.0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn failed_pop_is_not_recorded() {
        let mut b = RecordingBackend::new(Viewport::new(4, 4));
        assert_eq!(b.pop_matrix(), Err(RenderError::StackUnderflow));
        assert!(b.commands().is_empty());
    }

    #[test]
    fn summary_reports_counts() {
        let mut b = RecordingBackend::new(Viewport::new(640, 480));
        b.push_matrix().unwrap();
        b.quad([0.0; 3], [Vec3::ZERO; 4]).unwrap();
        b.pop_matrix().unwrap();
        let s = b.summary();
        assert!(s.contains("640x480"));
        assert!(s.contains("Matrix push/pop: 1/1"));
        assert!(s.contains("Quads: 1"));
    }

    #[test]
    fn clear_commands_resets_failure_counter() {
        let mut b = RecordingBackend::new(Viewport::new(4, 4)).fail_on_quad(1);
        b.quad([0.0; 3], [Vec3::ZERO; 4]).unwrap();
        assert!(b.quad([0.0; 3], [Vec3::ZERO; 4]).is_err());
        b.clear_commands();
        assert!(b.quad([0.0; 3], [Vec3::ZERO; 4]).is_ok());
    }
}
