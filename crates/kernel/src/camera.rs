use blockgrid_common::{Axis, Orientation};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Viewer pose. Position is applied as a translation before the rotations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    pub orientation: Orientation,
}

impl Default for Camera {
    /// Starting pose looking down at the grid.
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, -8.0),
            orientation: Orientation::new(30.0, 0.0, 315.0),
        }
    }
}

impl Camera {
    /// Translate along one world axis.
    pub fn pan(&mut self, axis: Axis, delta: f32) {
        match axis {
            Axis::X => self.position.x += delta,
            Axis::Y => self.position.y += delta,
            Axis::Z => self.position.z += delta,
        }
    }
}
