use blockgrid_common::Axis;
use blockgrid_kernel::Scene;

use crate::key::{Key, Modifiers};

/// A single scene mutation produced by a key release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Translate the camera along one axis.
    PanCamera { axis: Axis, delta: f32 },
    /// Step the cursor along one axis; the scene clamps it.
    MoveCursor { axis: Axis, delta: i32 },
}

impl Action {
    /// Map a released key to its action. Shift (alone) remaps the pan keys to
    /// Z and the vertical cursor keys to Y.
    pub fn from_key(key: Key, modifiers: Modifiers, pan_step: f32) -> Option<Self> {
        let shift = modifiers.is_shift_only();
        let action = match key {
            Key::PanLeft => Self::pan(Axis::X, -pan_step),
            Key::PanRight => Self::pan(Axis::X, pan_step),
            Key::PanDown if shift => Self::pan(Axis::Z, -pan_step),
            Key::PanDown => Self::pan(Axis::Y, -pan_step),
            Key::PanUp if shift => Self::pan(Axis::Z, pan_step),
            Key::PanUp => Self::pan(Axis::Y, pan_step),
            Key::CursorUp if shift => Self::cursor(Axis::Y, 1),
            Key::CursorUp => Self::cursor(Axis::Z, -1),
            Key::CursorDown if shift => Self::cursor(Axis::Y, -1),
            Key::CursorDown => Self::cursor(Axis::Z, 1),
            Key::CursorLeft => Self::cursor(Axis::X, -1),
            Key::CursorRight => Self::cursor(Axis::X, 1),
            Key::Exit => return None,
        };
        Some(action)
    }

    /// Apply to the scene.
    pub fn apply(&self, scene: &mut Scene) {
        match *self {
            Self::PanCamera { axis, delta } => scene.pan_camera(axis, delta),
            Self::MoveCursor { axis, delta } => {
                scene.move_cursor(axis, delta);
            }
        }
    }

    fn pan(axis: Axis, delta: f32) -> Self {
        Self::PanCamera { axis, delta }
    }

    fn cursor(axis: Axis, delta: i32) -> Self {
        Self::MoveCursor { axis, delta }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(key: Key, modifiers: Modifiers) -> Option<Action> {
        Action::from_key(key, modifiers, 1.0)
    }

    #[test]
    fn pan_keys_map_to_camera_axes() {
        assert_eq!(
            map(Key::PanLeft, Modifiers::NONE),
            Some(Action::PanCamera {
                axis: Axis::X,
                delta: -1.0
            })
        );
        assert_eq!(
            map(Key::PanUp, Modifiers::NONE),
            Some(Action::PanCamera {
                axis: Axis::Y,
                delta: 1.0
            })
        );
        assert_eq!(
            map(Key::PanDown, Modifiers::SHIFT),
            Some(Action::PanCamera {
                axis: Axis::Z,
                delta: -1.0
            })
        );
    }

    #[test]
    fn shift_does_not_remap_horizontal_keys() {
        assert_eq!(
            map(Key::PanRight, Modifiers::SHIFT),
            map(Key::PanRight, Modifiers::NONE)
        );
        assert_eq!(
            map(Key::CursorLeft, Modifiers::SHIFT),
            map(Key::CursorLeft, Modifiers::NONE)
        );
    }

    #[test]
    fn cursor_keys_map_to_grid_axes() {
        assert_eq!(
            map(Key::CursorUp, Modifiers::NONE),
            Some(Action::MoveCursor {
                axis: Axis::Z,
                delta: -1
            })
        );
        assert_eq!(
            map(Key::CursorUp, Modifiers::SHIFT),
            Some(Action::MoveCursor {
                axis: Axis::Y,
                delta: 1
            })
        );
        assert_eq!(
            map(Key::CursorDown, Modifiers::SHIFT),
            Some(Action::MoveCursor {
                axis: Axis::Y,
                delta: -1
            })
        );
    }

    #[test]
    fn exit_key_has_no_action() {
        assert_eq!(map(Key::Exit, Modifiers::NONE), None);
    }

    #[test]
    fn pan_step_scales_delta() {
        let a = Action::from_key(Key::PanRight, Modifiers::NONE, 2.5);
        assert_eq!(
            a,
            Some(Action::PanCamera {
                axis: Axis::X,
                delta: 2.5
            })
        );
    }
}
