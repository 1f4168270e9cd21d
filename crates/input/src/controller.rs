use blockgrid_common::ViewerConfig;
use blockgrid_kernel::Scene;

use crate::action::Action;
use crate::key::{Key, KeyEvent, KeyState};

/// Applies key releases to a [`Scene`] and tracks the exit key.
#[derive(Debug, Clone)]
pub struct InputController {
    pan_step: f32,
    exit_held: bool,
}

impl Default for InputController {
    fn default() -> Self {
        Self::from_config(&ViewerConfig::default())
    }
}

impl InputController {
    pub fn new(pan_step: f32) -> Self {
        Self {
            pan_step,
            exit_held: false,
        }
    }

    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(config.pan_step)
    }

    /// Handle one key event, applying its action immediately.
    ///
    /// Returns the applied action, or `None` for presses and unbound keys.
    pub fn handle(&mut self, scene: &mut Scene, event: KeyEvent) -> Option<Action> {
        if event.key == Key::Exit {
            self.exit_held = event.state == KeyState::Pressed;
            return None;
        }
        if event.state != KeyState::Released {
            return None;
        }
        let action = Action::from_key(event.key, event.modifiers, self.pan_step)?;
        action.apply(scene);
        tracing::debug!(key = ?event.key, ?action, "input applied");
        Some(action)
    }

    /// Handle a batch of events in order.
    pub fn handle_all<I>(&mut self, scene: &mut Scene, events: I) -> usize
    where
        I: IntoIterator<Item = KeyEvent>,
    {
        events
            .into_iter()
            .filter_map(|ev| self.handle(scene, ev))
            .count()
    }

    /// True while the exit key is held down.
    pub fn exit_requested(&self) -> bool {
        self.exit_held
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Modifiers;
    use blockgrid_common::GridCoord;

    fn scene(width: u32, depth: u32) -> Scene {
        Scene::new(ViewerConfig::with_grid(width, depth)).unwrap()
    }

    fn release(key: Key) -> KeyEvent {
        KeyEvent::release(key, Modifiers::NONE)
    }

    #[test]
    fn presses_are_ignored() {
        let mut s = scene(5, 5);
        let mut input = InputController::default();
        let before = s.camera().position;
        assert!(
            input
                .handle(&mut s, KeyEvent::press(Key::PanRight, Modifiers::NONE))
                .is_none()
        );
        assert_eq!(s.camera().position, before);
    }

    #[test]
    fn cursor_scenario_on_default_grid() {
        let mut s = scene(50, 50);
        let mut input = InputController::default();
        input.handle(&mut s, release(Key::CursorRight));
        input.handle(&mut s, KeyEvent::release(Key::CursorUp, Modifiers::SHIFT));
        input.handle(&mut s, release(Key::CursorDown));
        assert_eq!(s.cursor().position(), GridCoord::new(1, 1, 1));
    }

    #[test]
    fn pan_right_twice_moves_camera_x() {
        let mut s = scene(50, 50);
        let mut input = InputController::default();
        assert_eq!(s.camera().position.z, -8.0);
        let applied = input.handle_all(&mut s, [release(Key::PanRight), release(Key::PanRight)]);
        assert_eq!(applied, 2);
        assert_eq!(s.camera().position.x, 2.0);
        assert_eq!(s.camera().position.z, -8.0);
    }

    #[test]
    fn shift_pan_moves_camera_z() {
        let mut s = scene(5, 5);
        let mut input = InputController::default();
        input.handle(&mut s, KeyEvent::release(Key::PanUp, Modifiers::SHIFT));
        assert_eq!(s.camera().position.z, -7.0);
        assert_eq!(s.camera().position.y, 0.0);
        input.handle(&mut s, release(Key::PanDown));
        assert_eq!(s.camera().position.y, -1.0);
    }

    #[test]
    fn cursor_left_from_zero_stays_zero() {
        let mut s = scene(10, 10);
        let mut input = InputController::default();
        for _ in 0..20 {
            input.handle(&mut s, release(Key::CursorLeft));
        }
        assert_eq!(s.cursor().position().x, 0);
    }

    #[test]
    fn cursor_right_width_times_stops_at_edge() {
        let mut s = scene(10, 4);
        let mut input = InputController::default();
        for _ in 0..10 {
            input.handle(&mut s, release(Key::CursorRight));
        }
        assert_eq!(s.cursor().position().x, 9);
    }

    #[test]
    fn cursor_z_bounds() {
        let mut s = scene(4, 6);
        let mut input = InputController::default();
        input.handle(&mut s, release(Key::CursorUp));
        assert_eq!(s.cursor().position().z, 0);
        for _ in 0..6 {
            input.handle(&mut s, release(Key::CursorDown));
        }
        assert_eq!(s.cursor().position().z, 5);
    }

    #[test]
    fn vertical_cursor_has_no_upper_bound() {
        // Current behavior: CursorY is only clamped below.
        let mut s = scene(2, 2);
        let mut input = InputController::default();
        input.handle(&mut s, KeyEvent::release(Key::CursorDown, Modifiers::SHIFT));
        assert_eq!(s.cursor().position().y, 0);
        for _ in 0..500 {
            input.handle(&mut s, KeyEvent::release(Key::CursorUp, Modifiers::SHIFT));
        }
        assert_eq!(s.cursor().position().y, 500);
    }

    #[test]
    fn exit_key_tracks_hold_state() {
        let mut s = scene(1, 1);
        let mut input = InputController::default();
        assert!(!input.exit_requested());
        input.handle(&mut s, KeyEvent::press(Key::Exit, Modifiers::NONE));
        assert!(input.exit_requested());
        input.handle(&mut s, release(Key::Exit));
        assert!(!input.exit_requested());
    }

    #[test]
    fn shift_with_control_does_not_remap() {
        let mut s = scene(5, 5);
        let mut input = InputController::default();
        let mods = Modifiers {
            control: true,
            ..Modifiers::SHIFT
        };
        input.handle(&mut s, KeyEvent::release(Key::CursorDown, mods));
        assert_eq!(s.cursor().position(), GridCoord::new(0, 0, 1));
    }
}
