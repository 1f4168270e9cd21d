//! Default key bindings: vi-style pan keys, arrows for the cursor.

use blockgrid_input::{Key, KeyEvent, KeyState, Modifiers};
use winit::event::ElementState;
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

pub fn key(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::KeyH => Key::PanLeft,
        KeyCode::KeyL => Key::PanRight,
        KeyCode::KeyJ => Key::PanDown,
        KeyCode::KeyK => Key::PanUp,
        KeyCode::ArrowUp => Key::CursorUp,
        KeyCode::ArrowDown => Key::CursorDown,
        KeyCode::ArrowLeft => Key::CursorLeft,
        KeyCode::ArrowRight => Key::CursorRight,
        KeyCode::Escape => Key::Exit,
        _ => return None,
    };
    Some(key)
}

pub fn modifiers(state: ModifiersState) -> Modifiers {
    Modifiers {
        shift: state.shift_key(),
        control: state.control_key(),
        alt: state.alt_key(),
        logo: state.super_key(),
    }
}

/// Convert a window key event. Auto-repeats and unbound keys yield `None`.
pub fn translate(event: &winit::event::KeyEvent, modifiers: Modifiers) -> Option<KeyEvent> {
    if event.repeat {
        return None;
    }
    let PhysicalKey::Code(code) = event.physical_key else {
        return None;
    };
    let state = match event.state {
        ElementState::Pressed => KeyState::Pressed,
        ElementState::Released => KeyState::Released,
    };
    Some(KeyEvent {
        key: key(code)?,
        state,
        modifiers,
    })
}
