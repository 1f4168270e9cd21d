use std::str::FromStr;

/// Logical keys the viewer responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    PanLeft,
    PanRight,
    PanDown,
    PanUp,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Modifier keys held during a key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    pub logo: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        control: false,
        alt: false,
        logo: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ..Modifiers::NONE
    };

    /// Shift held with no other modifier. Only this combination remaps axes.
    pub fn is_shift_only(&self) -> bool {
        *self == Self::SHIFT
    }
}

/// A single key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub state: KeyState,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn press(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            state: KeyState::Pressed,
            modifiers,
        }
    }

    pub fn release(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            state: KeyState::Released,
            modifiers,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum KeyParseError {
    #[error("unknown key name: {0:?}")]
    UnknownKey(String),
    #[error("unknown modifier: {0:?}")]
    UnknownModifier(String),
}

impl FromStr for Key {
    type Err = KeyParseError;

    /// Accepts action names (`cursor-up`) and the default bindings
    /// (`h`, `j`, `k`, `l`, arrow names, `escape`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.to_ascii_lowercase().as_str() {
            "h" | "pan-left" => Key::PanLeft,
            "l" | "pan-right" => Key::PanRight,
            "j" | "pan-down" => Key::PanDown,
            "k" | "pan-up" => Key::PanUp,
            "up" | "cursor-up" => Key::CursorUp,
            "down" | "cursor-down" => Key::CursorDown,
            "left" | "cursor-left" => Key::CursorLeft,
            "right" | "cursor-right" => Key::CursorRight,
            "esc" | "escape" | "exit" => Key::Exit,
            _ => return Err(KeyParseError::UnknownKey(s.to_string())),
        };
        Ok(key)
    }
}

impl FromStr for KeyEvent {
    type Err = KeyParseError;

    /// Parse a chord such as `shift+up` into a key release.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let key_name = parts.pop().unwrap_or_default();
        let mut modifiers = Modifiers::NONE;
        for part in parts {
            match part.to_ascii_lowercase().as_str() {
                "shift" => modifiers.shift = true,
                "ctrl" | "control" => modifiers.control = true,
                "alt" => modifiers.alt = true,
                "super" | "logo" => modifiers.logo = true,
                _ => return Err(KeyParseError::UnknownModifier(part.to_string())),
            }
        }
        Ok(KeyEvent::release(key_name.parse()?, modifiers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bindings_and_action_names() {
        assert_eq!("h".parse::<Key>(), Ok(Key::PanLeft));
        assert_eq!("pan-right".parse::<Key>(), Ok(Key::PanRight));
        assert_eq!("Up".parse::<Key>(), Ok(Key::CursorUp));
        assert_eq!("escape".parse::<Key>(), Ok(Key::Exit));
        assert!(matches!(
            "q".parse::<Key>(),
            Err(KeyParseError::UnknownKey(_))
        ));
    }

    #[test]
    fn parses_chords_as_releases() {
        let ev: KeyEvent = "shift+down".parse().unwrap();
        assert_eq!(ev, KeyEvent::release(Key::CursorDown, Modifiers::SHIFT));
        let plain: KeyEvent = "right".parse().unwrap();
        assert_eq!(plain.modifiers, Modifiers::NONE);
        assert!(matches!(
            "hyper+up".parse::<KeyEvent>(),
            Err(KeyParseError::UnknownModifier(_))
        ));
    }

    #[test]
    fn shift_only_excludes_other_modifiers() {
        assert!(Modifiers::SHIFT.is_shift_only());
        assert!(!Modifiers::NONE.is_shift_only());
        let shift_ctrl = Modifiers {
            control: true,
            ..Modifiers::SHIFT
        };
        assert!(!shift_ctrl.is_shift_only());
    }
}
