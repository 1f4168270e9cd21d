//! Input Controller: discrete key events mapped to scene mutations.
//!
//! # Invariants
//! - Only key releases act; presses and repeats are ignored (except the exit
//!   key, which is tracked while held).
//! - Each release produces at most one single-axis action.
//! - The windowing layer maps physical keys to [`Key`]; nothing here depends
//!   on a particular window system.

pub mod action;
pub mod controller;
pub mod key;

pub use action::Action;
pub use controller::InputController;
pub use key::{Key, KeyEvent, KeyParseError, KeyState, Modifiers};
