use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// An RGB color with channels in `[0, 1]`.
///
/// `Color` is a shared handle: cloning it does not copy the channels, so a
/// palette entry can be referenced by several faces at once. The channels
/// cannot be changed after construction.
#[derive(Clone)]
pub struct Color(Rc<[f32; 3]>);

impl Color {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        debug_assert!(
            [r, g, b].iter().all(|c| (0.0..=1.0).contains(c)),
            "color channels must be normalized, got ({r}, {g}, {b})"
        );
        Self(Rc::new([r, g, b]))
    }

    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    pub fn rgb(&self) -> [f32; 3] {
        *self.0
    }

    pub fn r(&self) -> f32 {
        self.0[0]
    }

    pub fn g(&self) -> f32 {
        self.0[1]
    }

    pub fn b(&self) -> f32 {
        self.0[2]
    }

    /// True when both handles point at the same palette entry.
    pub fn shares_storage(&self, other: &Color) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Colors compare by channel value, not by identity.
impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.rgb() == other.rgb()
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb();
        write!(f, "Color({r:.2}, {g:.2}, {b:.2})")
    }
}

/// Rotation state in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub pitch: f32,
    pub roll: f32,
    pub yaw: f32,
}

impl Orientation {
    pub fn new(pitch: f32, roll: f32, yaw: f32) -> Self {
        Self { pitch, roll, yaw }
    }
}

/// Integer position in grid space. `y` counts layers above the ground plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridCoord {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// A world or grid axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}
