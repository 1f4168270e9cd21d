use blockgrid_common::Orientation;
use blockgrid_geometry::{Cube, standard_cube};

/// One renderable grid unit: a cube and its own rotation.
///
/// Nothing drives the orientation yet, so it stays at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub orientation: Orientation,
    pub cube: Cube,
}

impl Block {
    pub fn new(cube: Cube) -> Self {
        Self {
            orientation: Orientation::default(),
            cube,
        }
    }

    /// A ground block with the standard palette.
    pub fn ground(half_extent: f32) -> Self {
        Self::new(standard_cube(half_extent))
    }
}
