//! Geometry Builder: cube vertices and quad faces in object space.
//!
//! # Invariants
//! - A cube owns exactly 8 vertices and 6 quads, in `Face::ALL` order.
//! - Every quad index is in `0..8`; winding is counter-clockwise seen from
//!   outside, so back-face culling keeps the outer faces.
//! - Building is pure: the same size and palette give equal geometry.

mod cube;

pub use cube::{
    CORNER_SIGNS, CURSOR_HALF_EXTENT, Cube, FACE_INDICES, Face, Quad, STANDARD_HALF_EXTENT,
    Vertex, build_cube, solid_cube, standard_cube, standard_palette,
};
