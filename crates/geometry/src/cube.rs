use blockgrid_common::{Color, UNIT};
use glam::Vec3;

/// A cube corner in object space.
pub type Vertex = Vec3;

/// Half extent of a ground block. Slightly under half a unit so neighbouring
/// blocks leave a visible seam.
pub const STANDARD_HALF_EXTENT: f32 = 0.49;

/// Half extent of the cursor cube. It encloses a ground block so the
/// highlight shows around it.
pub const CURSOR_HALF_EXTENT: f32 = UNIT / 2.0;

/// Corner signs indexed by vertex number; scaled by the half extent.
#[rustfmt::skip]
pub const CORNER_SIGNS: [[f32; 3]; 8] = [
    [-1.0,  1.0,  1.0], // left, top, front
    [ 1.0,  1.0,  1.0], // right, top, front
    [ 1.0,  1.0, -1.0], // right, top, back
    [-1.0,  1.0, -1.0], // left, top, back
    [-1.0, -1.0,  1.0], // left, bottom, front
    [ 1.0, -1.0,  1.0], // right, bottom, front
    [ 1.0, -1.0, -1.0], // right, bottom, back
    [-1.0, -1.0, -1.0], // left, bottom, back
];

/// Vertex indices per face, in `Face::ALL` order.
#[rustfmt::skip]
pub const FACE_INDICES: [[usize; 4]; 6] = [
    [0, 1, 2, 3], // top
    [0, 3, 7, 4], // left
    [3, 2, 6, 7], // back
    [2, 1, 5, 6], // right
    [0, 4, 5, 1], // front
    [4, 7, 6, 5], // bottom
];

/// One of the six cube faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Top,
    Left,
    Back,
    Right,
    Front,
    Bottom,
}

impl Face {
    /// All faces in storage order.
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Left,
        Face::Back,
        Face::Right,
        Face::Front,
        Face::Bottom,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// A cube face: four indices into the owning cube's vertices and a color.
#[derive(Debug, Clone, PartialEq)]
pub struct Quad {
    pub indices: [usize; 4],
    pub color: Color,
}

impl Quad {
    /// Resolve the indices against a vertex array, in winding order.
    pub fn corners(&self, vertices: &[Vertex; 8]) -> [Vertex; 4] {
        self.indices.map(|i| vertices[i])
    }
}

/// Eight corners and six colored quads around the local origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    vertices: [Vertex; 8],
    quads: [Quad; 6],
    half_extent: f32,
}

impl Cube {
    pub fn vertices(&self) -> &[Vertex; 8] {
        &self.vertices
    }

    pub fn quads(&self) -> &[Quad; 6] {
        &self.quads
    }

    pub fn quad(&self, face: Face) -> &Quad {
        &self.quads[face.index()]
    }

    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }

    /// Quads resolved to corner positions, with their colors.
    pub fn faces(&self) -> impl Iterator<Item = (&Color, [Vertex; 4])> + '_ {
        self.quads
            .iter()
            .map(|q| (&q.color, q.corners(&self.vertices)))
    }
}

/// Build an axis-aligned cube of side `2 * half_extent` centered on the
/// origin. `colors` are given in `Face::ALL` order.
pub fn build_cube(half_extent: f32, colors: [Color; 6]) -> Cube {
    debug_assert!(half_extent > 0.0, "half extent must be positive");
    let vertices = CORNER_SIGNS.map(|s| Vec3::from_array(s) * half_extent);
    let quads = std::array::from_fn(|i| Quad {
        indices: FACE_INDICES[i],
        color: colors[i].clone(),
    });
    Cube {
        vertices,
        quads,
        half_extent,
    }
}

/// The ground block palette: dark red top, yellow left, red back, green
/// right, orange front, blue bottom.
pub fn standard_palette() -> [Color; 6] {
    [
        Color::new(0.5, 0.0, 0.0),
        Color::new(1.0, 1.0, 0.3),
        Color::new(1.0, 0.0, 0.0),
        Color::new(0.0, 1.0, 0.0),
        Color::new(0.9, 0.5, 0.0),
        Color::new(0.0, 0.0, 1.0),
    ]
}

/// A ground block cube with the standard palette. Ground blocks default to
/// [`STANDARD_HALF_EXTENT`].
pub fn standard_cube(half_extent: f32) -> Cube {
    build_cube(half_extent, standard_palette())
}

/// A cube whose six faces all share `color`.
pub fn solid_cube(half_extent: f32, color: &Color) -> Cube {
    build_cube(half_extent, std::array::from_fn(|_| color.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn outward_normal(face: Face) -> Vec3 {
        match face {
            Face::Top => Vec3::Y,
            Face::Left => Vec3::NEG_X,
            Face::Back => Vec3::NEG_Z,
            Face::Right => Vec3::X,
            Face::Front => Vec3::Z,
            Face::Bottom => Vec3::NEG_Y,
        }
    }

    fn bits(v: Vec3) -> (u32, u32, u32) {
        (v.x.to_bits(), v.y.to_bits(), v.z.to_bits())
    }

    #[test]
    fn cube_has_eight_distinct_corners() {
        for h in [0.01, 0.49, 0.5, 1.0, 7.25] {
            let cube = build_cube(h, standard_palette());
            let distinct: HashSet<_> = cube.vertices().iter().map(|v| bits(*v)).collect();
            assert_eq!(distinct.len(), 8);
            for v in cube.vertices() {
                assert_eq!(v.abs(), Vec3::splat(h));
            }
        }
    }

    #[test]
    fn quads_reference_four_distinct_valid_indices() {
        let cube = standard_cube(STANDARD_HALF_EXTENT);
        assert_eq!(cube.quads().len(), 6);
        for quad in cube.quads() {
            let distinct: HashSet<_> = quad.indices.iter().copied().collect();
            assert_eq!(distinct.len(), 4);
            assert!(quad.indices.iter().all(|&i| i < 8));
        }
    }

    #[test]
    fn every_vertex_is_used_by_three_faces() {
        let mut uses = [0usize; 8];
        for face in FACE_INDICES {
            for i in face {
                uses[i] += 1;
            }
        }
        assert_eq!(uses, [3; 8]);
    }

    #[test]
    fn windings_face_outward() {
        let cube = build_cube(0.5, standard_palette());
        for face in Face::ALL {
            let [a, b, c, d] = cube.quad(face).corners(cube.vertices());
            let n = (b - a).cross(c - a).normalize();
            assert!(n.abs_diff_eq(outward_normal(face), 1e-6), "{face:?} normal {n}");
            // Quad is planar: the fourth corner lies on the same face.
            assert!((d - a).dot(n).abs() < 1e-6);
            let center = (a + b + c + d) / 4.0;
            assert!(center.dot(outward_normal(face)) > 0.0);
        }
    }

    #[test]
    fn palette_maps_to_faces_in_order() {
        let cube = standard_cube(STANDARD_HALF_EXTENT);
        assert_eq!(cube.quad(Face::Top).color.rgb(), [0.5, 0.0, 0.0]);
        assert_eq!(cube.quad(Face::Left).color.rgb(), [1.0, 1.0, 0.3]);
        assert_eq!(cube.quad(Face::Back).color.rgb(), [1.0, 0.0, 0.0]);
        assert_eq!(cube.quad(Face::Right).color.rgb(), [0.0, 1.0, 0.0]);
        assert_eq!(cube.quad(Face::Front).color.rgb(), [0.9, 0.5, 0.0]);
        assert_eq!(cube.quad(Face::Bottom).color.rgb(), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn building_twice_gives_equal_geometry() {
        let a = standard_cube(STANDARD_HALF_EXTENT);
        let b = standard_cube(STANDARD_HALF_EXTENT);
        assert_eq!(a, b);
        assert!(!a.quad(Face::Top).color.shares_storage(&b.quad(Face::Top).color));
    }

    #[test]
    fn solid_cube_shares_one_color() {
        let white = Color::white();
        let cube = solid_cube(CURSOR_HALF_EXTENT, &white);
        for quad in cube.quads() {
            assert!(quad.color.shares_storage(&white));
        }
        assert_eq!(cube.half_extent(), 0.5);
    }

    #[test]
    fn faces_iterator_resolves_corners() {
        let cube = build_cube(2.0, standard_palette());
        let faces: Vec<_> = cube.faces().collect();
        assert_eq!(faces.len(), 6);
        let (color, corners) = &faces[0];
        assert_eq!(color.rgb(), [0.5, 0.0, 0.0]);
        assert!(corners.iter().all(|c| c.y == 2.0));
    }
}
