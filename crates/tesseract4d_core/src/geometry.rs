//! Tesseract (4D Hypercube) geometry store
//!
//! A tesseract has 16 vertices (all combinations of ±1 for x,y,z,w),
//! 32 edges, 24 square faces, and 8 cubic cells.
//!
//! Vertex `i` has axis `k` at +1 when bit `k` of `i` is set (x is bit 0,
//! w is bit 3). The index tables below refer to vertices by that number and
//! never change; only the coordinates of the vertices move.

use std::fmt;

use tesseract4d_math::Vec4;

/// Number of vertices of a tesseract
pub const VERTEX_COUNT: usize = 16;

/// The 16 unit vertices in identity order
pub const CANONICAL_VERTICES: [Vec4; VERTEX_COUNT] = [
    Vec4::new(-1.0, -1.0, -1.0, -1.0), // 0  = 0b0000
    Vec4::new( 1.0, -1.0, -1.0, -1.0), // 1  = 0b0001
    Vec4::new(-1.0,  1.0, -1.0, -1.0), // 2  = 0b0010
    Vec4::new( 1.0,  1.0, -1.0, -1.0), // 3  = 0b0011
    Vec4::new(-1.0, -1.0,  1.0, -1.0), // 4  = 0b0100
    Vec4::new( 1.0, -1.0,  1.0, -1.0), // 5  = 0b0101
    Vec4::new(-1.0,  1.0,  1.0, -1.0), // 6  = 0b0110
    Vec4::new( 1.0,  1.0,  1.0, -1.0), // 7  = 0b0111
    Vec4::new(-1.0, -1.0, -1.0,  1.0), // 8  = 0b1000
    Vec4::new( 1.0, -1.0, -1.0,  1.0), // 9  = 0b1001
    Vec4::new(-1.0,  1.0, -1.0,  1.0), // 10 = 0b1010
    Vec4::new( 1.0,  1.0, -1.0,  1.0), // 11 = 0b1011
    Vec4::new(-1.0, -1.0,  1.0,  1.0), // 12 = 0b1100
    Vec4::new( 1.0, -1.0,  1.0,  1.0), // 13 = 0b1101
    Vec4::new(-1.0,  1.0,  1.0,  1.0), // 14 = 0b1110
    Vec4::new( 1.0,  1.0,  1.0,  1.0), // 15 = 0b1111
];

/// Shaded faces as a triangle list: 24 squares, two triangles each
///
/// Every square `a, b, c, d` (with `a`/`d` diagonal) is split as
/// `a b c` + `b c d`.
#[rustfmt::skip]
pub const FACE_INDICES: [u16; 144] = [
    // cube at w = -1
    0, 1, 2, 1, 2, 3,
    4, 5, 6, 5, 6, 7,
    0, 4, 2, 4, 2, 6,
    0, 1, 4, 1, 4, 5,
    2, 3, 6, 3, 6, 7,
    1, 3, 5, 3, 5, 7,

    // cube at w = +1
    8, 9, 10, 9, 10, 11,
    12, 13, 14, 13, 14, 15,
    8, 12, 10, 12, 10, 14,
    8, 9, 12, 9, 12, 13,
    10, 11, 14, 11, 14, 15,
    9, 11, 13, 11, 13, 15,

    // squares spanned by x and w
    0, 1, 8, 1, 8, 9,
    2, 3, 10, 3, 10, 11,
    4, 5, 12, 5, 12, 13,
    6, 7, 14, 7, 14, 15,

    // squares spanned by z and w
    0, 4, 8, 4, 8, 12,
    2, 6, 10, 6, 10, 14,
    1, 5, 9, 5, 9, 13,
    3, 7, 11, 7, 11, 15,

    // squares spanned by y and w
    0, 2, 8, 2, 8, 10,
    1, 3, 9, 3, 9, 11,
    4, 6, 12, 6, 12, 14,
    5, 7, 13, 7, 13, 15,
];

/// Wireframe edges as a line list: 12 + 12 cube edges and 8 connecting edges
#[rustfmt::skip]
pub const EDGE_INDICES: [u16; 64] = [
    // cube at w = -1
    0, 1, 1, 3, 3, 2, 2, 0,
    4, 5, 5, 7, 7, 6, 6, 4,
    0, 4, 1, 5, 2, 6, 3, 7,

    // cube at w = +1
    8, 9, 9, 11, 11, 10, 10, 8,
    12, 13, 13, 15, 15, 14, 14, 12,
    8, 12, 9, 13, 10, 14, 11, 15,

    // along w
    0, 8, 1, 9, 2, 10, 3, 11,
    4, 12, 5, 13, 6, 14, 7, 15,
];

/// A malformed index table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    /// An index does not name one of the 16 vertices
    IndexOutOfRange { position: usize, index: u16 },
    /// The table length is not a whole number of primitives
    PartialPrimitive { len: usize, stride: usize },
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopologyError::IndexOutOfRange { position, index } => write!(
                f,
                "index {} at position {} is outside 0..{}",
                index, position, VERTEX_COUNT
            ),
            TopologyError::PartialPrimitive { len, stride } => write!(
                f,
                "table of {} indices is not a multiple of {}",
                len, stride
            ),
        }
    }
}

impl std::error::Error for TopologyError {}

/// Check that `indices` only names valid vertices and holds whole primitives
/// of `stride` indices each
pub fn validate_indices(indices: &[u16], stride: usize) -> Result<(), TopologyError> {
    if stride == 0 || indices.len() % stride != 0 {
        return Err(TopologyError::PartialPrimitive { len: indices.len(), stride });
    }
    match indices.iter().position(|&i| i as usize >= VERTEX_COUNT) {
        Some(position) => Err(TopologyError::IndexOutOfRange {
            position,
            index: indices[position],
        }),
        None => Ok(()),
    }
}

/// Read-only view of the static index tables
#[derive(Clone, Copy, Debug)]
pub struct Topology {
    faces: &'static [u16],
    edges: &'static [u16],
}

impl Topology {
    /// The tesseract's topology
    ///
    /// # Panics
    /// Panics if either table is malformed; the tables are constants so this
    /// only fires on a programming error.
    pub fn new() -> Self {
        Self::from_tables(&FACE_INDICES, &EDGE_INDICES)
            .unwrap_or_else(|e| panic!("invalid tesseract topology: {}", e))
    }

    /// Build a topology from arbitrary tables, validating them
    pub fn from_tables(faces: &'static [u16], edges: &'static [u16]) -> Result<Self, TopologyError> {
        validate_indices(faces, 3)?;
        validate_indices(edges, 2)?;
        Ok(Self { faces, edges })
    }

    /// Triangle list indices
    #[inline]
    pub fn faces(&self) -> &'static [u16] {
        self.faces
    }

    /// Line list indices
    #[inline]
    pub fn edges(&self) -> &'static [u16] {
        self.edges
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.faces.len() / 3
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn axis_bits(i: usize) -> [bool; 4] {
        [i & 1 != 0, i & 2 != 0, i & 4 != 0, i & 8 != 0]
    }

    #[test]
    fn test_canonical_vertices_are_unit_corners() {
        for (i, v) in CANONICAL_VERTICES.iter().enumerate() {
            for (axis, bit) in axis_bits(i).iter().enumerate() {
                let expected = if *bit { 1.0 } else { -1.0 };
                assert_eq!(v.axis(axis), expected, "vertex {} axis {}", i, axis);
            }
        }
    }

    #[test]
    fn test_canonical_vertices_are_distinct() {
        let set: HashSet<[i32; 4]> = CANONICAL_VERTICES
            .iter()
            .map(|v| v.to_array().map(|c| c as i32))
            .collect();
        assert_eq!(set.len(), VERTEX_COUNT);
    }

    #[test]
    fn test_table_lengths() {
        assert_eq!(FACE_INDICES.len(), 144);
        assert_eq!(EDGE_INDICES.len(), 64);

        let topology = Topology::new();
        assert_eq!(topology.triangle_count(), 48);
        assert_eq!(topology.edge_count(), 32);
    }

    #[test]
    fn test_all_indices_in_range() {
        for &i in FACE_INDICES.iter().chain(EDGE_INDICES.iter()) {
            assert!((i as usize) < VERTEX_COUNT, "Vertex index {} out of range", i);
        }
    }

    #[test]
    fn test_edges_are_the_32_hypercube_edges() {
        // Two vertices share an edge exactly when their ids differ in one bit
        let mut seen = HashSet::new();
        for pair in EDGE_INDICES.chunks(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!((a ^ b).count_ones(), 1, "({}, {}) is not an edge", a, b);
            assert!(seen.insert((a.min(b), a.max(b))), "edge ({}, {}) repeated", a, b);
        }
        assert_eq!(seen.len(), 32);
    }

    #[test]
    fn test_faces_are_the_24_squares() {
        let mut squares = HashSet::new();
        for quad in FACE_INDICES.chunks(6) {
            let mut corners: Vec<u16> = quad.to_vec();
            corners.sort();
            corners.dedup();
            assert_eq!(corners.len(), 4, "face {:?} should have 4 corners", quad);

            // A square face keeps two axes fixed across its corners
            let varying = corners.iter().fold(0u16, |acc, &c| acc | (c ^ corners[0]));
            assert_eq!(varying.count_ones(), 2, "face {:?} is not a square", quad);

            // Both triangles share the diagonal b-c
            assert_eq!(quad[1], quad[3]);
            assert_eq!(quad[2], quad[4]);

            squares.insert(corners);
        }
        assert_eq!(squares.len(), 24);
    }

    #[test]
    fn test_validate_rejects_bad_index() {
        let err = validate_indices(&[0, 1, 16], 3).unwrap_err();
        assert_eq!(err, TopologyError::IndexOutOfRange { position: 2, index: 16 });
        assert!(err.to_string().contains("16"));
    }

    #[test]
    fn test_validate_rejects_partial_primitive() {
        let err = validate_indices(&[0, 1, 2, 3], 3).unwrap_err();
        assert_eq!(err, TopologyError::PartialPrimitive { len: 4, stride: 3 });
    }

    #[test]
    fn test_from_tables_rejects_bad_edges() {
        static BAD: [u16; 2] = [3, 99];
        assert!(Topology::from_tables(&FACE_INDICES, &BAD).is_err());
    }
}
