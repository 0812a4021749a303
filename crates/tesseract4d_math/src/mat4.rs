//! 4x4 Matrix utilities
//!
//! One matrix type serves two jobs: 4D rotations applied to the hypercube's
//! vertices, and the 3D world/view/projection transforms handed to the GPU
//! (homogeneous coordinates). Matrices are column-major, `m[col][row]`, which
//! is also the WGSL `mat4x4<f32>` layout.

use crate::{RotationPlane, Vec4};

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Create a rotation matrix in one of the 6 planes of 4D space.
///
/// A positive `angle` (radians) carries the plane's second axis toward its
/// first, so for `XZ`:
///
/// ```text
/// x' =  x cos(a) + z sin(a)
/// z' = -x sin(a) + z cos(a)
/// ```
///
/// # Example
/// ```
/// use tesseract4d_math::{mat4, RotationPlane, Vec4};
/// let m = mat4::plane_rotation(RotationPlane::XZ, std::f32::consts::FRAC_PI_2);
/// let v = mat4::transform(m, Vec4::Z);
/// assert!(v.approx_eq(Vec4::X, 1e-6));
/// ```
pub fn plane_rotation(plane: RotationPlane, angle: f32) -> Mat4 {
    let (a, b) = plane.axes();
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;

    m[a][a] = cs;
    m[b][b] = cs;
    m[b][a] = sn;
    m[a][b] = -sn;

    m
}

/// Uniform 3D scale in homogeneous coordinates (W row untouched)
pub fn scale(factor: f32) -> Mat4 {
    let mut m = IDENTITY;
    m[0][0] = factor;
    m[1][1] = factor;
    m[2][2] = factor;
    m
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a Vec4 by a 4x4 matrix (column-major)
///
/// result = M * v
pub fn transform(m: Mat4, v: Vec4) -> Vec4 {
    Vec4::new(
        m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z + m[3][0] * v.w,
        m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z + m[3][1] * v.w,
        m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z + m[3][2] * v.w,
        m[0][3] * v.x + m[1][3] * v.y + m[2][3] * v.z + m[3][3] * v.w,
    )
}

/// Get a column vector from a matrix
pub fn get_column(m: Mat4, col: usize) -> Vec4 {
    Vec4::from_array(m[col])
}

/// Transpose a matrix
pub fn transpose(m: Mat4) -> Mat4 {
    [
        [m[0][0], m[1][0], m[2][0], m[3][0]],
        [m[0][1], m[1][1], m[2][1], m[3][1]],
        [m[0][2], m[1][2], m[2][2], m[3][2]],
        [m[0][3], m[1][3], m[2][3], m[3][3]],
    ]
}

/// Determinant by cofactor expansion along the first row
pub fn determinant(m: Mat4) -> f32 {
    // 3x3 minor over rows 1..4, skipping one column
    let minor = |skip_col: usize| -> f32 {
        let mut cols = [0usize; 3];
        for (slot, c) in (0..4).filter(|&c| c != skip_col).enumerate() {
            cols[slot] = c;
        }
        let e = |r: usize, c: usize| m[cols[c]][r];
        e(1, 0) * (e(2, 1) * e(3, 2) - e(3, 1) * e(2, 2))
            - e(1, 1) * (e(2, 0) * e(3, 2) - e(3, 0) * e(2, 2))
            + e(1, 2) * (e(2, 0) * e(3, 1) - e(3, 0) * e(2, 1))
    };

    m[0][0] * minor(0) - m[1][0] * minor(1) + m[2][0] * minor(2) - m[3][0] * minor(3)
}

/// Largest deviation of `m^T m` from the identity
///
/// Zero for a perfect rotation; grows as repeated products drift.
pub fn orthonormality_error(m: Mat4) -> f32 {
    let mut worst = 0.0f32;
    for i in 0..4 {
        for j in 0..4 {
            let expected = if i == j { 1.0 } else { 0.0 };
            let d = get_column(m, i).dot(get_column(m, j));
            worst = worst.max((d - expected).abs());
        }
    }
    worst
}

/// Re-orthonormalize the columns with modified Gram-Schmidt
///
/// Column order is kept, so a near-rotation stays on the same side
/// (determinant +1).
pub fn orthonormalize(m: Mat4) -> Mat4 {
    let mut cols = [
        get_column(m, 0),
        get_column(m, 1),
        get_column(m, 2),
        get_column(m, 3),
    ];

    for i in 0..4 {
        for j in 0..i {
            let proj = cols[i].dot(cols[j]);
            cols[i] = cols[i] - cols[j] * proj;
        }
        cols[i] = cols[i].normalized();
    }

    [
        cols[0].to_array(),
        cols[1].to_array(),
        cols[2].to_array(),
        cols[3].to_array(),
    ]
}

/// Right-handed perspective projection with a [0, 1] depth range
///
/// `fov_y` is the vertical field of view in radians.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let nf = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, far * nf, -1.0],
        [0.0, 0.0, near * far * nf, 0.0],
    ]
}

/// Right-handed look-at view matrix
pub fn look_at(eye: [f32; 3], target: [f32; 3], up: [f32; 3]) -> Mat4 {
    let f = normalize3([
        target[0] - eye[0],
        target[1] - eye[1],
        target[2] - eye[2],
    ]);
    let s = normalize3(cross(f, up));
    let u = cross(s, f);

    [
        [s[0], u[0], -f[0], 0.0],
        [s[1], u[1], -f[1], 0.0],
        [s[2], u[2], -f[2], 0.0],
        [-dot3(s, eye), -dot3(u, eye), dot3(f, eye), 1.0],
    ]
}

fn normalize3(v: [f32; 3]) -> [f32; 3] {
    let len = dot3(v, v).sqrt();
    if len > 0.0 {
        [v[0] / len, v[1] / len, v[2] / len]
    } else {
        v
    }
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot3(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}
