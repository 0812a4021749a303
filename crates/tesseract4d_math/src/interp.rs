//! Scalar interpolation

/// Cubic Hermite step from 0 to 1 as `x` moves from `edge0` to `edge1`
///
/// The result is clamped to [0, 1] and has zero slope at both edges.
/// With coincident edges this degrades to a hard step at `edge0`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge0 == edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
