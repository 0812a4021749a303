//! 4D Vector type

use bytemuck::{Pod, Zeroable};

/// 4D Vector with x, y, z, w components
/// The w component is the 4th spatial axis; it takes part in rotations only.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0, w: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0, w: 0.0 };
    pub const W: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Create a new Vec4
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Build from an `[x, y, z, w]` array
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Component by axis index (0=X, 1=Y, 2=Z, 3=W)
    ///
    /// # Panics
    /// Panics if `axis > 3`.
    #[inline]
    pub fn axis(self, axis: usize) -> f32 {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            3 => self.w,
            _ => panic!("Vec4 axis index {} out of range", axis),
        }
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Normalize to unit length
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            self * (1.0 / len)
        } else {
            Self::ZERO
        }
    }

    /// Drop W and keep the xyz components (orthogonal 4D -> 3D projection)
    #[inline]
    pub fn xyz(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// True when every component is within `epsilon` of `other`
    #[inline]
    pub fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
            && (self.w - other.w).abs() <= epsilon
    }
}

// Operator overloads

impl std::ops::Add for Vec4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl std::ops::Sub for Vec4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl std::ops::Mul<f32> for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

impl std::ops::Neg for Vec4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a.dot(b), 70.0);
    }

    #[test]
    fn test_length_of_hypercube_corner() {
        // A ±1 corner sits at distance 2 from the origin in 4D
        let v = Vec4::new(1.0, -1.0, 1.0, -1.0);
        assert!((v.length() - 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_distance_along_one_axis() {
        let a = Vec4::new(-1.0, -1.0, -1.0, -1.0);
        let b = Vec4::new(-1.0, -1.0, -1.0, 1.0);
        assert_eq!(a.distance(b), 2.0);
    }

    #[test]
    fn test_axis_access() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!([v.axis(0), v.axis(1), v.axis(2), v.axis(3)], v.to_array());
    }

    #[test]
    #[should_panic]
    fn test_axis_out_of_range() {
        Vec4::ZERO.axis(4);
    }

    #[test]
    fn test_xyz_drops_w() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.xyz(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_normalized_zero_is_zero() {
        assert_eq!(Vec4::ZERO.normalized(), Vec4::ZERO);
        let n = Vec4::new(0.0, 0.0, 0.0, 3.0).normalized();
        assert_eq!(n, Vec4::W);
    }

    #[test]
    fn test_operators() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a + b, Vec4::new(6.0, 8.0, 10.0, 12.0));
        assert_eq!(b - a, Vec4::new(4.0, 4.0, 4.0, 4.0));
        assert_eq!(a * 2.0, Vec4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(-a, Vec4::new(-1.0, -2.0, -3.0, -4.0));
    }

    #[test]
    fn test_approx_eq() {
        let a = Vec4::new(1.0, 1.0, 1.0, 1.0);
        assert!(a.approx_eq(Vec4::new(1.00001, 1.0, 0.99999, 1.0), 0.0001));
        assert!(!a.approx_eq(Vec4::new(1.1, 1.0, 1.0, 1.0), 0.0001));
    }
}
