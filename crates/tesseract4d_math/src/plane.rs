//! The 6 rotation planes of 4D space
//!
//! In 4D, rotations happen in planes rather than around axes.
//! Only XZ, YZ, XW and YW are driven by the pointer; the other two are
//! kept so every plane has a name.

/// A plane spanned by two coordinate axes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationPlane {
    /// XY plane - roll around the view axis
    XY,
    /// XZ plane - horizontal drag with the primary button
    XZ,
    /// YZ plane - vertical drag with the primary button
    YZ,
    /// XW plane - horizontal drag with the secondary button (ana/kata)
    XW,
    /// YW plane - vertical drag with the secondary button (ana/kata)
    YW,
    /// ZW plane
    ZW,
}

impl RotationPlane {
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::YZ,
        RotationPlane::XW,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// Axis indices (0=X, 1=Y, 2=Z, 3=W) in the order the plane is named
    ///
    /// A positive angle carries the second axis toward the first:
    /// `XZ` by +90° maps +Z onto +X.
    pub const fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::XY => (0, 1),
            RotationPlane::XZ => (0, 2),
            RotationPlane::YZ => (1, 2),
            RotationPlane::XW => (0, 3),
            RotationPlane::YW => (1, 3),
            RotationPlane::ZW => (2, 3),
        }
    }
}
