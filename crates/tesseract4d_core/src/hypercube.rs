//! Hypercube state and the 4D transform engine
//!
//! The state is the 16 vertex positions, a uniform scale factor and the
//! orientation accumulated from every rotation so far. Rotations are applied
//! directly to the vertex coordinates; the orientation matrix is kept next
//! to them so drift can be measured and repaired.

use tesseract4d_math::{mat4, Mat4, RotationPlane, Vec4};

use crate::geometry::{CANONICAL_VERTICES, VERTEX_COUNT};
use crate::input::{FrameInput, PointerButton, ScrollDirection, ZOOM_STEP};

/// Scale factor the viewer starts with
pub const DEFAULT_SCALE: f32 = 2.0;

/// Pixels of drag per radian at scale 1
pub const DRAG_SENSITIVITY: f32 = 50.0;

/// Rotation steps between re-orthonormalizations of the orientation
pub const RENORMALIZE_INTERVAL: u32 = 256;

/// Scroll notches allowed in either direction from the starting scale
///
/// 1.1^100 is about 13780, far past anything visible but finite in f32.
pub const MAX_ZOOM_LEVEL: i32 = 100;

/// What a frame of input changed
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameUpdate {
    /// The vertex positions moved; render streams must be recomputed
    pub geometry_changed: bool,
    /// Factor the world transform must be multiplied by, if the scale changed
    pub world_scale: Option<f32>,
}

/// The mutable tesseract
#[derive(Clone, Debug)]
pub struct HypercubeState {
    vertices: [Vec4; VERTEX_COUNT],
    base_scale: f32,
    // Net scroll notches; the scale is always base_scale * ZOOM_STEP^zoom_level
    zoom_level: i32,
    orientation: Mat4,
    steps_since_renormalize: u32,
}

impl Default for HypercubeState {
    fn default() -> Self {
        Self::new()
    }
}

impl HypercubeState {
    /// Canonical vertices at the default scale
    pub fn new() -> Self {
        Self::with_scale(DEFAULT_SCALE)
    }

    /// Canonical vertices at a chosen starting scale
    pub fn with_scale(scale: f32) -> Self {
        Self {
            vertices: CANONICAL_VERTICES,
            base_scale: scale,
            zoom_level: 0,
            orientation: mat4::IDENTITY,
            steps_since_renormalize: 0,
        }
    }

    /// Current vertex positions, indexed by vertex identity
    #[inline]
    pub fn vertices(&self) -> &[Vec4; VERTEX_COUNT] {
        &self.vertices
    }

    /// Current uniform scale factor
    #[inline]
    pub fn scale(&self) -> f32 {
        self.base_scale * ZOOM_STEP.powi(self.zoom_level)
    }

    /// Net scroll notches applied so far, within ±[`MAX_ZOOM_LEVEL`]
    #[inline]
    pub fn zoom_level(&self) -> i32 {
        self.zoom_level
    }

    /// Product of all rotations applied so far
    #[inline]
    pub fn orientation(&self) -> Mat4 {
        self.orientation
    }

    /// Convert a pointer drag in pixels to rotation angles in radians
    ///
    /// Larger scale means smaller angles, so the drag feels the same on screen.
    pub fn drag_angles(&self, delta_x: f32, delta_y: f32) -> (f32, f32) {
        let scale = self.scale();
        (
            delta_x / DRAG_SENSITIVITY / scale,
            delta_y / DRAG_SENSITIVITY / scale,
        )
    }

    /// Build the combined rotation for one drag, if the button selects any
    ///
    /// `Primary` rotates XZ by `angle_x` then YZ by `angle_y`; `Secondary`
    /// uses XW and YW instead. Planes with a zero angle are skipped.
    pub fn rotation_step(button: PointerButton, angle_x: f32, angle_y: f32) -> Option<Mat4> {
        let (plane_x, plane_y) = match button {
            PointerButton::Primary => (RotationPlane::XZ, RotationPlane::YZ),
            PointerButton::Secondary => (RotationPlane::XW, RotationPlane::YW),
            PointerButton::None => return None,
        };

        let mut step = mat4::IDENTITY;
        if angle_x.abs() > 0.0 {
            step = mat4::mul(mat4::plane_rotation(plane_x, angle_x), step);
        }
        if angle_y.abs() > 0.0 {
            step = mat4::mul(mat4::plane_rotation(plane_y, angle_y), step);
        }
        Some(step)
    }

    /// Rotate the hypercube for a pointer drag
    ///
    /// Returns whether any vertex moved.
    pub fn apply_rotation(&mut self, delta_x: f32, delta_y: f32, button: PointerButton) -> bool {
        if delta_x == 0.0 && delta_y == 0.0 {
            return false;
        }
        let (angle_x, angle_y) = self.drag_angles(delta_x, delta_y);
        match Self::rotation_step(button, angle_x, angle_y) {
            Some(step) => {
                log::trace!("{:?} drag: angles ({:.4}, {:.4})", button, angle_x, angle_y);
                self.rotate_by(step);
                true
            }
            None => false,
        }
    }

    /// Rotate a single plane by `angle` radians
    pub fn rotate_plane(&mut self, plane: RotationPlane, angle: f32) {
        self.rotate_by(mat4::plane_rotation(plane, angle));
    }

    /// Apply a rotation matrix to every vertex in place
    ///
    /// `step` must be a rotation; scaling belongs in [`Self::apply_zoom`].
    pub fn rotate_by(&mut self, step: Mat4) {
        for v in self.vertices.iter_mut() {
            *v = mat4::transform(step, *v);
        }
        self.orientation = mat4::mul(step, self.orientation);

        self.steps_since_renormalize += 1;
        if self.steps_since_renormalize >= RENORMALIZE_INTERVAL {
            self.renormalize();
        }
    }

    /// Snap the orientation back to an exact rotation and rebuild the vertices from it
    pub fn renormalize(&mut self) {
        let before = mat4::orthonormality_error(self.orientation);
        self.orientation = mat4::orthonormalize(self.orientation);
        for (v, canonical) in self.vertices.iter_mut().zip(CANONICAL_VERTICES.iter()) {
            *v = mat4::transform(self.orientation, *canonical);
        }
        self.steps_since_renormalize = 0;
        log::debug!("Orientation renormalized (drift was {:.2e})", before);
    }

    /// Zoom one notch in the scroll direction
    ///
    /// Returns the factor the world transform must be multiplied by, or
    /// `None` when nothing changed (no scroll, or already at the zoom limit).
    pub fn apply_zoom(&mut self, direction: ScrollDirection) -> Option<f32> {
        let step = match direction {
            ScrollDirection::Up => 1,
            ScrollDirection::Down => -1,
            ScrollDirection::None => return None,
        };

        let level = (self.zoom_level + step).clamp(-MAX_ZOOM_LEVEL, MAX_ZOOM_LEVEL);
        if level == self.zoom_level {
            log::debug!("Zoom limit reached at level {}", level);
            return None;
        }

        self.zoom_level = level;
        log::debug!("Scale factor now {:.4}", self.scale());
        Some(direction.scale_factor())
    }

    /// Apply one frame of input: scroll first, then the drag at the new scale
    pub fn apply_input(&mut self, input: &FrameInput) -> FrameUpdate {
        let world_scale = self.apply_zoom(input.scroll);
        let geometry_changed = self.apply_rotation(input.drag_x, input.drag_y, input.button);
        FrameUpdate { geometry_changed, world_scale }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_new_is_canonical() {
        let state = HypercubeState::new();
        assert_eq!(state.vertices(), &CANONICAL_VERTICES);
        assert_eq!(state.scale(), DEFAULT_SCALE);
        assert_eq!(state.orientation(), mat4::IDENTITY);
    }

    #[test]
    fn test_drag_angles_use_sensitivity_and_scale() {
        let state = HypercubeState::with_scale(2.0);
        let (ax, ay) = state.drag_angles(100.0, -50.0);
        assert!((ax - 1.0).abs() < EPSILON);
        assert!((ay + 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_zero_drag_is_noop() {
        let mut state = HypercubeState::new();
        assert!(!state.apply_rotation(0.0, 0.0, PointerButton::Primary));
        assert!(!state.apply_rotation(0.0, 0.0, PointerButton::Secondary));
        assert_eq!(state.vertices(), &CANONICAL_VERTICES);
    }

    #[test]
    fn test_no_button_is_noop() {
        let mut state = HypercubeState::new();
        assert!(!state.apply_rotation(40.0, -7.0, PointerButton::None));
        assert_eq!(state.vertices(), &CANONICAL_VERTICES);
    }

    #[test]
    fn test_primary_horizontal_drag_rotates_xz() {
        // scale 1: 50 * pi/2 pixels is a quarter turn
        let mut state = HypercubeState::with_scale(1.0);
        state.apply_rotation(DRAG_SENSITIVITY * FRAC_PI_2, 0.0, PointerButton::Primary);

        // x' = z, z' = -x, y and w untouched
        for (v, c) in state.vertices().iter().zip(CANONICAL_VERTICES.iter()) {
            assert!(v.approx_eq(Vec4::new(c.z, c.y, -c.x, c.w), EPSILON), "{:?} -> {:?}", c, v);
        }
    }

    #[test]
    fn test_secondary_vertical_drag_rotates_yw() {
        let mut state = HypercubeState::with_scale(1.0);
        state.apply_rotation(0.0, DRAG_SENSITIVITY * FRAC_PI_2, PointerButton::Secondary);

        // y' = w, w' = -y
        for (v, c) in state.vertices().iter().zip(CANONICAL_VERTICES.iter()) {
            assert!(v.approx_eq(Vec4::new(c.x, c.w, c.z, -c.y), EPSILON), "{:?} -> {:?}", c, v);
        }
    }

    #[test]
    fn test_secondary_never_touches_z() {
        let mut state = HypercubeState::new();
        state.apply_rotation(31.0, -17.0, PointerButton::Secondary);
        for (v, c) in state.vertices().iter().zip(CANONICAL_VERTICES.iter()) {
            assert_eq!(v.z, c.z);
        }
    }

    #[test]
    fn test_primary_never_touches_w() {
        let mut state = HypercubeState::new();
        state.apply_rotation(-23.0, 41.0, PointerButton::Primary);
        for (v, c) in state.vertices().iter().zip(CANONICAL_VERTICES.iter()) {
            assert_eq!(v.w, c.w);
        }
    }

    #[test]
    fn test_combined_step_applies_x_plane_first() {
        let step = HypercubeState::rotation_step(PointerButton::Primary, FRAC_PI_2, FRAC_PI_2).unwrap();
        // XZ carries Z onto X; YZ then leaves X alone
        assert!(mat4::transform(step, Vec4::Z).approx_eq(Vec4::X, EPSILON));
    }

    #[test]
    fn test_skipping_zero_plane_matches_identity() {
        let skipped = HypercubeState::rotation_step(PointerButton::Secondary, 0.3, 0.0).unwrap();
        let full = mat4::mul(
            mat4::plane_rotation(RotationPlane::YW, 0.0),
            mat4::plane_rotation(RotationPlane::XW, 0.3),
        );
        for i in 0..4 {
            for j in 0..4 {
                assert!((skipped[i][j] - full[i][j]).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_orientation_tracks_vertices() {
        let mut state = HypercubeState::new();
        state.apply_rotation(13.0, 8.0, PointerButton::Primary);
        state.apply_rotation(-4.0, 22.0, PointerButton::Secondary);

        let orientation = state.orientation();
        for (v, c) in state.vertices().iter().zip(CANONICAL_VERTICES.iter()) {
            assert!(v.approx_eq(mat4::transform(orientation, *c), EPSILON));
        }
        assert!(mat4::orthonormality_error(orientation) < EPSILON);
    }

    #[test]
    fn test_renormalize_after_interval() {
        let mut state = HypercubeState::new();
        for _ in 0..RENORMALIZE_INTERVAL - 1 {
            state.rotate_plane(RotationPlane::XW, 0.01);
        }
        assert_eq!(state.steps_since_renormalize, RENORMALIZE_INTERVAL - 1);

        state.rotate_plane(RotationPlane::XW, 0.01);
        assert_eq!(state.steps_since_renormalize, 0);
        assert!(mat4::orthonormality_error(state.orientation()) < EPSILON);
    }

    #[test]
    fn test_apply_zoom() {
        let mut state = HypercubeState::with_scale(1.0);
        assert_eq!(state.apply_zoom(ScrollDirection::Up), Some(1.1));
        assert!((state.scale() - 1.1).abs() < EPSILON);
        assert_eq!(state.apply_zoom(ScrollDirection::None), None);
        assert!((state.scale() - 1.1).abs() < EPSILON);
        assert_eq!(state.apply_zoom(ScrollDirection::Down), Some(1.0 / 1.1));
        assert_eq!(state.scale(), 1.0);
    }

    #[test]
    fn test_zoom_stops_at_limit() {
        let mut state = HypercubeState::with_scale(2.0);
        for _ in 0..MAX_ZOOM_LEVEL {
            assert!(state.apply_zoom(ScrollDirection::Up).is_some());
        }
        assert_eq!(state.apply_zoom(ScrollDirection::Up), None);
        assert_eq!(state.zoom_level(), MAX_ZOOM_LEVEL);

        for _ in 0..2 * MAX_ZOOM_LEVEL {
            assert!(state.apply_zoom(ScrollDirection::Down).is_some());
        }
        assert_eq!(state.apply_zoom(ScrollDirection::Down), None);
        assert_eq!(state.zoom_level(), -MAX_ZOOM_LEVEL);
        assert!(state.scale() > 0.0);
    }

    #[test]
    fn test_scale_does_not_move_vertices() {
        let mut state = HypercubeState::new();
        state.apply_zoom(ScrollDirection::Up);
        assert_eq!(state.vertices(), &CANONICAL_VERTICES);
    }

    #[test]
    fn test_apply_input_scales_before_rotating() {
        let mut zoomed = HypercubeState::with_scale(1.0);
        let update = zoomed.apply_input(&FrameInput {
            drag_x: 10.0,
            drag_y: 0.0,
            button: PointerButton::Primary,
            scroll: ScrollDirection::Up,
        });
        assert!(update.geometry_changed);
        assert_eq!(update.world_scale, Some(1.1));

        // Same drag at the already-increased scale
        let mut reference = HypercubeState::with_scale(1.1);
        reference.apply_rotation(10.0, 0.0, PointerButton::Primary);

        for (a, b) in zoomed.vertices().iter().zip(reference.vertices().iter()) {
            assert!(a.approx_eq(*b, EPSILON));
        }
    }

    #[test]
    fn test_apply_idle_input() {
        let mut state = HypercubeState::new();
        let update = state.apply_input(&FrameInput::default());
        assert_eq!(update, FrameUpdate::default());
    }
}
