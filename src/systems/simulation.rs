//! Hypercube simulation system
//!
//! Runs the update phase of a frame:
//! - Pointer input -> scale and rotation of the 4D vertices
//! - Re-projection and shading of the render streams when the vertices moved

use tesseract4d_core::{FrameInput, HypercubeState, RenderStreams};

/// Result of a simulation update
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationResult {
    /// Render streams were recomputed and must be re-uploaded
    pub geometry_dirty: bool,
    /// Zoom factor to fold into the world matrix, if the scale changed
    pub world_scale: Option<f32>,
}

/// Owns the tesseract and its derived render streams
pub struct SimulationSystem {
    state: HypercubeState,
    streams: RenderStreams,
}

impl SimulationSystem {
    /// Start from the canonical tesseract at `initial_scale`
    pub fn new(initial_scale: f32) -> Self {
        let state = HypercubeState::with_scale(initial_scale);
        let streams = RenderStreams::new(state.vertices());
        Self { state, streams }
    }

    pub fn state(&self) -> &HypercubeState {
        &self.state
    }

    pub fn streams(&self) -> &RenderStreams {
        &self.streams
    }

    /// Current scale factor
    pub fn scale(&self) -> f32 {
        self.state.scale()
    }

    /// Run one simulation frame
    ///
    /// Idle frames leave the streams untouched and report nothing dirty.
    pub fn update(&mut self, input: &FrameInput) -> SimulationResult {
        let update = self.state.apply_input(input);

        if update.geometry_changed {
            self.streams.update_from(self.state.vertices());
        }

        SimulationResult {
            geometry_dirty: update.geometry_changed,
            world_scale: update.world_scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tesseract4d_core::{recompute, PointerButton, ScrollDirection, CANONICAL_VERTICES};

    #[test]
    fn test_idle_frame_is_clean() {
        let mut sim = SimulationSystem::new(2.0);
        let result = sim.update(&FrameInput::default());
        assert_eq!(result, SimulationResult::default());
        assert_eq!(sim.state().vertices(), &CANONICAL_VERTICES);
    }

    #[test]
    fn test_drag_marks_geometry_dirty() {
        let mut sim = SimulationSystem::new(2.0);
        let result = sim.update(&FrameInput {
            drag_x: 15.0,
            button: PointerButton::Primary,
            ..Default::default()
        });
        assert!(result.geometry_dirty);
        assert_eq!(sim.streams(), &recompute(sim.state().vertices()));
    }

    #[test]
    fn test_drag_without_button_does_nothing() {
        let mut sim = SimulationSystem::new(2.0);
        let result = sim.update(&FrameInput {
            drag_x: 15.0,
            drag_y: -4.0,
            ..Default::default()
        });
        assert!(!result.geometry_dirty);
    }

    #[test]
    fn test_scroll_reports_world_scale() {
        let mut sim = SimulationSystem::new(2.0);
        let result = sim.update(&FrameInput {
            scroll: ScrollDirection::Up,
            ..Default::default()
        });
        assert!(!result.geometry_dirty);
        assert_eq!(result.world_scale, Some(1.1));
        assert!((sim.scale() - 2.2).abs() < 0.0001);
    }
}
