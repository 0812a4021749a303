//! Input mapping from raw key events to semantic actions
//!
//! Pointer drags and the scroll wheel are NOT mapped here - they go directly
//! to the PointerController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Switch between windowed and borderless fullscreen (F11)
    ToggleFullscreen,
    /// Return to windowed mode (Escape while fullscreen)
    LeaveFullscreen,
    /// Exit application (Escape while windowed)
    Exit,
}

/// Maps raw key events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Only fresh presses count; releases and auto-repeat are ignored.
    pub fn map_keyboard(
        key: KeyCode,
        state: ElementState,
        repeat: bool,
        fullscreen: bool,
    ) -> Option<InputAction> {
        if state != ElementState::Pressed || repeat {
            return None;
        }

        match key {
            KeyCode::F11 => Some(InputAction::ToggleFullscreen),
            KeyCode::Escape => {
                if fullscreen {
                    Some(InputAction::LeaveFullscreen)
                } else {
                    Some(InputAction::Exit)
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f11_toggles_fullscreen() {
        for fullscreen in [false, true] {
            let action = InputMapper::map_keyboard(KeyCode::F11, ElementState::Pressed, false, fullscreen);
            assert_eq!(action, Some(InputAction::ToggleFullscreen));
        }
    }

    #[test]
    fn test_escape_when_fullscreen_leaves() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed, false, true);
        assert_eq!(action, Some(InputAction::LeaveFullscreen));
    }

    #[test]
    fn test_escape_when_windowed_exits() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed, false, false);
        assert_eq!(action, Some(InputAction::Exit));
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::map_keyboard(KeyCode::F11, ElementState::Released, false, false);
        assert_eq!(action, None);
    }

    #[test]
    fn test_key_repeat_ignored() {
        // Holding F11 must not flicker between modes
        let action = InputMapper::map_keyboard(KeyCode::F11, ElementState::Pressed, true, false);
        assert_eq!(action, None);
    }

    #[test]
    fn test_other_keys_not_mapped() {
        for key in [KeyCode::KeyW, KeyCode::KeyF, KeyCode::Space, KeyCode::Enter] {
            let action = InputMapper::map_keyboard(key, ElementState::Pressed, false, false);
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }
}
