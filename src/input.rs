use macroquad::input::{get_keys_down, get_keys_pressed, is_quit_requested, KeyCode};
use std::collections::HashSet;

/// Snapshot of the input state for one frame
///
/// `keys_down` is the held state driving the continuous movement checks.
/// `keys_pressed` carries this frame's edge-triggered presses, one entry per
/// physical key press, used for bomb plants. `quit` is set by a window-close
/// request or the Escape key.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub keys_down: HashSet<KeyCode>,
    pub keys_pressed: HashSet<KeyCode>,
    pub quit: bool,
}

impl FrameInput {
    /// Capture the current macroquad input state, once per frame
    pub fn poll() -> Self {
        let keys_pressed = get_keys_pressed();
        let quit = is_quit_requested() || keys_pressed.contains(&KeyCode::Escape);

        FrameInput {
            keys_down: get_keys_down(),
            keys_pressed,
            quit,
        }
    }
}
