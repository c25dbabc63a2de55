//! Input button contract and the 4-state button transition machine.

use serde::{Deserialize, Serialize};

/// Minimal contract an input device exposes per button.
///
/// The monitor layer only ever polls pressure and reads the name; how the
/// backing device works (keyboard, gamepad, virtual button) is out of
/// scope.
pub trait InputButton {
    /// Whether the button is physically held right now.
    fn is_pressed(&self) -> bool;
    /// Stable button name, also used as the `Global/Keys` trigger name.
    fn name(&self) -> &str;
}

/// Observable button state derived from successive pressure polls.
///
/// `Idle -> Pressed -> Hold` while held, `Pressed | Hold -> Released ->
/// Idle` on release. `Pressed` and `Released` last exactly one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonState {
    Idle,
    Pressed,
    Hold,
    Released,
}

impl ButtonState {
    /// Next state given the current pressure reading.
    pub fn next(self, pressed: bool) -> ButtonState {
        match (self, pressed) {
            (ButtonState::Idle | ButtonState::Released, true) => ButtonState::Pressed,
            (ButtonState::Pressed | ButtonState::Hold, true) => ButtonState::Hold,
            (ButtonState::Pressed | ButtonState::Hold, false) => ButtonState::Released,
            (ButtonState::Released | ButtonState::Idle, false) => ButtonState::Idle,
        }
    }

    /// Name used as the trigger parameter value.
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonState::Idle => "Idle",
            ButtonState::Pressed => "Pressed",
            ButtonState::Hold => "Hold",
            ButtonState::Released => "Released",
        }
    }
}
