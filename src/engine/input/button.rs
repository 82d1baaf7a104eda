// Logical buttons and their default key bindings

use winit::keyboard::KeyCode;

/// Logical buttons the character controller understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    // Direction
    Left,
    Right,

    // Look (idle variants; Down also arms the inhale)
    Up,
    Down,

    Jump,
    /// Run while moving, inhale with Down, swallow/exhale while full
    Action,

    // Shoulder buttons, bound but unused by the controller
    Reserved1,
    Reserved2,
}

impl Button {
    pub const ALL: [Button; 8] = [
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
        Self::Jump,
        Self::Action,
        Self::Reserved1,
        Self::Reserved2,
    ];

    /// Bit used for this button in snapshot masks
    pub(crate) fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Represents an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(InputSource, Button)> {
    vec![
        // Arrows move and look
        (InputSource::key(KeyCode::ArrowLeft), Button::Left),
        (InputSource::key(KeyCode::ArrowRight), Button::Right),
        (InputSource::key(KeyCode::ArrowUp), Button::Up),
        (InputSource::key(KeyCode::ArrowDown), Button::Down),
        // Alternate look keys
        (InputSource::key(KeyCode::KeyD), Button::Up),
        (InputSource::key(KeyCode::KeyF), Button::Down),
        // Face buttons
        (InputSource::key(KeyCode::KeyS), Button::Jump),
        (InputSource::key(KeyCode::KeyA), Button::Action),
        // Shoulders
        (InputSource::key(KeyCode::KeyL), Button::Reserved1),
        (InputSource::key(KeyCode::KeyR), Button::Reserved2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_bits_unique() {
        let mut mask = 0u8;
        for button in Button::ALL {
            assert_eq!(mask & button.bit(), 0, "{:?} shares a bit", button);
            mask |= button.bit();
        }
        assert_eq!(mask, 0xFF);
    }

    #[test]
    fn test_input_source_keyboard_creation() {
        let source = InputSource::key(KeyCode::KeyA);
        assert_eq!(source, InputSource::Keyboard(KeyCode::KeyA));
    }

    #[test]
    fn test_every_button_has_a_default_binding() {
        let bindings = default_bindings();
        for button in Button::ALL {
            assert!(
                bindings.iter().any(|(_, b)| *b == button),
                "{:?} is unbound",
                button
            );
        }
    }

    #[test]
    fn test_no_duplicate_inputs() {
        let bindings = default_bindings();
        let mut seen_sources = std::collections::HashSet::new();
        for (source, _) in bindings {
            assert!(
                seen_sources.insert(source),
                "Duplicate input source found in default bindings"
            );
        }
    }
}
