// Per-tick button state

use super::button::Button;

/// Immutable view of every button for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    down: u8,
    pressed: u8,
    released: u8,
}

impl InputSnapshot {
    /// Check if a button is down this tick
    pub fn held(&self, button: Button) -> bool {
        self.down & button.bit() != 0
    }

    /// Check if a button went down this tick
    pub fn pressed(&self, button: Button) -> bool {
        self.pressed & button.bit() != 0
    }

    /// Check if a button came up this tick
    pub fn released(&self, button: Button) -> bool {
        self.released & button.bit() != 0
    }

    /// Snapshot builder, mostly for scripted input
    pub fn builder() -> SnapshotBuilder {
        SnapshotBuilder::default()
    }
}

/// Builds snapshots by hand (demos, replays, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotBuilder {
    snapshot: InputSnapshot,
}

impl SnapshotBuilder {
    /// Button held from an earlier tick
    pub fn hold(mut self, button: Button) -> Self {
        self.snapshot.down |= button.bit();
        self
    }

    /// Button went down this tick
    pub fn press(mut self, button: Button) -> Self {
        self.snapshot.down |= button.bit();
        self.snapshot.pressed |= button.bit();
        self
    }

    /// Button came up this tick
    pub fn release(mut self, button: Button) -> Self {
        self.snapshot.down &= !button.bit();
        self.snapshot.released |= button.bit();
        self
    }

    pub fn build(self) -> InputSnapshot {
        self.snapshot
    }
}

/// Tracks button edges between ticks
#[derive(Debug, Default)]
pub struct ButtonTracker {
    current: InputSnapshot,
}

impl ButtonTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a button press
    pub(crate) fn press(&mut self, button: Button) {
        if !self.current.held(button) {
            self.current.down |= button.bit();
            self.current.pressed |= button.bit();
        }
    }

    /// Register a button release
    pub(crate) fn release(&mut self, button: Button) {
        if self.current.held(button) {
            self.current.down &= !button.bit();
            self.current.released |= button.bit();
        }
    }

    /// State for the tick about to run
    pub fn snapshot(&self) -> InputSnapshot {
        self.current
    }

    /// Clear edges once a tick has consumed them
    pub(crate) fn end_tick(&mut self) {
        self.current.pressed = 0;
        self.current.released = 0;
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.current = InputSnapshot::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot() {
        let snapshot = InputSnapshot::default();
        for button in Button::ALL {
            assert!(!snapshot.held(button));
            assert!(!snapshot.pressed(button));
            assert!(!snapshot.released(button));
        }
    }

    #[test]
    fn test_builder() {
        let snapshot = InputSnapshot::builder()
            .hold(Button::Right)
            .press(Button::Action)
            .release(Button::Down)
            .build();

        assert!(snapshot.held(Button::Right));
        assert!(!snapshot.pressed(Button::Right));
        assert!(snapshot.held(Button::Action));
        assert!(snapshot.pressed(Button::Action));
        assert!(!snapshot.held(Button::Down));
        assert!(snapshot.released(Button::Down));
    }

    #[test]
    fn test_press_then_end_tick() {
        let mut tracker = ButtonTracker::new();
        tracker.press(Button::Jump);
        assert!(tracker.snapshot().pressed(Button::Jump));

        tracker.end_tick();
        assert!(tracker.snapshot().held(Button::Jump));
        assert!(!tracker.snapshot().pressed(Button::Jump));
    }

    #[test]
    fn test_release() {
        let mut tracker = ButtonTracker::new();
        tracker.press(Button::Left);
        tracker.end_tick();
        tracker.release(Button::Left);

        let snapshot = tracker.snapshot();
        assert!(!snapshot.held(Button::Left));
        assert!(snapshot.released(Button::Left));
    }

    #[test]
    fn test_repeat_press_is_not_a_new_edge() {
        let mut tracker = ButtonTracker::new();
        tracker.press(Button::Action);
        tracker.end_tick();
        tracker.press(Button::Action);
        assert!(!tracker.snapshot().pressed(Button::Action));
    }

    #[test]
    fn test_release_unpressed_button() {
        let mut tracker = ButtonTracker::new();
        tracker.release(Button::Jump);
        assert!(!tracker.snapshot().released(Button::Jump));
    }

    #[test]
    fn test_tap_within_one_tick() {
        let mut tracker = ButtonTracker::new();
        tracker.press(Button::Jump);
        tracker.release(Button::Jump);

        let snapshot = tracker.snapshot();
        assert!(snapshot.pressed(Button::Jump));
        assert!(snapshot.released(Button::Jump));
        assert!(!snapshot.held(Button::Jump));
    }

    #[test]
    fn test_reset() {
        let mut tracker = ButtonTracker::new();
        tracker.press(Button::Up);
        tracker.press(Button::Down);
        tracker.reset();
        assert_eq!(tracker.snapshot(), InputSnapshot::default());
    }
}
