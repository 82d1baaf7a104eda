// Input manager - turns keyboard events into per-tick snapshots

use super::button::{Button, InputSource};
use super::config::InputConfig;
use super::snapshot::{ButtonTracker, InputSnapshot};
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Collects keyboard events for the controlled character
#[derive(Debug, Default)]
pub struct InputManager {
    config: InputConfig,
    tracker: ButtonTracker,
    /// Keys physically down right now
    held_sources: HashSet<InputSource>,
}

impl InputManager {
    /// Create an input manager with the default bindings
    pub fn new() -> Self {
        Self::with_config(InputConfig::default())
    }

    pub fn with_config(config: InputConfig) -> Self {
        Self {
            config,
            tracker: ButtonTracker::new(),
            held_sources: HashSet::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            let source = InputSource::key(key_code);
            match event.state {
                // Key repeat is not a new press
                ElementState::Pressed if !event.repeat => self.press_source(source),
                ElementState::Pressed => {}
                ElementState::Released => self.release_source(source),
            }
        }
    }

    /// A bound key went down
    pub fn press_source(&mut self, source: InputSource) {
        if let Some(button) = self.config.get_button(source) {
            self.held_sources.insert(source);
            self.press(button);
        }
    }

    /// A key came up; its button is released once no other key bound to it is down
    pub fn release_source(&mut self, source: InputSource) {
        if !self.held_sources.remove(&source) {
            return;
        }
        let Some(button) = self.config.get_button(source) else {
            return;
        };

        let still_held = self
            .config
            .get_sources(button)
            .iter()
            .any(|other| self.held_sources.contains(other));
        if !still_held {
            self.release(button);
        }
    }

    pub fn press(&mut self, button: Button) {
        self.tracker.press(button);
    }

    pub fn release(&mut self, button: Button) {
        self.tracker.release(button);
    }

    /// Snapshot for the tick about to run
    pub fn snapshot(&self) -> InputSnapshot {
        self.tracker.snapshot()
    }

    /// Call once per tick after the snapshot was consumed
    pub fn end_tick(&mut self) {
        self.tracker.end_tick();
    }

    /// Drop everything held, e.g. on focus loss
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.held_sources.clear();
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }
}
