// Input configuration and remapping

use super::button::{Button, InputSource};
use std::collections::HashMap;

/// Maps input sources (keys) to logical buttons
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Mapping from input sources to buttons
    bindings: HashMap<InputSource, Button>,

    /// Reverse mapping for quick lookups (button -> all sources)
    button_to_sources: HashMap<Button, Vec<InputSource>>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            button_to_sources: HashMap::new(),
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(InputSource, Button)>) -> Self {
        let mut config = Self::new();
        for (source, button) in bindings {
            config.bind(source, button);
        }
        config
    }

    /// Bind an input source to a button
    pub fn bind(&mut self, source: InputSource, button: Button) {
        // A source drives exactly one button
        self.unbind_source(source);

        self.bindings.insert(source, button);
        self.button_to_sources
            .entry(button)
            .or_default()
            .push(source);
    }

    /// Unbind an input source
    pub fn unbind_source(&mut self, source: InputSource) {
        if let Some(button) = self.bindings.remove(&source) {
            if let Some(sources) = self.button_to_sources.get_mut(&button) {
                sources.retain(|s| *s != source);
                if sources.is_empty() {
                    self.button_to_sources.remove(&button);
                }
            }
        }
    }

    /// Unbind all sources for a button
    pub fn unbind_button(&mut self, button: Button) {
        if let Some(sources) = self.button_to_sources.remove(&button) {
            for source in sources {
                self.bindings.remove(&source);
            }
        }
    }

    /// Get the button bound to an input source
    pub fn get_button(&self, source: InputSource) -> Option<Button> {
        self.bindings.get(&source).copied()
    }

    /// Get all input sources bound to a button
    pub fn get_sources(&self, button: Button) -> Vec<InputSource> {
        self.button_to_sources
            .get(&button)
            .cloned()
            .unwrap_or_default()
    }

    /// Check if a button has any bindings
    pub fn has_binding(&self, button: Button) -> bool {
        self.button_to_sources.contains_key(&button)
    }

    /// Clear all bindings
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.button_to_sources.clear();
    }

    /// Reset to the default bindings
    pub fn reset_to_defaults(&mut self) {
        self.clear();
        for (source, button) in super::button::default_bindings() {
            self.bind(source, button);
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(super::button::default_bindings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_default_config_binds_arrows() {
        let config = InputConfig::default();
        assert_eq!(
            config.get_button(InputSource::key(KeyCode::ArrowLeft)),
            Some(Button::Left)
        );
        assert_eq!(
            config.get_button(InputSource::key(KeyCode::KeyS)),
            Some(Button::Jump)
        );
    }

    #[test]
    fn test_multiple_sources_per_button() {
        let config = InputConfig::default();
        let sources = config.get_sources(Button::Down);
        assert_eq!(sources.len(), 2);
        assert!(sources.contains(&InputSource::key(KeyCode::ArrowDown)));
        assert!(sources.contains(&InputSource::key(KeyCode::KeyF)));
    }

    #[test]
    fn test_rebind_source_moves_it() {
        let mut config = InputConfig::default();
        let space = InputSource::key(KeyCode::Space);
        config.bind(space, Button::Jump);
        config.bind(space, Button::Action);

        assert_eq!(config.get_button(space), Some(Button::Action));
        assert!(!config.get_sources(Button::Jump).contains(&space));
    }

    #[test]
    fn test_unbind_button() {
        let mut config = InputConfig::default();
        config.unbind_button(Button::Up);
        assert!(!config.has_binding(Button::Up));
        assert_eq!(config.get_button(InputSource::key(KeyCode::KeyD)), None);
    }

    #[test]
    fn test_unbind_last_source_drops_button() {
        let mut config = InputConfig::new();
        let key = InputSource::key(KeyCode::KeyJ);
        config.bind(key, Button::Reserved1);
        config.unbind_source(key);
        assert!(!config.has_binding(Button::Reserved1));
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut config = InputConfig::new();
        assert!(!config.has_binding(Button::Jump));
        config.reset_to_defaults();
        for button in Button::ALL {
            assert!(config.has_binding(button));
        }
    }
}
