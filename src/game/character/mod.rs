// Character system
//
// This module contains everything related to the playable puffball:
// - Tuning values and their validation
// - Animation states, facing and the status flags they gate
// - The animation state machine and its per-state behaviors
// - The action controller turning input into movement, animation and sound
// - Seams to the physics body, animator and sound collaborators
// - The character entity wiring all of it to the physics world

pub mod animation;
pub mod character;
pub mod config;
pub mod controller;
pub mod machine;
pub mod sinks;
pub mod state;

// Re-export commonly used types
pub use animation::{AnimationClip, AnimationPlayer};
pub use character::{Character, PlayerController};
pub use config::{ConfigError, ControllerConfig, BASE_CONFIG};
pub use controller::{ActionController, TickReport};
pub use machine::AnimationStateMachine;
pub use sinks::{AnimationSink, AnimatorParams, PhysicsBody, SoundSink};
pub use state::{AnimState, CharacterStatus, Facing};
