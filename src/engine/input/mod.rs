// Input handling system
//
// Turns keyboard events into the per-tick button snapshot the character controller reads.
//
// ## Architecture
//
// - `button`: Logical buttons and default key bindings
// - `snapshot`: Down/pressed/released state for one tick
// - `config`: Key remapping
// - `manager`: Feeds winit events in, hands snapshots out
//
// ## Usage Example
//
// ```rust
// use engine::input::{Button, InputManager};
//
// let mut input = InputManager::new();
//
// // In your event loop, process keyboard events
// input.process_keyboard_event(&key_event);
//
// // Once per fixed tick
// let snapshot = input.snapshot();
// if snapshot.pressed(Button::Jump) {
//     // jump!
// }
// input.end_tick();
// ```

pub mod button;
pub mod config;
pub mod manager;
pub mod snapshot;

// Re-export commonly used types
pub use button::{Button, InputSource};
pub use config::InputConfig;
pub use manager::InputManager;
pub use snapshot::InputSnapshot;
