// Keyboard and touch input adapter
//
// Turns raw winit key and touch events into the per-tick `ActionSnapshot` the
// player controller consumes. Edge detection (pressed vs. held) happens here.
//
// ## Architecture
//
// - `action`: Defines game actions, input sources and default bindings
// - `config`: Binding configuration and remapping
// - `touch`: On-screen button layout and hit testing
// - `player`: Pressed / just-pressed tracking, per source
// - `manager`: Processes winit events and implements `ActionSource`
//
// ## Usage Example
//
// ```ignore
// let mut input = InputManager::default();
//
// // In the event loop
// input.process_keyboard_event(&key_event);
// input.process_touch_event(&touch);
//
// // Once per frame
// controller.step(&input.snapshot(), dt);
// input.update();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod player;
pub mod touch;

// Re-export commonly used types
pub use action::{Action, InputSource};
pub use config::InputConfig;
pub use manager::InputManager;
pub use player::PlayerInput;
pub use touch::{TouchButton, TouchLayout};
