// Player movement core
//
// Everything that decides how the player moves each tick:
// - Configuration and validation
// - Ability cooldowns (dash, double jump)
// - The per-tick action snapshot the controller consumes
// - Walk-cycle animation
// - The kinematics & ability controller itself

pub mod animation;
pub mod config;
pub mod controller;
pub mod cooldown;
pub mod snapshot;
pub mod state;

// Re-export commonly used types
pub use animation::FrameCycle;
pub use config::{ConfigError, PlayerConfig, DEFAULT_CONFIG};
pub use controller::{PlayerController, StepEvents};
pub use cooldown::{Ability, AbilityCooldown};
pub use snapshot::{ActionSnapshot, ActionSource};
pub use state::{Facing, MotionState, PlayerState};
