// Game rules: the player controller and the contracts its readers implement

pub mod hud;
pub mod player;
pub mod render;

pub use hud::{CooldownDisplay, CooldownReadout};
pub use render::{SpriteRenderer, SpriteView};
