// Dash platformer
//
// A side-scroller movement core: the player runs, jumps, double-jumps and
// dashes, with the two abilities gated by independent cooldowns.
//
// - `game`: the player controller and the contracts its readers implement
// - `engine`: timing, keyboard input and the desktop host's adapters

pub mod engine;
pub mod game;
