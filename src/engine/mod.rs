// Engine modules: game loop timing, keyboard input, host adapters

pub mod game_loop;
pub mod host;
pub mod input;
