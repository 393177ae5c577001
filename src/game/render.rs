// Renderer contract - what a renderer may read from the player each frame

use glam::Vec2;

use super::player::state::{Facing, MotionState};

/// Everything needed to draw the player sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteView {
    /// Top-left corner in world units
    pub position: Vec2,
    pub size: Vec2,
    /// Walk-cycle frame (0 = idle frame)
    pub frame_index: usize,
    pub is_moving: bool,
    pub facing: Facing,
    pub motion: MotionState,
}

impl SpriteView {
    /// Whether the sprite should be mirrored
    pub fn flip_horizontal(&self) -> bool {
        self.facing == Facing::Left
    }
}

/// Draws the background and the player. Never mutates the simulation.
pub trait SpriteRenderer {
    fn draw(&mut self, sprite: &SpriteView);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_follows_facing() {
        let mut view = SpriteView {
            position: Vec2::ZERO,
            size: Vec2::splat(48.0),
            frame_index: 0,
            is_moving: false,
            facing: Facing::Right,
            motion: MotionState::Idle,
        };
        assert!(!view.flip_horizontal());

        view.facing = Facing::Left;
        assert!(view.flip_horizontal());
    }
}
