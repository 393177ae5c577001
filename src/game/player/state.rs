// Player state and the motion states derived from it

use glam::Vec2;

/// Horizontal direction the player faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1.0 for left, 1.0 for right
    pub fn sign(&self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Kinematic state of the player, mutated once per tick by the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    /// Top-left corner in world units
    pub position: Vec2,
    /// Units per second
    pub velocity: Vec2,
    /// Width and height, fixed for the entity's lifetime
    pub size: Vec2,
    /// Resting on the ground line
    pub grounded: bool,
    /// A double jump is still available in this airborne period
    pub can_air_jump: bool,
    /// Index into the external walk-cycle frames (0 = idle)
    pub animation_frame_index: usize,
    /// Horizontal movement was requested this tick
    pub is_moving: bool,
    /// Last direction horizontal input pointed
    pub facing: Facing,
}

impl PlayerState {
    /// State at a spawn point: at rest, facing right
    pub fn spawn(position: Vec2, size: Vec2, grounded: bool) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size,
            grounded,
            can_air_jump: false,
            animation_frame_index: 0,
            is_moving: false,
            facing: Facing::Right,
        }
    }

    /// Y coordinate of the bottom edge
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }
}

/// High-level motion state used to pick an animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MotionState {
    /// Standing still on ground
    #[default]
    Idle,
    /// Running on ground
    Running,
    /// In the air, moving upward
    Rising,
    /// In the air, moving downward
    Falling,
    /// Inside a dash commitment window
    Dashing,
}

impl MotionState {
    /// Classify a state. `dashing` is true while a dash window is open.
    pub fn classify(state: &PlayerState, dashing: bool) -> Self {
        if dashing {
            Self::Dashing
        } else if !state.grounded {
            if state.velocity.y < 0.0 {
                Self::Rising
            } else {
                Self::Falling
            }
        } else if state.is_moving {
            Self::Running
        } else {
            Self::Idle
        }
    }

    /// Get the animation name for this state
    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "run",
            Self::Rising => "jump",
            Self::Falling => "fall",
            Self::Dashing => "dash",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grounded_state() -> PlayerState {
        PlayerState::spawn(Vec2::new(100.0, 352.0), Vec2::new(48.0, 48.0), true)
    }

    #[test]
    fn test_spawn_is_at_rest() {
        let state = grounded_state();
        assert_eq!(state.velocity, Vec2::ZERO);
        assert_eq!(state.facing, Facing::Right);
        assert_eq!(state.animation_frame_index, 0);
        assert!(!state.can_air_jump);
        assert_eq!(state.bottom(), 400.0);
    }

    #[test]
    fn test_facing_sign() {
        assert_eq!(Facing::Left.sign(), -1.0);
        assert_eq!(Facing::Right.sign(), 1.0);
        assert_eq!(Facing::default(), Facing::Right);
    }

    #[test]
    fn test_classify_ground_states() {
        let mut state = grounded_state();
        assert_eq!(MotionState::classify(&state, false), MotionState::Idle);

        state.is_moving = true;
        assert_eq!(MotionState::classify(&state, false), MotionState::Running);
    }

    #[test]
    fn test_classify_air_states() {
        let mut state = grounded_state();
        state.grounded = false;
        state.velocity.y = -100.0;
        assert_eq!(MotionState::classify(&state, false), MotionState::Rising);

        state.velocity.y = 50.0;
        assert_eq!(MotionState::classify(&state, false), MotionState::Falling);
    }

    #[test]
    fn test_dash_overrides_everything() {
        let mut state = grounded_state();
        state.grounded = false;
        assert_eq!(MotionState::classify(&state, true), MotionState::Dashing);
    }

    #[test]
    fn test_animation_names() {
        assert_eq!(MotionState::Idle.animation_name(), "idle");
        assert_eq!(MotionState::Running.animation_name(), "run");
        assert_eq!(MotionState::Rising.animation_name(), "jump");
        assert_eq!(MotionState::Dashing.animation_name(), "dash");
    }
}
