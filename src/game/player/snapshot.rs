// Per-tick action snapshot handed to the controller

use super::state::Facing;

/// Logical actions for one tick.
///
/// Edge detection belongs to whoever builds the snapshot: `jump_pressed` and
/// `dash_pressed` are true only on the tick the action went from off to on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionSnapshot {
    pub move_left: bool,
    pub move_right: bool,
    /// Jump went down this tick
    pub jump_pressed: bool,
    /// Jump is currently down
    pub jump_held: bool,
    /// Dash went down this tick
    pub dash_pressed: bool,
}

impl ActionSnapshot {
    /// Nothing pressed
    pub fn idle() -> Self {
        Self::default()
    }

    /// Direction requested by the movement keys. Right wins when both are down.
    pub fn horizontal_intent(&self) -> Option<Facing> {
        if self.move_right {
            Some(Facing::Right)
        } else if self.move_left {
            Some(Facing::Left)
        } else {
            None
        }
    }

    pub fn with_left(mut self) -> Self {
        self.move_left = true;
        self
    }

    pub fn with_right(mut self) -> Self {
        self.move_right = true;
        self
    }

    /// Jump pressed this tick (also counts as held)
    pub fn with_jump(mut self) -> Self {
        self.jump_pressed = true;
        self.jump_held = true;
        self
    }

    /// Jump held from an earlier tick
    pub fn with_jump_held(mut self) -> Self {
        self.jump_held = true;
        self
    }

    pub fn with_dash(mut self) -> Self {
        self.dash_pressed = true;
        self
    }
}

/// Anything that can produce a per-tick action snapshot
pub trait ActionSource {
    fn snapshot(&self) -> ActionSnapshot;
}

impl ActionSource for ActionSnapshot {
    fn snapshot(&self) -> ActionSnapshot {
        *self
    }
}
