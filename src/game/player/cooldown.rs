// Ability cooldowns

/// Abilities gated behind a cooldown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ability {
    Dash,
    DoubleJump,
}

impl Ability {
    /// Every cooldown-gated ability, in display order
    pub const ALL: [Ability; 2] = [Ability::Dash, Ability::DoubleJump];

    /// Name shown on the cooldown display
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Dash => "DASH",
            Self::DoubleJump => "DOUBLE JUMP",
        }
    }
}

/// Timed lockout after an ability is used.
///
/// `READY --trigger--> COOLING_DOWN --timer expires--> READY`. The ability is
/// ready exactly when no time remains; triggering while cooling is a no-op.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbilityCooldown {
    /// Time left until ready (seconds, never negative)
    remaining: f32,
    /// Full lockout duration (seconds)
    total: f32,
}

impl AbilityCooldown {
    /// Create a cooldown that starts ready
    pub fn new(total: f32) -> Self {
        Self {
            remaining: 0.0,
            total,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.remaining <= 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn total(&self) -> f32 {
        self.total
    }

    /// Start the lockout. Returns false (and changes nothing) while cooling down.
    pub fn trigger(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.remaining = self.total;
        true
    }

    /// Decay the remaining time. Returns true on the tick the ability becomes ready.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.is_ready() {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            return true;
        }
        false
    }

    /// Make the ability ready immediately
    pub fn reset(&mut self) {
        self.remaining = 0.0;
    }
}
