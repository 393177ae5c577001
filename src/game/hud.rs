// Cooldown display contract
//
// The controller publishes one readout per ability each tick; a display
// implementation turns them into a bar and a label.

use super::player::cooldown::{Ability, AbilityCooldown};

/// Read-only view of one ability's cooldown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CooldownReadout {
    pub ability: Ability,
    pub ready: bool,
    /// Seconds until ready
    pub remaining: f32,
    /// Full cooldown in seconds
    pub total: f32,
}

impl CooldownReadout {
    pub fn new(ability: Ability, cooldown: &AbilityCooldown) -> Self {
        Self {
            ability,
            ready: cooldown.is_ready(),
            remaining: cooldown.remaining(),
            total: cooldown.total(),
        }
    }

    /// `"DASH READY"` or `"DASH (3.2s)"`
    pub fn label(&self) -> String {
        let name = self.ability.display_name();
        if self.ready {
            format!("{name} READY")
        } else {
            format!("{name} ({:.1}s)", self.remaining)
        }
    }

    /// Bar fill in [0, 1]: full while ready, otherwise the share of the
    /// cooldown still remaining
    pub fn bar_fill(&self) -> f32 {
        if self.ready || self.total <= 0.0 {
            1.0
        } else {
            (self.remaining / self.total).clamp(0.0, 1.0)
        }
    }

    /// Bar fill as a percentage
    pub fn bar_percent(&self) -> f32 {
        self.bar_fill() * 100.0
    }
}

/// Anything that can show ability cooldowns
pub trait CooldownDisplay {
    /// Called once per tick, after the controller has stepped
    fn show(&mut self, readouts: &[CooldownReadout]);
}
