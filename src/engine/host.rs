// Host-side adapters for the player's readers
//
// The desktop host has no sprite pipeline: the cooldown bars are shown in the
// window title and the sprite is traced to the log.

use crate::game::{CooldownDisplay, CooldownReadout, SpriteRenderer, SpriteView};

/// Width of the text bar drawn for each cooldown
const BAR_CELLS: usize = 10;

/// Cooldown display that renders into a window title
#[derive(Debug)]
pub struct TitleBarHud {
    base_title: String,
    cooldowns: String,
    fps: Option<u32>,
    title: String,
    dirty: bool,
}

impl TitleBarHud {
    pub fn new(base_title: &str) -> Self {
        Self {
            base_title: base_title.to_string(),
            cooldowns: String::new(),
            fps: None,
            title: base_title.to_string(),
            dirty: true,
        }
    }

    /// Show the frame rate after the cooldown bars, rounded to whole frames
    pub fn set_fps(&mut self, fps: f32) {
        let rounded = (fps > 0.0).then(|| fps.round() as u32);
        if rounded != self.fps {
            self.fps = rounded;
            self.rebuild();
        }
    }

    /// Current title text
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Return the title if it changed since the last call
    pub fn take_changed(&mut self) -> Option<&str> {
        if self.dirty {
            self.dirty = false;
            Some(self.title.as_str())
        } else {
            None
        }
    }

    fn rebuild(&mut self) {
        let mut title = format!("{}{}", self.base_title, self.cooldowns);
        if let Some(fps) = self.fps {
            title.push_str(&format!(" | {} FPS", fps));
        }
        if title != self.title {
            self.title = title;
            self.dirty = true;
        }
    }

    /// `[#####-----]` style bar
    fn bar(readout: &CooldownReadout) -> String {
        let filled = (readout.bar_fill() * BAR_CELLS as f32).round() as usize;
        let filled = filled.min(BAR_CELLS);
        format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_CELLS - filled))
    }
}

impl CooldownDisplay for TitleBarHud {
    fn show(&mut self, readouts: &[CooldownReadout]) {
        let mut cooldowns = String::new();
        for readout in readouts {
            cooldowns.push_str(" | ");
            cooldowns.push_str(&Self::bar(readout));
            cooldowns.push(' ');
            cooldowns.push_str(&readout.label());
        }
        self.cooldowns = cooldowns;
        self.rebuild();
    }
}

/// Renderer that traces every sprite draw to the log
#[derive(Debug, Default)]
pub struct LogRenderer {
    last: Option<SpriteView>,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last sprite handed to `draw`
    pub fn last(&self) -> Option<&SpriteView> {
        self.last.as_ref()
    }
}

impl SpriteRenderer for LogRenderer {
    fn draw(&mut self, sprite: &SpriteView) {
        log::trace!(
            "sprite {} frame {} at ({:.1}, {:.1}) flip={}",
            sprite.motion.animation_name(),
            sprite.frame_index,
            sprite.position.x,
            sprite.position.y,
            sprite.flip_horizontal()
        );
        self.last = Some(*sprite);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::player::{
        Ability, AbilityCooldown, ActionSnapshot, PlayerConfig, PlayerController,
    };

    #[test]
    fn test_title_shows_ready_abilities() {
        let mut hud = TitleBarHud::new("Dash");
        let readouts = [
            CooldownReadout::new(Ability::Dash, &AbilityCooldown::new(5.0)),
            CooldownReadout::new(Ability::DoubleJump, &AbilityCooldown::new(15.0)),
        ];
        hud.show(&readouts);
        assert_eq!(
            hud.title(),
            "Dash | [##########] DASH READY | [##########] DOUBLE JUMP READY"
        );
    }

    #[test]
    fn test_title_bar_tracks_remaining() {
        let mut cooldown = AbilityCooldown::new(4.0);
        cooldown.trigger();
        cooldown.tick(2.0);

        let mut hud = TitleBarHud::new("Dash");
        hud.show(&[CooldownReadout::new(Ability::Dash, &cooldown)]);
        assert_eq!(hud.title(), "Dash | [#####-----] DASH (2.0s)");
    }

    #[test]
    fn test_title_only_reported_when_changed() {
        let mut hud = TitleBarHud::new("Dash");
        assert!(hud.take_changed().is_some());
        assert!(hud.take_changed().is_none());

        let readouts = [CooldownReadout::new(Ability::Dash, &AbilityCooldown::new(5.0))];
        hud.show(&readouts);
        assert!(hud.take_changed().is_some());

        hud.show(&readouts);
        assert!(hud.take_changed().is_none());
    }

    #[test]
    fn test_title_appends_fps() {
        let mut hud = TitleBarHud::new("Dash");
        hud.show(&[CooldownReadout::new(Ability::Dash, &AbilityCooldown::new(5.0))]);
        hud.set_fps(59.7);
        assert_eq!(hud.title(), "Dash | [##########] DASH READY | 60 FPS");

        // Cooldown updates keep the frame rate
        hud.show(&[CooldownReadout::new(Ability::Dash, &AbilityCooldown::new(5.0))]);
        assert!(hud.title().ends_with("| 60 FPS"));
    }

    #[test]
    fn test_fps_change_marks_title_dirty() {
        let mut hud = TitleBarHud::new("Dash");
        hud.take_changed();

        // No measurement yet
        hud.set_fps(0.0);
        assert!(hud.take_changed().is_none());

        hud.set_fps(60.2);
        assert_eq!(hud.take_changed(), Some("Dash | 60 FPS"));

        hud.set_fps(59.8);
        assert!(hud.take_changed().is_none());
    }

    #[test]
    fn test_log_renderer_keeps_last_sprite() {
        let mut controller = PlayerController::new(PlayerConfig::default()).unwrap();
        controller.step(&ActionSnapshot::idle().with_right(), 1.0 / 60.0);

        let mut renderer = LogRenderer::new();
        assert!(renderer.last().is_none());
        renderer.draw(&controller.sprite_view());
        assert_eq!(renderer.last(), Some(&controller.sprite_view()));
    }
}
