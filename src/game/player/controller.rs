// Player kinematics & ability controller

use glam::Vec2;
use log::debug;

use super::animation::FrameCycle;
use super::config::{ConfigError, PlayerConfig};
use super::cooldown::{Ability, AbilityCooldown};
use super::snapshot::ActionSnapshot;
use super::state::{MotionState, PlayerState};
use crate::game::hud::CooldownReadout;
use crate::game::render::SpriteView;

/// Discrete things that happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepEvents {
    /// Ground jump fired
    pub jumped: bool,
    /// Double jump fired
    pub air_jumped: bool,
    pub dashed: bool,
    /// Touched the ground after being airborne
    pub landed: bool,
    /// Dash cooldown finished this step
    pub dash_ready: bool,
    /// Double jump cooldown finished this step
    pub double_jump_ready: bool,
}

/// Owns the player's state and both ability cooldowns.
///
/// The only mutation path is [`PlayerController::step`]; renderers and
/// cooldown displays read through [`sprite_view`](Self::sprite_view) and
/// [`cooldown_readouts`](Self::cooldown_readouts) between steps.
#[derive(Debug, Clone)]
pub struct PlayerController {
    config: PlayerConfig,
    state: PlayerState,
    dash: AbilityCooldown,
    double_jump: AbilityCooldown,
    animation: FrameCycle,
    /// Time left in the dash commitment window
    dash_window: f32,
    /// Horizontal velocity held while the dash window is open
    dash_velocity: f32,
    /// Jump signal seen on the previous step
    jump_latch: bool,
}

impl PlayerController {
    /// Validate the config and spawn the player at its spawn point.
    ///
    /// The player starts grounded only if the spawn point already rests on
    /// (or below) the ground line; otherwise it falls there.
    pub fn new(config: PlayerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = Self::spawn_state(&config);
        Ok(Self::with_valid_state(config, state))
    }

    /// Validate the config and start from an explicit state
    pub fn from_state(config: PlayerConfig, state: PlayerState) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_state(config, state))
    }

    fn with_valid_state(config: PlayerConfig, state: PlayerState) -> Self {
        Self {
            dash: AbilityCooldown::new(config.dash_cooldown),
            double_jump: AbilityCooldown::new(config.double_jump_cooldown),
            animation: FrameCycle::new(config.frame_count, config.frame_duration),
            dash_window: 0.0,
            dash_velocity: 0.0,
            jump_latch: false,
            config,
            state,
        }
    }

    fn spawn_state(config: &PlayerConfig) -> PlayerState {
        let size = Vec2::new(config.width, config.height);
        let mut position = Vec2::new(config.spawn_x, config.spawn_y);
        let resting_y = config.ground_y - config.height;
        let grounded = position.y >= resting_y;
        if grounded {
            position.y = resting_y;
        }
        PlayerState::spawn(position, size, grounded)
    }

    /// Advance the simulation by one tick.
    ///
    /// `dt` is the measured frame time in seconds. NaN and non-positive values
    /// count as zero; anything above `max_step` is clamped to it.
    pub fn step(&mut self, input: &ActionSnapshot, dt: f32) -> StepEvents {
        let dt = self.sanitize_dt(dt);
        let mut events = StepEvents::default();

        // Horizontal intent
        let intent = input.horizontal_intent();
        self.state.is_moving = intent.is_some();
        if let Some(facing) = intent {
            self.state.facing = facing;
        }
        self.state.velocity.x = if self.dash_window > 0.0 {
            self.dash_velocity
        } else {
            intent.map_or(0.0, |facing| facing.sign() * self.config.speed)
        };

        // Jump / double jump, one per edge
        let jump_signal = input.jump_pressed || input.jump_held;
        let jump_edge = input.jump_pressed || (input.jump_held && !self.jump_latch);
        self.jump_latch = jump_signal;

        if jump_edge {
            if self.state.grounded {
                self.state.velocity.y = self.config.jump_power;
                self.state.grounded = false;
                self.state.can_air_jump = true;
                events.jumped = true;
            } else if self.state.can_air_jump && self.double_jump.is_ready() {
                self.state.velocity.y = self.config.double_jump_power();
                self.state.can_air_jump = false;
                self.double_jump.trigger();
                events.air_jumped = true;
                debug!("Double jump, cooldown {:.1}s", self.double_jump.total());
            }
        }

        // Dash
        if input.dash_pressed && self.dash.trigger() {
            // Facing already reflects this tick's intent, or the last one
            self.dash_velocity = self.state.facing.sign() * self.config.dash_speed();
            self.dash_window = self.config.dash_duration;
            self.state.velocity.x = self.dash_velocity;
            events.dashed = true;
            debug!(
                "Dash {:?} at {:.1} u/s, cooldown {:.1}s",
                self.state.facing,
                self.dash_velocity,
                self.dash.total()
            );
        }

        // Gravity
        self.state.velocity.y += self.config.gravity * dt;

        // Integrate
        self.state.position += self.state.velocity * dt;

        // Ground collision
        if self.state.bottom() >= self.config.ground_y {
            self.state.position.y = self.config.ground_y - self.state.size.y;
            self.state.velocity.y = 0.0;
            if !self.state.grounded {
                events.landed = true;
                debug!("Landed at x={:.1}", self.state.position.x);
            }
            self.state.grounded = true;
        }

        // Animation
        self.animation.update(dt, self.state.is_moving);
        self.state.animation_frame_index = self.animation.current_frame();

        // Cooldowns and the dash window
        if self.dash.tick(dt) {
            events.dash_ready = true;
            debug!("{} ready", Ability::Dash.display_name());
        }
        if self.double_jump.tick(dt) {
            events.double_jump_ready = true;
            debug!("{} ready", Ability::DoubleJump.display_name());
        }
        self.dash_window = (self.dash_window - dt).max(0.0);

        events
    }

    fn sanitize_dt(&self, dt: f32) -> f32 {
        if dt.is_nan() || dt <= 0.0 {
            0.0
        } else {
            dt.min(self.config.max_step)
        }
    }

    /// Put the player back at the spawn point with both abilities ready
    pub fn respawn(&mut self) {
        self.state = Self::spawn_state(&self.config);
        self.dash.reset();
        self.double_jump.reset();
        self.animation.stop();
        self.dash_window = 0.0;
        self.dash_velocity = 0.0;
        self.jump_latch = false;
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Cooldown for the given ability
    pub fn cooldown(&self, ability: Ability) -> &AbilityCooldown {
        match ability {
            Ability::Dash => &self.dash,
            Ability::DoubleJump => &self.double_jump,
        }
    }

    /// Whether a dash commitment window is open
    pub fn is_dashing(&self) -> bool {
        self.dash_window > 0.0
    }

    pub fn motion_state(&self) -> MotionState {
        MotionState::classify(&self.state, self.is_dashing())
    }

    /// What a renderer needs for this frame
    pub fn sprite_view(&self) -> SpriteView {
        SpriteView {
            position: self.state.position,
            size: self.state.size,
            frame_index: self.state.animation_frame_index,
            is_moving: self.state.is_moving,
            facing: self.state.facing,
            motion: self.motion_state(),
        }
    }

    /// What a cooldown display needs for this frame, in display order
    pub fn cooldown_readouts(&self) -> [CooldownReadout; 2] {
        Ability::ALL.map(|ability| CooldownReadout::new(ability, self.cooldown(ability)))
    }
}
