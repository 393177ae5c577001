// Input manager - turns winit keyboard and touch events into per-frame action snapshots

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::player::PlayerInput;
use super::touch::{TouchButton, TouchLayout};
use crate::game::player::{ActionSnapshot, ActionSource};
use glam::Vec2;
use std::collections::HashMap;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, Touch, TouchPhase};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Owns the bindings, the touch button layout and the player's action state
#[derive(Debug)]
pub struct InputManager {
    config: InputConfig,
    player: PlayerInput,
    touch_layout: TouchLayout,
    scale_factor: f64,

    /// Button each active finger is holding, by touch id
    active_touches: HashMap<u64, TouchButton>,
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            player: PlayerInput::new(),
            touch_layout: TouchLayout::default(),
            scale_factor: 1.0,
            active_touches: HashMap::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only physical keys carry a KeyCode
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(key_code, event.state, event.repeat);
        }
    }

    /// Apply one key transition. Returns the bound action, if any.
    pub fn process_key(
        &mut self,
        key_code: KeyCode,
        state: ElementState,
        repeat: bool,
    ) -> Option<Action> {
        let source = InputSource::key(key_code);
        let action = self.config.get_action(source)?;
        match state {
            ElementState::Pressed => {
                // Key repeats are not new presses
                if !repeat {
                    self.player.press(action, source);
                }
            }
            ElementState::Released => self.player.release(action, source),
        }
        Some(action)
    }

    /// Process a touch event from winit (physical pixels)
    pub fn process_touch_event(&mut self, touch: &Touch) {
        let location = touch.location.to_logical::<f32>(self.scale_factor);
        self.process_touch(touch.id, touch.phase, Vec2::new(location.x, location.y));
    }

    /// Apply one touch transition at a logical position.
    ///
    /// A finger holds the button it is over. Sliding off releases it, sliding
    /// onto another button presses that one instead.
    pub fn process_touch(&mut self, id: u64, phase: TouchPhase, position: Vec2) {
        match phase {
            TouchPhase::Started | TouchPhase::Moved => {
                let over = self.touch_layout.hit_test(position);
                let held = self.active_touches.get(&id).copied();
                if over == held {
                    return;
                }
                if let Some(button) = held {
                    self.active_touches.remove(&id);
                    self.release_touch(button);
                }
                if let Some(button) = over {
                    self.active_touches.insert(id, button);
                    self.press_touch(button);
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if let Some(button) = self.active_touches.remove(&id) {
                    self.release_touch(button);
                }
            }
        }
    }

    /// Lay the touch buttons out for a new window size
    pub fn resize(&mut self, size: PhysicalSize<u32>, scale_factor: f64) {
        self.scale_factor = scale_factor;
        let logical = size.to_logical::<f32>(scale_factor);
        self.touch_layout = TouchLayout::for_window(logical.width, logical.height);
        log::debug!(
            "Touch layout for {:.0}x{:.0} (scale {:.2})",
            logical.width,
            logical.height,
            scale_factor
        );
    }

    fn press_touch(&mut self, button: TouchButton) {
        let source = InputSource::touch(button);
        if let Some(action) = self.config.get_action(source) {
            self.player.press(action, source);
        }
    }

    fn release_touch(&mut self, button: TouchButton) {
        let source = InputSource::touch(button);
        if let Some(action) = self.config.get_action(source) {
            self.player.release(action, source);
        }
    }

    /// Start a new frame. Call once per frame after the snapshot was consumed.
    pub fn update(&mut self) {
        self.player.update();
    }

    /// Release every action, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.player.reset();
        self.active_touches.clear();
    }

    pub fn player(&self) -> &PlayerInput {
        &self.player
    }

    pub fn touch_layout(&self) -> &TouchLayout {
        &self.touch_layout
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(InputConfig::with_defaults())
    }
}

impl ActionSource for InputManager {
    fn snapshot(&self) -> ActionSnapshot {
        self.player.snapshot()
    }
}
