// Pressed / just-pressed tracking for the player's actions

use super::action::{Action, InputSource};
use crate::game::player::ActionSnapshot;
use std::collections::{HashMap, HashSet};

/// Input state for the local player.
///
/// Several sources can drive one action (ArrowLeft and A, a key and a touch
/// button). An action is down while at least one of its sources is down.
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Sources currently holding each action; never holds an empty set
    held_by: HashMap<Action, HashSet<InputSource>>,

    /// Actions that went down since the last update
    just_pressed: HashSet<Action>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.held_by.contains_key(&action)
    }

    /// Check if an action went down this frame.
    ///
    /// Stays true until the next update even if the source was already
    /// released, so a tap shorter than a frame is not lost.
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Register a source going down. Only the first source of an action
    /// produces a press edge.
    pub(crate) fn press(&mut self, action: Action, source: InputSource) {
        let sources = self.held_by.entry(action).or_default();
        let was_up = sources.is_empty();
        sources.insert(source);
        if was_up {
            self.just_pressed.insert(action);
        }
    }

    /// Register a source going up. The action is released with its last source.
    pub(crate) fn release(&mut self, action: Action, source: InputSource) {
        if let Some(sources) = self.held_by.get_mut(&action) {
            sources.remove(&source);
            if sources.is_empty() {
                self.held_by.remove(&action);
            }
        }
    }

    /// Start a new frame. Call once per frame after the controller has stepped.
    pub(crate) fn update(&mut self) {
        self.just_pressed.clear();
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.held_by.clear();
        self.just_pressed.clear();
    }

    /// Build the controller's snapshot for this frame
    pub fn snapshot(&self) -> ActionSnapshot {
        ActionSnapshot {
            move_left: self.is_pressed(Action::MoveLeft),
            move_right: self.is_pressed(Action::MoveRight),
            jump_pressed: self.just_pressed(Action::Jump),
            jump_held: self.is_pressed(Action::Jump),
            dash_pressed: self.just_pressed(Action::Dash),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::touch::TouchButton;
    use winit::keyboard::KeyCode;

    const SPACE: InputSource = InputSource::Keyboard(KeyCode::Space);
    const KEY_W: InputSource = InputSource::Keyboard(KeyCode::KeyW);

    #[test]
    fn test_press_action() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump, SPACE);
        assert!(input.is_pressed(Action::Jump));
        assert!(input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_release_action() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump, SPACE);
        input.update();
        input.release(Action::Jump, SPACE);
        assert!(!input.is_pressed(Action::Jump));
    }

    #[test]
    fn test_just_pressed_cleared_on_update() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump, SPACE);
        input.update();
        assert!(input.is_pressed(Action::Jump));
        assert!(!input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_repeat_press_is_not_a_new_edge() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump, SPACE);
        input.update();
        input.press(Action::Jump, SPACE);
        assert!(!input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_second_source_keeps_action_down() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump, SPACE);
        input.press(Action::Jump, KEY_W);
        input.update();

        input.release(Action::Jump, SPACE);
        assert!(input.is_pressed(Action::Jump));

        // Pressing the first source again is not a new edge while W is down
        input.press(Action::Jump, SPACE);
        assert!(!input.just_pressed(Action::Jump));

        input.release(Action::Jump, SPACE);
        input.release(Action::Jump, KEY_W);
        assert!(!input.is_pressed(Action::Jump));
    }

    #[test]
    fn test_key_and_touch_share_action() {
        let touch = InputSource::touch(TouchButton::Left);
        let key = InputSource::key(KeyCode::ArrowLeft);
        let mut input = PlayerInput::new();
        input.press(Action::MoveLeft, touch);
        input.press(Action::MoveLeft, key);
        input.release(Action::MoveLeft, touch);
        assert!(input.snapshot().move_left);
    }

    #[test]
    fn test_tap_within_one_frame_still_registers() {
        let dash = InputSource::key(KeyCode::KeyF);
        let mut input = PlayerInput::new();
        input.press(Action::Dash, dash);
        input.release(Action::Dash, dash);

        let snapshot = input.snapshot();
        assert!(snapshot.dash_pressed);
        assert!(!input.is_pressed(Action::Dash));
    }

    #[test]
    fn test_release_unpressed_action() {
        let mut input = PlayerInput::new();
        input.release(Action::Jump, SPACE);
        assert!(!input.is_pressed(Action::Jump));
    }

    #[test]
    fn test_snapshot_held_jump() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump, SPACE);
        input.press(Action::MoveLeft, InputSource::key(KeyCode::KeyA));

        let first = input.snapshot();
        assert!(first.jump_pressed && first.jump_held && first.move_left);

        input.update();
        let second = input.snapshot();
        assert!(!second.jump_pressed);
        assert!(second.jump_held);
        assert!(second.move_left);
        assert!(!second.move_right);
    }

    #[test]
    fn test_reset() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump, SPACE);
        input.press(Action::MoveRight, InputSource::key(KeyCode::KeyD));
        input.reset();

        assert_eq!(input.snapshot(), ActionSnapshot::idle());
    }
}
