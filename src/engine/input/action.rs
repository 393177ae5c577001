// Game action definitions and default key bindings

use super::touch::TouchButton;
use winit::keyboard::KeyCode;

/// Logical actions the keyboard can drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    Jump,

    // Abilities
    Dash,

    // Meta actions
    Pause,
}

/// Represents a physical input that can be bound to an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    Touch(TouchButton),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a touch button input source
    pub fn touch(button: TouchButton) -> Self {
        Self::Touch(button)
    }
}

/// Default bindings: arrows + space + F, WASD as an alternative, and the
/// on-screen touch buttons
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        // Movement
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::Space), Action::Jump),
        (InputSource::key(KeyCode::ArrowUp), Action::Jump),
        (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        (InputSource::key(KeyCode::KeyW), Action::Jump),
        // Abilities
        (InputSource::key(KeyCode::KeyF), Action::Dash),
        (InputSource::key(KeyCode::ShiftLeft), Action::Dash),
        // Touch
        (InputSource::touch(TouchButton::Left), Action::MoveLeft),
        (InputSource::touch(TouchButton::Right), Action::MoveRight),
        (InputSource::touch(TouchButton::Jump), Action::Jump),
        (InputSource::touch(TouchButton::Dash), Action::Dash),
    ]
}

/// Bindings that stay active whatever the player layout is
pub fn global_bindings() -> Vec<(InputSource, Action)> {
    vec![(InputSource::key(KeyCode::KeyP), Action::Pause)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_source_keyboard_creation() {
        let source = InputSource::key(KeyCode::KeyF);
        assert_eq!(source, InputSource::Keyboard(KeyCode::KeyF));
    }

    #[test]
    fn test_default_bindings_cover_every_move() {
        let bindings = default_bindings();
        for action in [Action::MoveLeft, Action::MoveRight, Action::Jump, Action::Dash] {
            assert!(
                bindings.iter().any(|(_, bound)| *bound == action),
                "{action:?} has no default binding"
            );
        }
    }

    #[test]
    fn test_arrow_and_space_layout() {
        let bindings = default_bindings();
        assert!(bindings.contains(&(InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft)));
        assert!(bindings.contains(&(InputSource::key(KeyCode::ArrowRight), Action::MoveRight)));
        assert!(bindings.contains(&(InputSource::key(KeyCode::Space), Action::Jump)));
        assert!(bindings.contains(&(InputSource::key(KeyCode::KeyF), Action::Dash)));
    }

    #[test]
    fn test_every_touch_button_is_bound() {
        let bindings = default_bindings();
        for button in TouchButton::ALL {
            assert!(bindings
                .iter()
                .any(|(source, _)| *source == InputSource::touch(button)));
        }
    }

    #[test]
    fn test_pause_is_global() {
        assert!(global_bindings()
            .iter()
            .any(|(_, action)| *action == Action::Pause));
        assert!(!default_bindings()
            .iter()
            .any(|(_, action)| *action == Action::Pause));
    }

    #[test]
    fn test_no_duplicate_inputs() {
        let mut seen_sources = std::collections::HashSet::new();
        for (source, _) in default_bindings().into_iter().chain(global_bindings()) {
            assert!(
                seen_sources.insert(source),
                "Duplicate input source found in bindings"
            );
        }
    }
}
