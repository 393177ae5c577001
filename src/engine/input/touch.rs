// On-screen touch buttons
//
// Two buttons bottom-left (move left / right), two bottom-right (jump / dash).
// Regions are recomputed whenever the window size changes.

use glam::Vec2;

/// Side of each square button (logical pixels)
const BUTTON_SIZE: f32 = 80.0;

/// Gap between buttons and from the window edge
const BUTTON_MARGIN: f32 = 20.0;

/// Virtual buttons a finger can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchButton {
    Left,
    Right,
    Jump,
    Dash,
}

impl TouchButton {
    pub const ALL: [TouchButton; 4] = [
        TouchButton::Left,
        TouchButton::Right,
        TouchButton::Jump,
        TouchButton::Dash,
    ];
}

/// Axis-aligned screen rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonRegion {
    pub min: Vec2,
    pub max: Vec2,
}

impl ButtonRegion {
    fn square(min: Vec2, size: f32) -> Self {
        Self {
            min,
            max: min + Vec2::splat(size),
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmplt(self.max).all()
    }
}

/// Where each touch button sits for a given window size
#[derive(Debug, Clone, PartialEq)]
pub struct TouchLayout {
    regions: [(TouchButton, ButtonRegion); 4],
}

impl TouchLayout {
    /// Lay the buttons out along the bottom edge of a `width` x `height` window
    pub fn for_window(width: f32, height: f32) -> Self {
        let top = height - BUTTON_MARGIN - BUTTON_SIZE;
        let step = BUTTON_SIZE + BUTTON_MARGIN;
        let left = BUTTON_MARGIN;
        let right = width - step;

        Self {
            regions: [
                (TouchButton::Left, ButtonRegion::square(Vec2::new(left, top), BUTTON_SIZE)),
                (
                    TouchButton::Right,
                    ButtonRegion::square(Vec2::new(left + step, top), BUTTON_SIZE),
                ),
                (
                    TouchButton::Jump,
                    ButtonRegion::square(Vec2::new(right, top), BUTTON_SIZE),
                ),
                (
                    TouchButton::Dash,
                    ButtonRegion::square(Vec2::new(right - step, top), BUTTON_SIZE),
                ),
            ],
        }
    }

    /// Button under a touch point, if any
    pub fn hit_test(&self, point: Vec2) -> Option<TouchButton> {
        self.regions
            .iter()
            .find(|(_, region)| region.contains(point))
            .map(|(button, _)| *button)
    }

    pub fn region(&self, button: TouchButton) -> ButtonRegion {
        self.regions
            .iter()
            .find(|(candidate, _)| *candidate == button)
            .map(|(_, region)| *region)
            .unwrap_or(ButtonRegion {
                min: Vec2::ZERO,
                max: Vec2::ZERO,
            })
    }
}

impl Default for TouchLayout {
    fn default() -> Self {
        Self::for_window(800.0, 600.0)
    }
}
