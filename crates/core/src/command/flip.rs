//! Flip directions and their protocol codes.

use crate::locale::LocalizedText;
use crate::messages;

/// Direction the vehicle flips toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlipDirection {
    Front,
    Back,
    Left,
    Right,
}

impl FlipDirection {
    /// Menu order.
    pub const ALL: [FlipDirection; 4] = [
        FlipDirection::Front,
        FlipDirection::Back,
        FlipDirection::Left,
        FlipDirection::Right,
    ];

    /// Single-character protocol code.
    pub const fn code(self) -> &'static str {
        match self {
            FlipDirection::Front => "f",
            FlipDirection::Back => "b",
            FlipDirection::Left => "l",
            FlipDirection::Right => "r",
        }
    }

    /// Parse a protocol code. Only the exact lowercase codes match.
    pub fn from_code(code: &str) -> Option<FlipDirection> {
        Self::ALL.into_iter().find(|direction| direction.code() == code)
    }

    /// Menu label per locale.
    pub const fn label(self) -> LocalizedText {
        match self {
            FlipDirection::Front => messages::FLIP_FRONT,
            FlipDirection::Back => messages::FLIP_BACK,
            FlipDirection::Left => messages::FLIP_LEFT,
            FlipDirection::Right => messages::FLIP_RIGHT,
        }
    }
}
