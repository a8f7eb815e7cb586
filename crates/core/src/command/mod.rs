//! Vehicle commands
//!
//! Every block that drives the vehicle is an [`Action`]. Each action has
//! one immutable [`CommandSpec`] in [`COMMAND_SPECS`] describing its
//! protocol opcode, its parameter shape and its display text.
//!
//! Turning an action plus argument into a protocol line is [`encode`];
//! range checks live in the separate [`validate`] step and are never
//! applied by the encoder itself.

mod encode;
mod flip;
mod validate;

use alloc::borrow::Cow;

pub use encode::{encode, format_number};
pub use flip::FlipDirection;
pub use validate::{validate, ValidationError, ANGLE_RANGE_DEG, DISTANCE_RANGE_CM};

use crate::locale::LocalizedText;
use crate::messages;

/// A vehicle action exposed as a command block.
///
/// Declaration order matches [`COMMAND_SPECS`] and the block order shown
/// by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Takeoff,
    Land,
    Emergency,
    Up,
    Down,
    Left,
    Right,
    Forward,
    Back,
    Cw,
    Ccw,
    Flip,
}

impl Action {
    pub const ALL: [Action; 12] = [
        Action::Takeoff,
        Action::Land,
        Action::Emergency,
        Action::Up,
        Action::Down,
        Action::Left,
        Action::Right,
        Action::Forward,
        Action::Back,
        Action::Cw,
        Action::Ccw,
        Action::Flip,
    ];

    /// Static description of this action.
    pub fn spec(self) -> &'static CommandSpec {
        &COMMAND_SPECS[self as usize]
    }

    /// Protocol opcode, also used as the block opcode.
    pub fn opcode(self) -> &'static str {
        self.spec().opcode
    }

    /// Look up an action by its opcode.
    pub fn from_opcode(opcode: &str) -> Option<Action> {
        Self::ALL.into_iter().find(|action| action.opcode() == opcode)
    }
}

/// Shape of the single parameter a command takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// No parameter; the command line is the bare opcode.
    None,
    /// Distance in centimetres.
    Distance,
    /// Rotation in degrees.
    Angle,
    /// One of the [`FlipDirection`] codes.
    Direction,
}

impl ParameterKind {
    /// Argument name the host uses in block text and invocation args.
    pub const fn argument_name(self) -> Option<&'static str> {
        match self {
            ParameterKind::None => None,
            ParameterKind::Distance | ParameterKind::Angle => Some("X"),
            ParameterKind::Direction => Some("DIRECTION"),
        }
    }

    /// Whether the parameter is numeric.
    pub const fn is_numeric(self) -> bool {
        matches!(self, ParameterKind::Distance | ParameterKind::Angle)
    }
}

/// Prefill value shown by the visual editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    None,
    Number(i32),
    Direction(FlipDirection),
}

/// Immutable description of one supported action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub action: Action,
    /// Stable opcode, identical to the protocol keyword.
    pub opcode: &'static str,
    pub parameter: ParameterKind,
    pub default_value: DefaultValue,
    /// Block text per locale.
    pub text: LocalizedText,
}

/// Default distance prefill in centimetres.
pub const DEFAULT_DISTANCE_CM: i32 = 50;

/// Default rotation prefill in degrees.
pub const DEFAULT_ANGLE_DEG: i32 = 90;

const fn no_arg(action: Action, opcode: &'static str, text: LocalizedText) -> CommandSpec {
    CommandSpec {
        action,
        opcode,
        parameter: ParameterKind::None,
        default_value: DefaultValue::None,
        text,
    }
}

const fn distance(action: Action, opcode: &'static str, text: LocalizedText) -> CommandSpec {
    CommandSpec {
        action,
        opcode,
        parameter: ParameterKind::Distance,
        default_value: DefaultValue::Number(DEFAULT_DISTANCE_CM),
        text,
    }
}

const fn angle(action: Action, opcode: &'static str, text: LocalizedText) -> CommandSpec {
    CommandSpec {
        action,
        opcode,
        parameter: ParameterKind::Angle,
        default_value: DefaultValue::Number(DEFAULT_ANGLE_DEG),
        text,
    }
}

/// One spec per [`Action`], in declaration order.
pub static COMMAND_SPECS: [CommandSpec; 12] = [
    no_arg(Action::Takeoff, "takeoff", messages::TAKEOFF),
    no_arg(Action::Land, "land", messages::LAND),
    no_arg(Action::Emergency, "emergency", messages::EMERGENCY),
    distance(Action::Up, "up", messages::UP),
    distance(Action::Down, "down", messages::DOWN),
    distance(Action::Left, "left", messages::LEFT),
    distance(Action::Right, "right", messages::RIGHT),
    distance(Action::Forward, "forward", messages::FORWARD),
    distance(Action::Back, "back", messages::BACK),
    angle(Action::Cw, "cw", messages::CW),
    angle(Action::Ccw, "ccw", messages::CCW),
    CommandSpec {
        action: Action::Flip,
        opcode: "flip",
        parameter: ParameterKind::Direction,
        default_value: DefaultValue::Direction(FlipDirection::Front),
        text: messages::FLIP,
    },
];

/// Argument supplied with a command invocation.
///
/// The encoder accepts any argument for any action; values it cannot
/// interpret are forwarded as text.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument<'a> {
    /// No argument supplied.
    None,
    /// A numeric value already coerced by the calling layer.
    Number(f64),
    /// A known flip direction.
    Direction(FlipDirection),
    /// Anything else, forwarded verbatim.
    Text(Cow<'a, str>),
}

impl<'a> Argument<'a> {
    /// Text argument borrowing from the caller.
    pub fn text(value: &'a str) -> Self {
        Argument::Text(Cow::Borrowed(value))
    }
}

impl From<f64> for Argument<'_> {
    fn from(value: f64) -> Self {
        Argument::Number(value)
    }
}

impl From<i32> for Argument<'_> {
    fn from(value: i32) -> Self {
        Argument::Number(f64::from(value))
    }
}

impl From<FlipDirection> for Argument<'_> {
    fn from(direction: FlipDirection) -> Self {
        Argument::Direction(direction)
    }
}
