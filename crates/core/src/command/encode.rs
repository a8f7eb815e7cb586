//! Command line encoding.

use alloc::format;
use alloc::string::String;

use super::{Action, Argument, ParameterKind};

/// Build the protocol command line for `action`.
///
/// Zero-parameter actions encode as the bare opcode and ignore the
/// argument. Every other action encodes as `"<opcode> <argument>"`:
/// numbers in plain decimal, flip directions as their one-character code
/// and text verbatim. No range or enum checking happens here; a missing
/// argument yields the bare opcode and the vehicle decides what to do
/// with it.
pub fn encode(action: Action, argument: &Argument<'_>) -> String {
    let opcode = action.opcode();
    if action.spec().parameter == ParameterKind::None {
        return String::from(opcode);
    }

    match argument {
        Argument::None => String::from(opcode),
        Argument::Number(value) => format!("{opcode} {}", format_number(*value)),
        Argument::Direction(direction) => format!("{opcode} {}", direction.code()),
        Argument::Text(text) => format!("{opcode} {text}"),
    }
}

/// Render a number the way the host renders numbers as text.
///
/// Integral values have no fractional part (`50.0` -> `"50"`), negative
/// zero prints as `"0"` and non-finite values use the host spellings.
/// Never uses exponent notation.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        String::from("NaN")
    } else if value.is_infinite() {
        String::from(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else if value == 0.0 {
        String::from("0")
    } else {
        format!("{value}")
    }
}
