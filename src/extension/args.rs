//! Host argument coercion.
//!
//! The host passes block arguments as a JSON object keyed by argument
//! name (`X`, `DIRECTION`). Values are coerced loosely: anything that
//! cannot be read as the expected kind is forwarded as text.

use std::borrow::Cow;

use serde_json::Value;
use tello_blocks_core::{Argument, FlipDirection, ParameterKind};

/// Arguments of one block invocation.
pub type BlockArgs = serde_json::Map<String, Value>;

/// Argument for a command with parameter shape `kind`.
pub fn argument_for(kind: ParameterKind, args: &BlockArgs) -> Argument<'_> {
    let Some(name) = kind.argument_name() else {
        return Argument::None;
    };
    let value = args.get(name);
    match kind {
        ParameterKind::Direction => direction_argument(value),
        _ => number_argument(value),
    }
}

/// Numeric argument. Numeric strings become numbers.
pub fn number_argument(value: Option<&Value>) -> Argument<'_> {
    match value {
        None | Some(Value::Null) => Argument::None,
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) => Argument::Number(v),
            None => Argument::Text(Cow::Owned(n.to_string())),
        },
        Some(Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Argument::Number(v),
            _ => Argument::text(s),
        },
        Some(other) => text_of(other),
    }
}

/// Flip direction argument. Unknown codes are kept as text.
pub fn direction_argument(value: Option<&Value>) -> Argument<'_> {
    match value {
        None | Some(Value::Null) => Argument::None,
        Some(Value::String(s)) => match FlipDirection::from_code(s) {
            Some(direction) => Argument::Direction(direction),
            None => Argument::text(s),
        },
        Some(other) => text_of(other),
    }
}

fn text_of(value: &Value) -> Argument<'_> {
    match value {
        Value::Bool(true) => Argument::text("true"),
        Value::Bool(false) => Argument::text("false"),
        other => Argument::Text(Cow::Owned(other.to_string())),
    }
}
