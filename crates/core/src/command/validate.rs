//! Optional argument validation
//!
//! The encoder forwards whatever it is given. Callers that want to reject
//! arguments the vehicle firmware would refuse run [`validate`] first.
//! Ranges follow the Tello SDK command reference.

use core::fmt;
use core::ops::RangeInclusive;

use super::{Action, Argument, ParameterKind};

/// Accepted movement distance in centimetres.
pub const DISTANCE_RANGE_CM: RangeInclusive<f64> = 20.0..=500.0;

/// Accepted rotation in degrees.
pub const ANGLE_RANGE_DEG: RangeInclusive<f64> = 1.0..=360.0;

/// Reasons an argument is rejected by [`validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    /// The action takes an argument but none was supplied
    MissingArgument,
    /// A numeric argument was expected
    NotANumber,
    /// Numeric argument outside the accepted range
    OutOfRange { value: f64, min: f64, max: f64 },
    /// Flip argument is not one of the known direction codes
    UnknownDirection,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingArgument => write!(f, "argument missing"),
            ValidationError::NotANumber => write!(f, "argument is not a number"),
            ValidationError::OutOfRange { value, min, max } => {
                write!(f, "{value} outside accepted range {min}..={max}")
            }
            ValidationError::UnknownDirection => write!(f, "unknown flip direction"),
        }
    }
}

/// Check an argument against the vehicle's accepted ranges.
pub fn validate(action: Action, argument: &Argument<'_>) -> Result<(), ValidationError> {
    let range = match action.spec().parameter {
        ParameterKind::None => return Ok(()),
        ParameterKind::Distance => DISTANCE_RANGE_CM,
        ParameterKind::Angle => ANGLE_RANGE_DEG,
        ParameterKind::Direction => {
            return match argument {
                Argument::Direction(_) => Ok(()),
                Argument::None => Err(ValidationError::MissingArgument),
                _ => Err(ValidationError::UnknownDirection),
            };
        }
    };

    match argument {
        Argument::Number(value) if range.contains(value) => Ok(()),
        Argument::Number(value) => Err(ValidationError::OutOfRange {
            value: *value,
            min: *range.start(),
            max: *range.end(),
        }),
        Argument::None => Err(ValidationError::MissingArgument),
        Argument::Direction(_) | Argument::Text(_) => Err(ValidationError::NotANumber),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::FlipDirection;

    #[test]
    fn test_no_argument_actions_always_pass() {
        assert_eq!(validate(Action::Takeoff, &Argument::None), Ok(()));
        assert_eq!(validate(Action::Land, &Argument::Number(-1.0)), Ok(()));
    }

    #[test]
    fn test_distance_bounds_are_inclusive() {
        assert_eq!(validate(Action::Up, &Argument::from(20)), Ok(()));
        assert_eq!(validate(Action::Back, &Argument::from(500)), Ok(()));
        assert_eq!(
            validate(Action::Up, &Argument::from(19)),
            Err(ValidationError::OutOfRange {
                value: 19.0,
                min: 20.0,
                max: 500.0
            })
        );
        assert!(validate(Action::Forward, &Argument::from(501)).is_err());
    }

    #[test]
    fn test_angle_bounds() {
        assert_eq!(validate(Action::Cw, &Argument::from(1)), Ok(()));
        assert_eq!(validate(Action::Ccw, &Argument::from(360)), Ok(()));
        assert!(validate(Action::Cw, &Argument::from(0)).is_err());
        assert!(validate(Action::Ccw, &Argument::from(361)).is_err());
    }

    #[test]
    fn test_nan_is_out_of_range() {
        assert!(matches!(
            validate(Action::Up, &Argument::Number(f64::NAN)),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_numeric_actions_reject_text() {
        assert_eq!(
            validate(Action::Up, &Argument::text("high")),
            Err(ValidationError::NotANumber)
        );
        assert_eq!(
            validate(Action::Up, &Argument::None),
            Err(ValidationError::MissingArgument)
        );
    }

    #[test]
    fn test_flip_requires_known_direction() {
        assert_eq!(validate(Action::Flip, &FlipDirection::Right.into()), Ok(()));
        assert_eq!(
            validate(Action::Flip, &Argument::text("x")),
            Err(ValidationError::UnknownDirection)
        );
        assert_eq!(
            validate(Action::Flip, &Argument::None),
            Err(ValidationError::MissingArgument)
        );
    }

    #[test]
    fn test_display() {
        let err = ValidationError::OutOfRange {
            value: 600.0,
            min: 20.0,
            max: 500.0,
        };
        assert_eq!(err.to_string(), "600 outside accepted range 20..=500");
    }
}
