//! State record parsing.
//!
//! Two encodings are accepted:
//!
//! - a JSON object, e.g. `{"pitch": 3, "bat": 77}`
//! - the vehicle's native state line, e.g.
//!   `pitch:0;roll:0;yaw:0;vgx:0;...;bat:85;baro:-57.62;time:0;\r\n`
//!
//! Unknown keys are ignored in both. A known field may be a number or a
//! numeric string; values are kept exactly as reported.

use serde_json::{Map, Value};
use tello_blocks_core::{TelemetryField, TelemetrySnapshot};

use crate::error::BridgeError;

/// Parse one state record into a complete snapshot.
pub fn parse_state(payload: &str) -> Result<TelemetrySnapshot, BridgeError> {
    let trimmed = payload.trim();
    if trimmed.starts_with('{') {
        parse_json(trimmed)
    } else {
        parse_state_line(trimmed)
    }
}

fn parse_json(json: &str) -> Result<TelemetrySnapshot, BridgeError> {
    // A repeated key keeps its last value
    let record: Map<String, Value> = serde_json::from_str(json)
        .map_err(|e| BridgeError::Parse(format!("JSON parse error: {e}")))?;

    let mut snapshot = TelemetrySnapshot::default();
    for field in TelemetryField::ALL {
        match record.get(field.key()) {
            None | Some(Value::Null) => {}
            Some(Value::Number(n)) => match n.as_f64() {
                Some(value) => snapshot.set(field, value),
                None => return Err(non_numeric(field, &n.to_string())),
            },
            Some(Value::String(text)) => snapshot.set(field, numeric(field, text)?),
            Some(other) => return Err(non_numeric(field, &other.to_string())),
        }
    }
    Ok(snapshot)
}

fn parse_state_line(line: &str) -> Result<TelemetrySnapshot, BridgeError> {
    let mut snapshot = TelemetrySnapshot::default();
    let mut known_fields = 0usize;

    for segment in line.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let (key, value) = segment
            .split_once(':')
            .ok_or_else(|| BridgeError::Parse(format!("expected key:value, got {segment:?}")))?;

        // mid, x, y, z, mpry, templ, temph ...
        let Some(field) = TelemetryField::from_key(key.trim()) else {
            continue;
        };

        snapshot.set(field, numeric(field, value)?);
        known_fields += 1;
    }

    if known_fields == 0 {
        return Err(BridgeError::Parse("no telemetry fields in state line".into()));
    }
    Ok(snapshot)
}

fn numeric(field: TelemetryField, text: &str) -> Result<f64, BridgeError> {
    text.trim().parse().map_err(|_| non_numeric(field, text))
}

fn non_numeric(field: TelemetryField, text: &str) -> BridgeError {
    BridgeError::Parse(format!("non-numeric value for {}: {text:?}", field.key()))
}
