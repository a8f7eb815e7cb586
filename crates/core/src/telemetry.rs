//! Telemetry fields and snapshot
//!
//! The vehicle reports its state as a flat record of numeric fields.
//! [`TelemetrySnapshot`] holds one such record; a field the record did
//! not carry is `None`.

use crate::locale::LocalizedText;
use crate::messages;

/// A telemetry field exposed as a reporter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TelemetryField {
    /// Pitch in degrees
    Pitch,
    /// Roll in degrees
    Roll,
    /// Yaw in degrees
    Yaw,
    /// X speed in cm/s
    Vgx,
    /// Y speed in cm/s
    Vgy,
    /// Z speed in cm/s
    Vgz,
    /// Time-of-flight height above ground in cm
    Tof,
    /// Height since takeoff in cm
    Height,
    /// Battery percentage
    Bat,
    /// Barometric height in cm
    Baro,
    /// Seconds airborne
    Time,
    /// X acceleration in 0.001 g
    Agx,
    /// Y acceleration in 0.001 g
    Agy,
    /// Z acceleration in 0.001 g
    Agz,
}

impl TelemetryField {
    /// Reporter order shown by the host.
    pub const ALL: [TelemetryField; 14] = [
        TelemetryField::Pitch,
        TelemetryField::Roll,
        TelemetryField::Yaw,
        TelemetryField::Vgx,
        TelemetryField::Vgy,
        TelemetryField::Vgz,
        TelemetryField::Tof,
        TelemetryField::Height,
        TelemetryField::Bat,
        TelemetryField::Baro,
        TelemetryField::Time,
        TelemetryField::Agx,
        TelemetryField::Agy,
        TelemetryField::Agz,
    ];

    /// Key the vehicle uses for this field in its state record.
    pub const fn key(self) -> &'static str {
        match self {
            TelemetryField::Pitch => "pitch",
            TelemetryField::Roll => "roll",
            TelemetryField::Yaw => "yaw",
            TelemetryField::Vgx => "vgx",
            TelemetryField::Vgy => "vgy",
            TelemetryField::Vgz => "vgz",
            TelemetryField::Tof => "tof",
            TelemetryField::Height => "h",
            TelemetryField::Bat => "bat",
            TelemetryField::Baro => "baro",
            TelemetryField::Time => "time",
            TelemetryField::Agx => "agx",
            TelemetryField::Agy => "agy",
            TelemetryField::Agz => "agz",
        }
    }

    /// Reporter block opcode. Same as [`key`](Self::key) except for height.
    pub const fn opcode(self) -> &'static str {
        match self {
            TelemetryField::Height => "height",
            other => other.key(),
        }
    }

    /// Reporter text per locale.
    pub const fn text(self) -> LocalizedText {
        match self {
            TelemetryField::Pitch => messages::PITCH,
            TelemetryField::Roll => messages::ROLL,
            TelemetryField::Yaw => messages::YAW,
            TelemetryField::Vgx => messages::VGX,
            TelemetryField::Vgy => messages::VGY,
            TelemetryField::Vgz => messages::VGZ,
            TelemetryField::Tof => messages::TOF,
            TelemetryField::Height => messages::HEIGHT,
            TelemetryField::Bat => messages::BAT,
            TelemetryField::Baro => messages::BARO,
            TelemetryField::Time => messages::TIME,
            TelemetryField::Agx => messages::AGX,
            TelemetryField::Agy => messages::AGY,
            TelemetryField::Agz => messages::AGZ,
        }
    }

    pub fn from_opcode(opcode: &str) -> Option<TelemetryField> {
        Self::ALL.into_iter().find(|field| field.opcode() == opcode)
    }

    pub fn from_key(key: &str) -> Option<TelemetryField> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// One complete telemetry record as reported by the vehicle.
///
/// Values are kept exactly as reported. A snapshot is built once from a
/// state record and then only ever replaced as a whole.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TelemetrySnapshot {
    pub pitch: Option<f64>,
    pub roll: Option<f64>,
    pub yaw: Option<f64>,
    pub vgx: Option<f64>,
    pub vgy: Option<f64>,
    pub vgz: Option<f64>,
    pub tof: Option<f64>,
    pub h: Option<f64>,
    pub bat: Option<f64>,
    pub baro: Option<f64>,
    pub time: Option<f64>,
    pub agx: Option<f64>,
    pub agy: Option<f64>,
    pub agz: Option<f64>,
}

impl TelemetrySnapshot {
    /// Value of `field`, if the record carried it.
    pub fn get(&self, field: TelemetryField) -> Option<f64> {
        *self.slot(field)
    }

    /// Set one field while the snapshot is being assembled.
    pub fn set(&mut self, field: TelemetryField, value: f64) {
        *self.slot_mut(field) = Some(value);
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, field: TelemetryField, value: f64) -> Self {
        self.set(field, value);
        self
    }

    /// Whether no field is present.
    pub fn is_empty(&self) -> bool {
        TelemetryField::ALL
            .into_iter()
            .all(|field| self.get(field).is_none())
    }

    fn slot(&self, field: TelemetryField) -> &Option<f64> {
        match field {
            TelemetryField::Pitch => &self.pitch,
            TelemetryField::Roll => &self.roll,
            TelemetryField::Yaw => &self.yaw,
            TelemetryField::Vgx => &self.vgx,
            TelemetryField::Vgy => &self.vgy,
            TelemetryField::Vgz => &self.vgz,
            TelemetryField::Tof => &self.tof,
            TelemetryField::Height => &self.h,
            TelemetryField::Bat => &self.bat,
            TelemetryField::Baro => &self.baro,
            TelemetryField::Time => &self.time,
            TelemetryField::Agx => &self.agx,
            TelemetryField::Agy => &self.agy,
            TelemetryField::Agz => &self.agz,
        }
    }

    fn slot_mut(&mut self, field: TelemetryField) -> &mut Option<f64> {
        match field {
            TelemetryField::Pitch => &mut self.pitch,
            TelemetryField::Roll => &mut self.roll,
            TelemetryField::Yaw => &mut self.yaw,
            TelemetryField::Vgx => &mut self.vgx,
            TelemetryField::Vgy => &mut self.vgy,
            TelemetryField::Vgz => &mut self.vgz,
            TelemetryField::Tof => &mut self.tof,
            TelemetryField::Height => &mut self.h,
            TelemetryField::Bat => &mut self.bat,
            TelemetryField::Baro => &mut self.baro,
            TelemetryField::Time => &mut self.time,
            TelemetryField::Agx => &mut self.agx,
            TelemetryField::Agy => &mut self.agy,
            TelemetryField::Agz => &mut self.agz,
        }
    }
}
