//! Motion-channel decoding: acceleration, angular velocity, attitude, and
//! magnetometer.
//!
//! The three measurement axes arrive as signed 16-bit counts scaled to the
//! sensor's full range; the fourth word is the shared temperature in
//! centidegrees Celsius.

use serde::Serialize;

/// Full-scale count for the signed 16-bit axis words (2^15).
const FULL_SCALE: f64 = 32768.0;

/// Accelerometer full range, ±g.
pub const ACCEL_RANGE_G: f64 = 16.0;

/// Gyro full range, ±deg/s.
pub const GYRO_RANGE_DPS: f64 = 2000.0;

/// Attitude full range, ±degrees.
pub const ANGLE_RANGE_DEG: f64 = 180.0;

/// Decode the shared temperature word (centidegrees) to degrees Celsius.
pub fn temperature_celsius(raw: i16) -> f64 {
    f64::from(raw) / 100.0
}

/// Three-axis acceleration in g.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Acceleration {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Acceleration {
    /// Scale raw axis counts to g.
    pub fn from_counts(x: i16, y: i16, z: i16) -> Self {
        Self {
            x: f64::from(x) / FULL_SCALE * ACCEL_RANGE_G,
            y: f64::from(y) / FULL_SCALE * ACCEL_RANGE_G,
            z: f64::from(z) / FULL_SCALE * ACCEL_RANGE_G,
        }
    }
}

/// Three-axis angular velocity in degrees per second.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AngularVelocity {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl AngularVelocity {
    /// Scale raw axis counts to degrees per second.
    pub fn from_counts(x: i16, y: i16, z: i16) -> Self {
        Self {
            x: f64::from(x) / FULL_SCALE * GYRO_RANGE_DPS,
            y: f64::from(y) / FULL_SCALE * GYRO_RANGE_DPS,
            z: f64::from(z) / FULL_SCALE * GYRO_RANGE_DPS,
        }
    }
}

/// Roll/pitch/yaw attitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Orientation {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl Orientation {
    /// Scale raw axis counts to degrees.
    pub fn from_counts(roll: i16, pitch: i16, yaw: i16) -> Self {
        Self {
            roll: f64::from(roll) / FULL_SCALE * ANGLE_RANGE_DEG,
            pitch: f64::from(pitch) / FULL_SCALE * ANGLE_RANGE_DEG,
            yaw: f64::from(yaw) / FULL_SCALE * ANGLE_RANGE_DEG,
        }
    }
}

/// Raw magnetometer counts.
///
/// The wire format documents no scale factor for this channel; counts are
/// passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MagneticField {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}
