//! GPS-derived messages: position fix and motion solution.

use serde::Serialize;

/// Raw GPS fix.
///
/// The wire format gives no scale factor for these words; they are
/// device-defined fixed-point and pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GpsPosition {
    pub longitude: i32,
    pub latitude: i32,
}

/// GPS height, heading, and ground speed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GpsMotion {
    /// Height above the geoid, meters
    pub height: f64,
    /// Course over ground, degrees
    pub heading: f64,
    /// Ground speed in device units (wire word is thousandths)
    pub ground_speed: f64,
}

impl GpsMotion {
    /// Scale the raw 16-bit words: height in decimeters, heading in
    /// decidegrees, speed in thousandths.
    pub fn from_counts(height: i16, heading: i16, speed: i16) -> Self {
        Self {
            height: f64::from(height) / 10.0,
            heading: f64::from(heading) / 10.0,
            ground_speed: f64::from(speed) / 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gps_motion_scaling() {
        let motion = GpsMotion::from_counts(1500, 900, 1200);
        assert_relative_eq!(motion.height, 150.0);
        assert_relative_eq!(motion.heading, 90.0);
        assert_relative_eq!(motion.ground_speed, 1.2);
    }

    #[test]
    fn test_gps_motion_negative_height() {
        let motion = GpsMotion::from_counts(-42, 3599, 0);
        assert_relative_eq!(motion.height, -4.2);
        assert_relative_eq!(motion.heading, 359.9);
        assert_relative_eq!(motion.ground_speed, 0.0);
    }
}
