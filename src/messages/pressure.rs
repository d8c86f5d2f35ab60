//! Barometric pressure and altitude message.

use serde::Serialize;

/// Barometric pressure and derived altitude.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Barometric {
    /// Pressure in the device's raw units (Pa)
    pub pressure: i32,
    /// Altitude in meters (wire word is centimeters)
    pub altitude: f64,
}

impl Barometric {
    /// Decode from the two little-endian 32-bit payload words.
    pub fn from_longs(pressure: i32, altitude_cm: i32) -> Self {
        Self {
            pressure,
            altitude: f64::from(altitude_cm) / 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_longs() {
        let baro = Barometric::from_longs(101325, -250);
        assert_eq!(baro.pressure, 101325);
        assert_relative_eq!(baro.altitude, -2.5);
    }
}
