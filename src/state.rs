//! Latest-value snapshot of every decoded telemetry channel.

use serde::Serialize;

use crate::messages::{
    Acceleration, AngularVelocity, Barometric, DeviceClock, GpsMotion, GpsPosition, MagneticField,
    Orientation, PortLevels, TelemetryMessage,
};

/// Latest decoded value per telemetry channel.
///
/// Each accepted message overwrites its channel's field wholesale; nothing
/// is merged within a frame. The temperature is shared by the four motion
/// channels, last-write-wins. Only the latest value is retained; there is
/// no decoded history.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SensorState {
    pub acceleration: Acceleration,
    pub angular_velocity: AngularVelocity,
    pub orientation: Orientation,
    pub magnetic_field: MagneticField,
    pub port_levels: PortLevels,
    /// Sensor temperature in degrees Celsius, from whichever motion
    /// message arrived last
    pub temperature: f64,
    pub barometric: Barometric,
    pub gps_position: GpsPosition,
    pub gps_motion: GpsMotion,
    pub clock: DeviceClock,
}

impl SensorState {
    /// Apply one decoded message to the snapshot.
    pub fn apply(&mut self, message: &TelemetryMessage) {
        match message {
            TelemetryMessage::Clock(clock) => self.clock = *clock,
            TelemetryMessage::Acceleration { accel, temperature } => {
                self.acceleration = *accel;
                self.temperature = *temperature;
            }
            TelemetryMessage::AngularVelocity { rate, temperature } => {
                self.angular_velocity = *rate;
                self.temperature = *temperature;
            }
            TelemetryMessage::Orientation { angles, temperature } => {
                self.orientation = *angles;
                self.temperature = *temperature;
            }
            TelemetryMessage::MagneticField { field, temperature } => {
                self.magnetic_field = *field;
                self.temperature = *temperature;
            }
            TelemetryMessage::PortLevels(levels) => self.port_levels = *levels,
            TelemetryMessage::Barometric(baro) => self.barometric = *baro,
            TelemetryMessage::GpsPosition(fix) => self.gps_position = *fix,
            TelemetryMessage::GpsMotion(motion) => self.gps_motion = *motion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_apply_overwrites_wholesale() {
        let mut state = SensorState::default();

        state.apply(&TelemetryMessage::Acceleration {
            accel: Acceleration {
                x: 1.0,
                y: 2.0,
                z: 3.0,
            },
            temperature: 20.0,
        });
        state.apply(&TelemetryMessage::Acceleration {
            accel: Acceleration {
                x: -1.0,
                y: 0.0,
                z: 9.8,
            },
            temperature: 21.0,
        });

        assert_relative_eq!(state.acceleration.x, -1.0);
        assert_relative_eq!(state.acceleration.y, 0.0);
        assert_relative_eq!(state.acceleration.z, 9.8);
    }

    #[test]
    fn test_temperature_is_last_write_wins() {
        let mut state = SensorState::default();

        state.apply(&TelemetryMessage::Acceleration {
            accel: Acceleration::default(),
            temperature: 20.0,
        });
        state.apply(&TelemetryMessage::MagneticField {
            field: MagneticField::default(),
            temperature: 23.5,
        });

        assert_relative_eq!(state.temperature, 23.5);
    }

    #[test]
    fn test_channels_are_independent() {
        let mut state = SensorState::default();

        state.apply(&TelemetryMessage::GpsPosition(GpsPosition {
            longitude: 7,
            latitude: -7,
        }));
        state.apply(&TelemetryMessage::Barometric(Barometric {
            pressure: 101325,
            altitude: 12.0,
        }));

        assert_eq!(state.gps_position.longitude, 7);
        assert_eq!(state.barometric.pressure, 101325);
        // untouched channels keep their defaults
        assert_relative_eq!(state.acceleration.x, 0.0);
    }
}
