//! Routing configuration for the route planner.

use serde::Deserialize;

use crate::error::ConfigError;

/// Meters in a kilometer, for converting km/h to m/min.
const METERS_PER_KM: f64 = 1000.0;

const MINUTES_PER_HOUR: f64 = 60.0;

/// Upper bound accepted for both settings.
const MAX_SETTING: f64 = 1000.0;

/// Configuration parameters for route planning.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RoutingSettings {
    /// Time spent waiting at a stop before boarding any bus (minutes).
    pub bus_wait_time: f64,

    /// Bus speed (km/h).
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Create a new configuration with the given parameters.
    pub fn new(bus_wait_time: f64, bus_velocity: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity,
        }
    }

    /// Check both settings are within range.
    ///
    /// The wait time must lie in `[0, 1000]` and the velocity in
    /// `(0, 1000]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=MAX_SETTING).contains(&self.bus_wait_time) {
            return Err(ConfigError::InvalidRouting(format!(
                "bus_wait_time must be between 0 and {MAX_SETTING}, got {}",
                self.bus_wait_time
            )));
        }
        if !(self.bus_velocity > 0.0 && self.bus_velocity <= MAX_SETTING) {
            return Err(ConfigError::InvalidRouting(format!(
                "bus_velocity must be above 0 and at most {MAX_SETTING}, got {}",
                self.bus_velocity
            )));
        }
        Ok(())
    }

    /// Bus speed in meters per minute.
    pub fn meters_per_minute(&self) -> f64 {
        self.bus_velocity * METERS_PER_KM / MINUTES_PER_HOUR
    }

    /// Minutes needed to ride `meters` at the configured speed.
    pub fn travel_minutes(&self, meters: f64) -> f64 {
        meters / self.meters_per_minute()
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            bus_wait_time: 6.0,
            bus_velocity: 40.0,
        }
    }
}
