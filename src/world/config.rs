use crate::error::PhysicsError;
use crate::math::Vec2;
use serde::{Deserialize, Serialize};

/// Engine-wide settings, read every tick.
///
/// Missing keys in a JSON document take the default value, so a config file
/// only needs to name what it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Acceleration applied to dynamic bodies without their own override.
    pub system_acceleration: Vec2,
    /// Fraction of the penetration removed per positional correction.
    pub correction_rate: f64,
    /// Pair sweeps per process call.
    pub relaxation_count: u32,
    pub correct_position: bool,
    pub has_motion: bool,
    /// Include angular velocity and inertia in impulse resolution.
    pub rotational_response: bool,
    /// Fixed tick length in seconds.
    pub update_interval: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            system_acceleration: Vec2::new(0.0, -20.0),
            correction_rate: 0.8,
            relaxation_count: 15,
            correct_position: true,
            has_motion: true,
            rotational_response: false,
            update_interval: 1.0 / 60.0,
        }
    }
}

impl PhysicsConfig {
    pub fn from_json(text: &str) -> Result<Self, PhysicsError> {
        let config: PhysicsConfig = serde_json::from_str(text)?;
        config.validate()?;
        log::info!(
            "loaded physics config: relaxation_count={} correction_rate={} dt={}",
            config.relaxation_count,
            config.correction_rate,
            config.update_interval
        );
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, PhysicsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.update_interval > 0.0) {
            return Err(PhysicsError::InvalidConfig(format!(
                "update_interval must be positive, got {}",
                self.update_interval
            )));
        }
        if !(self.correction_rate > 0.0 && self.correction_rate <= 1.0) {
            return Err(PhysicsError::InvalidConfig(format!(
                "correction_rate must be in (0, 1], got {}",
                self.correction_rate
            )));
        }
        Ok(())
    }
}
