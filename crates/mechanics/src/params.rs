//! Vehicle and engine parameters
//!
//! Both structs deserialize from a flat options object whose keys are the
//! conventional symbols (`m`, `g`, `Cr`, `Cd`, `rho`, `A`, `alpha`, `Tm`,
//! `omega_m`, `beta`). Any key left out keeps its default, so `{}` yields
//! the stock vehicle.

use serde::{Deserialize, Serialize};
use simcore::{SimError, SimResult};

/// Engine torque curve parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotorParameters {
    /// Peak engine torque (N·m)
    #[serde(rename = "Tm")]
    pub torque_constant: f64,
    /// Engine angular speed at peak torque (rad/s)
    #[serde(rename = "omega_m")]
    pub peak_speed: f64,
    /// Quadratic rolloff away from the peak
    #[serde(rename = "beta")]
    pub rolloff: f64,
}

impl Default for MotorParameters {
    fn default() -> Self {
        MotorParameters {
            torque_constant: 190.0,
            peak_speed: 420.0,
            rolloff: 0.4,
        }
    }
}

impl MotorParameters {
    pub fn new(torque_constant: f64, peak_speed: f64, rolloff: f64) -> Self {
        MotorParameters {
            torque_constant,
            peak_speed,
            rolloff,
        }
    }
}

/// Longitudinal vehicle parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleParameters {
    /// Vehicle mass (kg)
    #[serde(rename = "m")]
    pub mass: f64,
    /// Gravitational acceleration (m/s²)
    #[serde(rename = "g")]
    pub gravity: f64,
    /// Coefficient of rolling friction
    #[serde(rename = "Cr")]
    pub rolling_friction: f64,
    /// Aerodynamic drag coefficient
    #[serde(rename = "Cd")]
    pub drag_coefficient: f64,
    /// Air density (kg/m³)
    #[serde(rename = "rho")]
    pub air_density: f64,
    /// Frontal area (m²)
    #[serde(rename = "A")]
    pub frontal_area: f64,
    /// Gear ratio divided by wheel radius, index 0 is first gear
    #[serde(rename = "alpha")]
    pub gear_ratios: Vec<f64>,
    #[serde(flatten)]
    pub motor: MotorParameters,
}

impl Default for VehicleParameters {
    fn default() -> Self {
        VehicleParameters {
            mass: 1600.0,
            gravity: 9.8,
            rolling_friction: 0.01,
            drag_coefficient: 0.32,
            air_density: 1.3,
            frontal_area: 2.4,
            gear_ratios: vec![40.0, 25.0, 16.0, 12.0, 10.0],
            motor: MotorParameters::default(),
        }
    }
}

impl VehicleParameters {
    /// Build parameters from a JSON options object, defaulting absent keys.
    pub fn from_json(overrides: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(overrides)?)
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_gear_ratios(mut self, gear_ratios: Vec<f64>) -> Self {
        self.gear_ratios = gear_ratios;
        self
    }

    pub fn with_motor(mut self, motor: MotorParameters) -> Self {
        self.motor = motor;
        self
    }

    pub fn num_gears(&self) -> usize {
        self.gear_ratios.len()
    }

    /// Ratio for a 1-based gear index.
    pub fn gear_ratio(&self, gear: i32) -> SimResult<f64> {
        let invalid = SimError::InvalidGear {
            gear,
            available: self.gear_ratios.len(),
        };
        if gear < 1 {
            return Err(invalid);
        }
        self.gear_ratios
            .get(gear as usize - 1)
            .copied()
            .ok_or(invalid)
    }

    /// Reject parameter sets that make the force balance degenerate.
    ///
    /// The dynamics function itself does not call this; a zero mass passed
    /// straight to it produces a non-finite acceleration.
    pub fn validate(&self) -> SimResult<()> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(SimError::InvalidParameter {
                name: "m",
                value: self.mass,
                reason: "mass must be positive",
            });
        }
        if self.gear_ratios.is_empty() {
            return Err(SimError::InvalidParameter {
                name: "alpha",
                value: 0.0,
                reason: "at least one gear ratio is required",
            });
        }
        Ok(())
    }
}
