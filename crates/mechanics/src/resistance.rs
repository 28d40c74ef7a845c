use serde::Serialize;

use crate::params::VehicleParameters;

/// Breakdown of the forces opposing forward motion (N).
///
/// Each term is signed so that a positive value decelerates a vehicle moving
/// forward on a flat road.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ResistiveForces {
    pub gravity: f64,
    pub rolling: f64,
    pub aero: f64,
}

impl ResistiveForces {
    pub fn total(&self) -> f64 {
        self.gravity + self.rolling + self.aero
    }
}

/// Sign that is exactly zero at zero (and for NaN), unlike `f64::signum`.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

pub fn resistive_forces(velocity: f64, slope: f64, params: &VehicleParameters) -> ResistiveForces {
    let weight = params.mass * params.gravity;
    ResistiveForces {
        gravity: weight * slope.sin(),
        rolling: weight * params.rolling_friction * sign(velocity),
        aero: 0.5
            * params.air_density
            * params.drag_coefficient
            * params.frontal_area
            * velocity.abs()
            * velocity,
    }
}
