use serde::{Deserialize, Serialize};

use crate::SimResult;

// Vehicle state
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Longitudinal velocity (m/s), may be negative
    pub velocity: f64,
}

impl VehicleState {
    pub fn new(velocity: f64) -> Self {
        VehicleState { velocity }
    }
}

// Control traits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlInput {
    /// Raw throttle command before actuator noise, nominally 0..1
    pub throttle: f64,
    /// Selected gear, 1-based
    pub gear: i32,
    /// Road slope in radians, positive uphill
    pub slope: f64,
}

impl ControlInput {
    pub fn new(throttle: f64, gear: i32, slope: f64) -> Self {
        ControlInput {
            throttle,
            gear,
            slope,
        }
    }
}

/// Output of a one-step dynamics evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Longitudinal acceleration (m/s²)
    pub acceleration: f64,
    /// Throttle actually applied after noise and clamping
    pub throttle: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct SimContext {
    pub dt: f64,
    pub t: f64,
}

pub trait Model {
    fn reset(&mut self);
}

/// Computes the state derivative without committing it.
///
/// Implementations must leave `state` untouched so the same call can serve as
/// a lookahead predictor. Committing the result is the integrator's job.
pub trait DynamicsModel {
    fn predict(&mut self, state: &VehicleState, input: &ControlInput) -> SimResult<Prediction>;
}

pub trait ControlModel: Model {
    /// Produce the next command from the current tracking error.
    fn step_control(&mut self, error: f64) -> f64;
}
