//! Longitudinal vehicle dynamics
//!
//! Force balance along the direction of travel:
//! - Engine force through the selected gear, scaled by throttle
//! - Gravity along the slope, rolling friction and aerodynamic drag opposing it
//!
//! Evaluating the model never advances the vehicle state; integrate the
//! returned acceleration separately to commit a step.

use log::trace;
use simcore::{ControlInput, DynamicsModel, Prediction, SimResult, VehicleState};

use crate::engine::motor_torque;
use crate::noise::{ThrottleNoise, UniformThrottleNoise};
use crate::params::VehicleParameters;
use crate::resistance::{ResistiveForces, resistive_forces};

/// Acceleration and applied throttle for `velocity` under `input`.
///
/// Draws exactly one sample from `noise`. Fails only on a gear outside the
/// ratio table; a zero mass is not checked here and yields a non-finite
/// acceleration.
pub fn vehicle_update<N: ThrottleNoise + ?Sized>(
    velocity: f64,
    input: &ControlInput,
    params: &VehicleParameters,
    noise: &mut N,
) -> SimResult<Prediction> {
    let ratio = params.gear_ratio(input.gear)?;

    let throttle = (input.throttle + noise.sample()).clamp(0.0, 1.0);

    let omega = ratio * velocity;
    let engine_force = ratio * motor_torque(omega, &params.motor) * throttle;
    let resistance = resistive_forces(velocity, input.slope, params);

    let acceleration = (engine_force - resistance.total()) / params.mass;
    trace!(
        "v={velocity:.4} gear={} throttle={throttle:.4} F={engine_force:.2} Fd={:.2} a={acceleration:.4}",
        input.gear,
        resistance.total()
    );

    Ok(Prediction {
        acceleration,
        throttle,
    })
}

/// A vehicle with its own throttle noise source.
#[derive(Debug, Clone)]
pub struct Vehicle<N = UniformThrottleNoise> {
    params: VehicleParameters,
    noise: N,
}

impl Vehicle<UniformThrottleNoise> {
    /// Vehicle with entropy-seeded uniform throttle noise
    pub fn with_default_noise(params: VehicleParameters) -> Self {
        Vehicle::new(params, UniformThrottleNoise::from_entropy())
    }
}

impl<N: ThrottleNoise> Vehicle<N> {
    pub fn new(params: VehicleParameters, noise: N) -> Self {
        Vehicle { params, noise }
    }

    pub fn params(&self) -> &VehicleParameters {
        &self.params
    }

    pub fn resistive_forces(&self, velocity: f64, slope: f64) -> ResistiveForces {
        resistive_forces(velocity, slope, &self.params)
    }

    /// Engine speed (rad/s) at `velocity` in `gear`
    pub fn engine_speed(&self, velocity: f64, gear: i32) -> SimResult<f64> {
        Ok(self.params.gear_ratio(gear)? * velocity)
    }
}

impl<N: ThrottleNoise> DynamicsModel for Vehicle<N> {
    fn predict(&mut self, state: &VehicleState, input: &ControlInput) -> SimResult<Prediction> {
        vehicle_update(state.velocity, input, &self.params, &mut self.noise)
    }
}
