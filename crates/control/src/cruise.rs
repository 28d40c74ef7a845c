//! Cruise control loop
//!
//! Drives a dynamics model with a PID controller at a fixed gear and slope.
//! Each step computes the tracking error, asks the controller for a throttle
//! command, evaluates the model, commits the acceleration with forward Euler
//! and appends a record to the trajectory.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use mechanics::{ThrottleNoise, Vehicle, VehicleParameters};
use simcore::{
    ControlInput, ControlModel, DynamicsModel, ForwardEuler, Integrator, Model, SimContext,
    SimError, SimResult, Trajectory, TrajectoryRecord, VehicleState,
};

use crate::pid::{PidConfig, PidController};

/// Settings for one cruise control run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CruiseConfig {
    /// Target speed (m/s)
    pub reference: f64,
    pub controller: PidConfig,
    /// Fixed gear for the whole run, 1-based
    pub gear: i32,
    /// Road slope (rad)
    pub slope: f64,
    /// Number of steps to simulate
    pub steps: usize,
    /// Time between consecutive steps
    pub dt: f64,
}

impl Default for CruiseConfig {
    fn default() -> Self {
        CruiseConfig {
            reference: 25.0,
            controller: PidConfig::pid(0.6, 0.1, 0.1),
            gear: 1,
            slope: 0.0,
            steps: 200,
            dt: 1.0,
        }
    }
}

impl CruiseConfig {
    pub fn from_json(overrides: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(overrides)?)
    }

    pub fn with_reference(mut self, reference: f64) -> Self {
        self.reference = reference;
        self
    }

    pub fn with_controller(mut self, controller: PidConfig) -> Self {
        self.controller = controller;
        self
    }

    pub fn with_gear(mut self, gear: i32) -> Self {
        self.gear = gear;
        self
    }

    pub fn with_slope(mut self, slope: f64) -> Self {
        self.slope = slope;
        self
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Check the run settings against the vehicle they will drive.
    pub fn validate(&self, params: &VehicleParameters) -> SimResult<()> {
        params.validate()?;
        params.gear_ratio(self.gear)?;
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimError::InvalidParameter {
                name: "dt",
                value: self.dt,
                reason: "step spacing must be positive",
            });
        }
        if !self.reference.is_finite() {
            return Err(SimError::InvalidParameter {
                name: "reference",
                value: self.reference,
                reason: "target speed must be finite",
            });
        }
        Ok(())
    }
}

/// Closed-loop speed controller around a dynamics model.
#[derive(Debug, Clone)]
pub struct CruiseControl<D> {
    config: CruiseConfig,
    vehicle: D,
    controller: PidController,
    integrator: ForwardEuler,
}

impl<N: ThrottleNoise> CruiseControl<Vehicle<N>> {
    /// Validate the settings and build the loop around a [`Vehicle`].
    pub fn new(config: CruiseConfig, params: VehicleParameters, noise: N) -> SimResult<Self> {
        if let Err(err) = config.validate(&params) {
            warn!("Rejected cruise configuration: {err}");
            return Err(err);
        }
        Ok(Self::with_model(config, Vehicle::new(params, noise)))
    }
}

impl<D: DynamicsModel> CruiseControl<D> {
    /// Build the loop around an arbitrary dynamics model.
    ///
    /// No validation happens here; an unusable gear surfaces from [`run`](Self::run).
    pub fn with_model(config: CruiseConfig, vehicle: D) -> Self {
        let controller = PidController::new(config.controller.clone());
        CruiseControl {
            config,
            vehicle,
            controller,
            integrator: ForwardEuler,
        }
    }

    pub fn config(&self) -> &CruiseConfig {
        &self.config
    }

    pub fn vehicle(&self) -> &D {
        &self.vehicle
    }

    /// Simulate `config.steps` steps from standstill.
    ///
    /// The run never exits early. Step `i` happens at `t = i * dt`; the
    /// elapsed time for the first step is zero, so its record still shows
    /// the vehicle at rest.
    pub fn run(&mut self) -> SimResult<Trajectory> {
        let steps = self.config.steps;
        let mut trajectory = Trajectory::with_capacity(steps);
        let mut state = VehicleState::default();
        let mut last_update = 0.0;
        self.controller.reset();

        info!(
            "Cruise run: reference {} m/s, gear {}, slope {} rad, {} steps",
            self.config.reference, self.config.gear, self.config.slope, steps
        );

        for step in 0..steps {
            let t = step as f64 * self.config.dt;
            let error = self.config.reference - state.velocity;
            let command = self.controller.step_control(error);

            let input = ControlInput::new(command, self.config.gear, self.config.slope);
            let prediction = self.vehicle.predict(&state, &input)?;

            let ctx = SimContext {
                dt: t - last_update,
                t,
            };
            self.integrator.step(&ctx, &mut state, prediction.acceleration);

            debug!(
                "step {step}: error={error:.3} command={command:.3} throttle={:.3} a={:.4} v={:.3}",
                prediction.throttle, prediction.acceleration, state.velocity
            );
            trajectory.push(TrajectoryRecord {
                step,
                throttle: prediction.throttle,
                velocity: state.velocity,
                acceleration: prediction.acceleration,
                error,
            });
            last_update = t;
        }

        if let Some(last) = trajectory.last() {
            info!(
                "Cruise run finished at step {}: v={:.3} m/s, error={:.3}",
                last.step, last.velocity, last.error
            );
        }
        Ok(trajectory)
    }
}
