//! PID (Proportional-Integral-Derivative) Controller
//!
//! A discrete, per-step controller: the integral is the running sum of errors
//! and the derivative is the difference from the previous step's error.

use serde::{Deserialize, Serialize};
use simcore::{ControlModel, Model};

/// Configuration for a PID controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PidConfig {
    /// Proportional gain
    pub kp: f64,
    /// Integral gain
    pub ki: f64,
    /// Derivative gain
    pub kd: f64,
    /// Maximum integral accumulator magnitude (anti-windup)
    pub i_max: f64,
    /// Minimum output value
    pub output_min: f64,
    /// Maximum output value
    pub output_max: f64,
}

impl Default for PidConfig {
    fn default() -> Self {
        Self {
            kp: 0.0,
            ki: 0.0,
            kd: 0.0,
            i_max: f64::MAX,
            output_min: f64::NEG_INFINITY,
            output_max: f64::INFINITY,
        }
    }
}

impl PidConfig {
    /// Create a P-only controller
    pub fn p(kp: f64) -> Self {
        Self { kp, ..Default::default() }
    }

    /// Create a PI controller
    pub fn pi(kp: f64, ki: f64) -> Self {
        Self { kp, ki, ..Default::default() }
    }

    /// Create a PID controller
    pub fn pid(kp: f64, ki: f64, kd: f64) -> Self {
        Self { kp, ki, kd, ..Default::default() }
    }

    /// Set output limits
    pub fn with_limits(mut self, min: f64, max: f64) -> Self {
        self.output_min = min;
        self.output_max = max;
        self
    }

    /// Set integral anti-windup limit
    pub fn with_i_max(mut self, i_max: f64) -> Self {
        self.i_max = i_max;
        self
    }
}

/// PID controller with state
#[derive(Debug, Clone)]
pub struct PidController {
    config: PidConfig,
    integral: f64,
    prev_error: f64,
}

impl PidController {
    /// Create a new controller with the given configuration
    pub fn new(config: PidConfig) -> Self {
        Self {
            config,
            integral: 0.0,
            prev_error: 0.0,
        }
    }

    /// Compute the output for `error`, then fold `error` into the accumulators.
    ///
    /// The integral term uses the sum of errors from earlier steps only, and
    /// the derivative is taken against the previous step's error (zero on the
    /// first call).
    pub fn update(&mut self, error: f64) -> f64 {
        let p_term = self.config.kp * error;
        let i_term = self.config.ki * self.integral;
        let d_term = self.config.kd * (error - self.prev_error);

        self.integral = (self.integral + error).clamp(-self.config.i_max, self.config.i_max);
        self.prev_error = error;

        let output = p_term + i_term + d_term;
        output.clamp(self.config.output_min, self.config.output_max)
    }

    /// Get the current integral accumulator value
    pub fn integral(&self) -> f64 {
        self.integral
    }

    pub fn prev_error(&self) -> f64 {
        self.prev_error
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &PidConfig {
        &self.config
    }
}

impl Model for PidController {
    fn reset(&mut self) {
        self.integral = 0.0;
        self.prev_error = 0.0;
    }
}

impl ControlModel for PidController {
    fn step_control(&mut self, error: f64) -> f64 {
        self.update(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_p_only_proportional_output() {
        let mut ctrl = PidController::new(PidConfig::p(2.0));

        // error=6, P output should be 12
        let output = ctrl.update(6.0);
        assert_relative_eq!(output, 12.0);
    }

    #[test]
    fn test_first_step_derivative_against_zero() {
        let mut ctrl = PidController::new(PidConfig::pid(0.6, 0.1, 0.1));

        // 0.6*25 + 0.1*0 + 0.1*(25 - 0)
        let output = ctrl.update(25.0);
        assert_relative_eq!(output, 17.5, epsilon = 1e-12);
    }

    #[test]
    fn test_integral_lags_one_step() {
        let mut ctrl = PidController::new(PidConfig::pi(0.0, 1.0));

        assert_eq!(ctrl.update(3.0), 0.0);
        assert_relative_eq!(ctrl.update(2.0), 3.0);
        assert_relative_eq!(ctrl.update(-1.0), 5.0);
        assert_relative_eq!(ctrl.integral(), 4.0);
    }

    #[test]
    fn test_previous_error_is_tracked() {
        let mut ctrl = PidController::new(PidConfig::pid(0.0, 0.0, 1.0));

        ctrl.update(10.0);
        assert_eq!(ctrl.prev_error(), 10.0);
        // derivative = 7 - 10
        assert_relative_eq!(ctrl.update(7.0), -3.0);
        // unchanged error gives no derivative action
        assert_eq!(ctrl.update(7.0), 0.0);
    }

    #[test]
    fn test_anti_windup() {
        let mut ctrl = PidController::new(PidConfig::pi(1.0, 10.0).with_i_max(5.0));

        for _ in 0..100 {
            ctrl.update(100.0);
        }

        assert!(ctrl.integral().abs() <= 5.0);
    }

    #[test]
    fn test_output_saturation() {
        let mut ctrl = PidController::new(PidConfig::p(100.0).with_limits(0.0, 1.0));

        assert_eq!(ctrl.update(10.0), 1.0);
        assert_eq!(ctrl.update(-10.0), 0.0);
    }

    #[test]
    fn test_reset_clears_state() {
        let mut ctrl = PidController::new(PidConfig::pid(1.0, 1.0, 1.0));

        for _ in 0..10 {
            ctrl.step_control(4.0);
        }
        assert!(ctrl.integral() > 0.0);

        ctrl.reset();
        assert_eq!(ctrl.integral(), 0.0);
        assert_eq!(ctrl.prev_error(), 0.0);
    }

    #[test]
    fn test_config_overrides_default_missing_gains() {
        let config: PidConfig = serde_json::from_str(r#"{"kp": 0.6, "kd": 0.1}"#).unwrap();
        assert_eq!(config.kp, 0.6);
        assert_eq!(config.ki, 0.0);
        assert_eq!(config.kd, 0.1);
        assert_eq!(config.output_max, f64::INFINITY);
    }
}
