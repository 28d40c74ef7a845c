//! Engine torque curve

use crate::params::MotorParameters;

/// Available engine torque at angular speed `omega` (rad/s).
///
/// Quadratic rolloff around the peak speed, floored at zero. There is no
/// upper clamp; the curve tops out at `Tm` when `omega == omega_m`.
pub fn motor_torque(omega: f64, params: &MotorParameters) -> f64 {
    let offset = omega / params.peak_speed - 1.0;
    let torque = params.torque_constant * (1.0 - params.rolloff * offset.powi(2));
    torque.max(0.0)
}

impl MotorParameters {
    pub fn torque_at(&self, omega: f64) -> f64 {
        motor_torque(omega, self)
    }

    /// Angular speeds where the curve reaches zero torque, `(low, high)`.
    ///
    /// Returns `None` when the rolloff never brings torque to zero.
    pub fn zero_torque_speeds(&self) -> Option<(f64, f64)> {
        if self.rolloff <= 0.0 {
            return None;
        }
        let half_width = self.peak_speed / self.rolloff.sqrt();
        Some((self.peak_speed - half_width, self.peak_speed + half_width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_peak_torque_at_peak_speed() {
        let params = MotorParameters::default();
        assert_eq!(motor_torque(params.peak_speed, &params), params.torque_constant);
    }

    #[test]
    fn test_torque_at_standstill() {
        let params = MotorParameters::default();
        // 190 * (1 - 0.4)
        assert_relative_eq!(motor_torque(0.0, &params), 114.0, epsilon = 1e-9);
    }

    #[test]
    fn test_torque_never_negative() {
        let params = MotorParameters::default();
        let mut omega = -5000.0;
        while omega <= 5000.0 {
            let torque = motor_torque(omega, &params);
            assert!(torque >= 0.0, "negative torque {torque} at omega {omega}");
            assert!(torque <= params.torque_constant);
            omega += 7.5;
        }
    }

    #[test]
    fn test_torque_clamped_far_from_peak() {
        let params = MotorParameters::default();
        assert_eq!(motor_torque(10_000.0, &params), 0.0);
        assert_eq!(motor_torque(-10_000.0, &params), 0.0);
    }

    #[test]
    fn test_torque_falls_off_on_both_sides() {
        let params = MotorParameters::default();
        let peak = params.torque_at(params.peak_speed);
        assert!(params.torque_at(params.peak_speed * 0.5) < peak);
        assert!(params.torque_at(params.peak_speed * 1.5) < peak);
        assert!(params.torque_at(params.peak_speed * 2.0) < params.torque_at(params.peak_speed * 1.5));
    }

    #[test]
    fn test_zero_torque_speeds_bracket_the_curve() {
        let params = MotorParameters::default();
        let (low, high) = params.zero_torque_speeds().unwrap();
        assert_relative_eq!(params.torque_at(high), 0.0, epsilon = 1e-9);
        assert_relative_eq!(params.torque_at(low), 0.0, epsilon = 1e-9);
        assert!(params.torque_at(high - 1.0) > 0.0);
        assert_eq!(params.torque_at(high + 1.0), 0.0);

        let flat = MotorParameters::new(100.0, 300.0, 0.0);
        assert!(flat.zero_torque_speeds().is_none());
        assert_eq!(flat.torque_at(5000.0), 100.0);
    }
}
