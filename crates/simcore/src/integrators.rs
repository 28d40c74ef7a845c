use crate::{SimContext, VehicleState};

/// A generic integration strategy trait.
pub trait Integrator {
    /// Commits an acceleration to the state over `ctx.dt`.
    fn step(&self, ctx: &SimContext, state: &mut VehicleState, acceleration: f64);
}

/// Explicit (forward) Euler integrator.
/// Uses the acceleration evaluated at the start of the interval.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step(&self, ctx: &SimContext, state: &mut VehicleState, acceleration: f64) {
        state.velocity += acceleration * ctx.dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_forward_euler() {
        let integrator = ForwardEuler;
        let mut state = VehicleState::new(2.0);
        let ctx = SimContext { dt: 0.5, t: 0.0 };

        integrator.step(&ctx, &mut state, 3.0);

        assert_relative_eq!(state.velocity, 3.5);
    }

    #[test]
    fn test_zero_elapsed_time_keeps_velocity() {
        let mut state = VehicleState::new(4.2);
        let ctx = SimContext { dt: 0.0, t: 0.0 };

        ForwardEuler.step(&ctx, &mut state, 100.0);

        assert_eq!(state.velocity, 4.2);
    }

    #[test]
    fn test_negative_acceleration_reverses() {
        let mut state = VehicleState::default();
        let ctx = SimContext { dt: 1.0, t: 1.0 };

        ForwardEuler.step(&ctx, &mut state, -0.25);

        assert_relative_eq!(state.velocity, -0.25);
    }
}
