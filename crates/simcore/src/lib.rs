//! Shared state, traits and integration for the cruise control simulation.

pub mod error;
pub mod integrators;
pub mod traits;
pub mod trajectory;

pub use error::{SimError, SimResult};
pub use integrators::{ForwardEuler, Integrator};
pub use traits::*;
pub use trajectory::{Trajectory, TrajectoryRecord, TrajectorySeries};
