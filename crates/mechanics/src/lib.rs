pub mod engine;
pub mod noise;
pub mod params;
pub mod resistance;
pub mod vehicle;

pub use engine::motor_torque;
pub use noise::{FixedNoise, NoNoise, ThrottleNoise, UniformThrottleNoise, THROTTLE_NOISE_MAX};
pub use params::{MotorParameters, VehicleParameters};
pub use resistance::{ResistiveForces, resistive_forces};
pub use vehicle::{Vehicle, vehicle_update};
