//! Control systems for the cruise control simulation
//!
//! This crate provides:
//! - A discrete PID controller with optional anti-windup and output saturation
//! - The closed-loop cruise control driver that produces a trajectory

pub mod cruise;
pub mod pid;

pub use cruise::*;
pub use pid::*;
