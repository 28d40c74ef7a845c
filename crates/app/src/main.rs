//! Reference cruise control run
//!
//! Tracks 25 m/s in first gear on a flat road for 200 steps with noisy
//! throttle, then reports the first step at which the target was reached.

use control::{CruiseConfig, CruiseControl};
use log::{info, warn};
use mechanics::{UniformThrottleNoise, VehicleParameters};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let config = CruiseConfig::default();
    let target = config.reference;
    let mut sim = CruiseControl::new(
        config,
        VehicleParameters::default(),
        UniformThrottleNoise::from_entropy(),
    )?;
    let trajectory = sim.run()?;

    match trajectory.first_reaching(target) {
        Some(r) => info!(
            "Reached {target} m/s at step {}: throttle={:.4} v={:.4} a={:.4} error={:.4}",
            r.step, r.throttle, r.velocity, r.acceleration, r.error
        ),
        None => warn!(
            "Target {target} m/s not reached within {} steps",
            trajectory.len()
        ),
    }

    Ok(())
}
