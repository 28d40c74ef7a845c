use thiserror::Error;

/// Errors raised when a simulation input breaks the model's contract.
#[derive(Debug, Error)]
pub enum SimError {
    /// Gear index outside the ratio table (gears are 1-based)
    #[error("gear {gear} is out of range, expected 1..={available}")]
    InvalidGear { gear: i32, available: usize },

    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("failed to parse configuration overrides: {0}")]
    Config(#[from] serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;
