//! Construction-time errors
//!
//! The tick itself never fails; everything that can go wrong is caught when a
//! [`SimConfig`](crate::config::SimConfig) is validated or loaded.

/// Errors raised while loading or validating a simulation configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("phase duration '{name}' must be at least one frame")]
    ZeroDuration { name: &'static str },

    #[error("'{name}' must be a finite value greater than zero (got {value})")]
    NonPositive { name: &'static str, value: f32 },

    #[error("coefficient '{name}' must lie in [0, 1] (got {value})")]
    CoefficientOutOfRange { name: &'static str, value: f32 },

    #[error("ground line {ground_line} lies outside the arena height {height}")]
    GroundOutsideArena { ground_line: f32, height: f32 },

    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read configuration '{0}': {1}")]
    Io(std::path::PathBuf, std::io::Error),
}
