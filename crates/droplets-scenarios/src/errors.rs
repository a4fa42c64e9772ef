use droplets_core::errors::PhysicsError;
use droplets_core::FloatValue;
use thiserror::Error;

/// Error type for scenario construction.
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error(transparent)]
    Physics(#[from] PhysicsError),
    #[error("Invalid scenario configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error("t_max={t_max} s is not an integer multiple of dt={dt} s")]
    InexactStepCount { t_max: FloatValue, dt: FloatValue },
    #[error("{span} s holds too many time steps of dt={dt} s to count")]
    TooManySteps { span: FloatValue, dt: FloatValue },
}

/// Convenience type for `Result<T, ScenarioError>`.
pub type ScenarioResult<T> = Result<T, ScenarioError>;
