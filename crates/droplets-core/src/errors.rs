use thiserror::Error;

/// Errors raised by formulae, spectra and sampling strategies.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("Unknown {kind} formula '{name}'. Available: {available}")]
    UnknownFormula {
        kind: &'static str,
        name: String,
        available: String,
    },
    #[error("Invalid parameter {name}={value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error("Number of super-droplets must be positive, got {0}")]
    InvalidSampleCount(usize),
    #[error("Invalid size range ({0}, {1}); expected 0 < lower < upper")]
    InvalidSizeRange(f64, f64),
    #[error("Spectral sampling failed: {0}")]
    SamplingFailed(String),
}

/// Convenience type for `Result<T, PhysicsError>`.
pub type PhysicsResult<T> = Result<T, PhysicsError>;
