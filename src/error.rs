//! Error types for the ROM

use thiserror::Error;

/// Main error type for ROM operations
#[derive(Error, Debug)]
pub enum RomError {
    #[error("Shape factor K_W must be positive, got {0}")]
    InvalidShapeFactor(f64),

    #[error("Clamp correction factor must be positive, got {0}")]
    InvalidCorrectionFactor(f64),

    #[error(
        "No smoothing field exists: |Pr_target| must be < Pm (Pr_target = {pr_target}, Pm = {pm})"
    )]
    NoSmoothingSolution { pm: f64, pr_target: f64 },

    #[error("Invalid field sweep: {0}")]
    InvalidSweep(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for ROM operations
pub type RomResult<T> = Result<T, RomError>;
