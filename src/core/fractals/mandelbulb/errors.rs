use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MandelbulbError {
    #[error("dimension must be greater than zero, got {0}")]
    InvalidDimension(i64),
    #[error("dimension {dimension} exceeds the maximum of {max}")]
    DimensionTooLarge { dimension: i64, max: u32 },
    #[error("power must be a positive finite number, got {0}")]
    InvalidPower(f64),
    #[error("maximum iterations must be between 1 and {}, got {value}", u32::MAX)]
    InvalidMaxIterations { value: i64 },
}
