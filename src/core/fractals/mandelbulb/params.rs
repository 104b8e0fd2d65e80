use crate::core::fractals::mandelbulb::errors::MandelbulbError;

/// Largest accepted lattice resolution (512³ is ~134M orbit evaluations).
pub const MAX_DIMENSION: u32 = 512;

/// Immutable, validated input for one generation request.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GenerationParams {
    dimension: u32,
    power: f64,
    max_iterations: u32,
}

impl GenerationParams {
    pub fn new(dimension: u32, power: f64, max_iterations: u32) -> Result<Self, MandelbulbError> {
        Self::from_signed(i64::from(dimension), power, i64::from(max_iterations))
    }

    /// Validates parameters as they arrive off the wire, where negative values are
    /// representable.
    pub fn from_signed(
        dimension: i64,
        power: f64,
        max_iterations: i64,
    ) -> Result<Self, MandelbulbError> {
        if dimension <= 0 {
            return Err(MandelbulbError::InvalidDimension(dimension));
        }

        if dimension > i64::from(MAX_DIMENSION) {
            return Err(MandelbulbError::DimensionTooLarge {
                dimension,
                max: MAX_DIMENSION,
            });
        }

        if !(power.is_finite() && power > 0.0) {
            return Err(MandelbulbError::InvalidPower(power));
        }

        let max_iterations = u32::try_from(max_iterations)
            .ok()
            .filter(|&value| value > 0)
            .ok_or(MandelbulbError::InvalidMaxIterations {
                value: max_iterations,
            })?;

        Ok(Self {
            dimension: dimension as u32,
            power,
            max_iterations,
        })
    }

    #[must_use]
    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    #[must_use]
    pub fn power(&self) -> f64 {
        self.power
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
