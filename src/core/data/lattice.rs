use crate::core::data::coord3::Coord3;

pub const LATTICE_MIN: f64 = -1.0;
pub const LATTICE_MAX: f64 = 1.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LatticePoint {
    pub i: u32,
    pub j: u32,
    pub k: u32,
}

/// Linear remap of `value` from `[in_start, in_stop]` onto `[out_start, out_stop]`,
/// clamped to the output interval.
#[must_use]
pub fn map_linear(value: f64, in_start: f64, in_stop: f64, out_start: f64, out_stop: f64) -> f64 {
    let mapped = ((value - in_start) / (in_stop - in_start)) * (out_stop - out_start) + out_start;

    if out_start < out_stop {
        mapped.clamp(out_start, out_stop)
    } else {
        mapped.clamp(out_stop, out_start)
    }
}

/// A `dimension`³ grid of sample positions spanning `[-1, 1]` on every axis.
///
/// Index `v` maps to `map_linear(v, 0, dimension, -1, 1)`, so the upper bound is
/// never reached: the last sample sits one step short of `+1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    dimension: u32,
    axis: Vec<f64>,
}

impl Lattice {
    #[must_use]
    pub fn new(dimension: u32) -> Self {
        let axis = (0..dimension)
            .map(|v| {
                map_linear(
                    f64::from(v),
                    0.0,
                    f64::from(dimension),
                    LATTICE_MIN,
                    LATTICE_MAX,
                )
            })
            .collect();

        Self { dimension, axis }
    }

    #[must_use]
    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    #[cfg(test)]
    pub fn axis(&self) -> &[f64] {
        &self.axis
    }

    /// # Panics
    ///
    /// Panics if any index of `point` is not below the lattice dimension.
    #[must_use]
    pub fn coord(&self, point: LatticePoint) -> Coord3 {
        Coord3 {
            x: self.axis[point.i as usize],
            y: self.axis[point.j as usize],
            z: self.axis[point.k as usize],
        }
    }
}
