use crate::core::data::coord3::Coord3;

/// Outcome of iterating the escape map from one lattice sample.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Orbit {
    /// The radius tested on iteration `iterations` exceeded the escape radius.
    Escaped { iterations: u64 },
    /// The iteration cap was passed without escaping. `point` is the final state
    /// and `last_radius` the radius that was tested on the final iteration.
    Bounded { point: Coord3, last_radius: f64 },
}

impl Orbit {
    #[cfg(test)]
    pub fn is_bounded(&self) -> bool {
        matches!(self, Self::Bounded { .. })
    }
}
