use crate::core::actions::generate_points::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::coord3::Coord3;
use crate::core::data::lattice::{Lattice, LatticePoint};
use crate::core::data::orbit::Orbit;
use crate::core::fractals::mandelbulb::params::GenerationParams;

pub const ESCAPE_RADIUS: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct MandelbulbAlgorithm {
    lattice: Lattice,
    power: f64,
    max_iterations: u32,
}

impl MandelbulbAlgorithm {
    #[must_use]
    pub fn new(params: &GenerationParams) -> Self {
        Self {
            lattice: Lattice::new(params.dimension()),
            power: params.power(),
            max_iterations: params.max_iterations(),
        }
    }

    /// Iterates `zeta -> zeta^power + c` from the origin.
    ///
    /// The radius tested against [`ESCAPE_RADIUS`] is the one of the state *before*
    /// the step, and the step is applied regardless. A bounded orbit therefore
    /// returns the state after `max_iterations + 1` steps, whose own radius may
    /// exceed the escape radius.
    #[must_use]
    pub fn orbit(&self, c: Coord3) -> Orbit {
        let mut zeta = Coord3::ORIGIN;
        let mut iteration: u64 = 0;

        loop {
            let spherical = zeta.to_spherical();
            zeta = spherical.triplex_power(self.power) + c;
            iteration += 1;

            if spherical.r > ESCAPE_RADIUS {
                return Orbit::Escaped {
                    iterations: iteration,
                };
            }

            if iteration > u64::from(self.max_iterations) {
                return Orbit::Bounded {
                    point: zeta,
                    last_radius: spherical.r,
                };
            }
        }
    }
}

impl FractalAlgorithm for MandelbulbAlgorithm {
    fn dimension(&self) -> u32 {
        self.lattice.dimension()
    }

    fn compute(&self, point: LatticePoint) -> Orbit {
        self.orbit(self.lattice.coord(point))
    }
}
