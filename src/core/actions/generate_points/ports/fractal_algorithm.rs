use crate::core::data::lattice::LatticePoint;
use crate::core::data::orbit::Orbit;

pub trait FractalAlgorithm {
    fn dimension(&self) -> u32;

    fn compute(&self, point: LatticePoint) -> Orbit;
}
