use crate::core::actions::generate_points::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::lattice::LatticePoint;
use crate::core::data::orbit::Orbit;
use crate::core::data::point_buffer::PointBuffer;

/// Walks one `(i, j)` column along `k`, emitting the first bounded sample of every
/// bounded run. An escape ends the run, so a column can emit more than once.
pub(crate) fn sweep_column<Alg>(algorithm: &Alg, i: u32, j: u32, points: &mut PointBuffer)
where
    Alg: FractalAlgorithm + ?Sized,
{
    let mut is_edge = false;

    for k in 0..algorithm.dimension() {
        match algorithm.compute(LatticePoint { i, j, k }) {
            Orbit::Escaped { .. } => {
                is_edge = false;
            }
            Orbit::Bounded { point, .. } => {
                if !is_edge {
                    is_edge = true;
                    points.push(point);
                }
            }
        }
    }
}

/// Serial sweep in canonical order: `i` outermost, `k` innermost.
#[allow(dead_code)]
pub fn generate_points<Alg: FractalAlgorithm>(algorithm: &Alg) -> PointBuffer {
    let dimension = algorithm.dimension();
    let mut points = PointBuffer::new();

    for i in 0..dimension {
        for j in 0..dimension {
            sweep_column(algorithm, i, j, &mut points);
        }
    }

    points
}
