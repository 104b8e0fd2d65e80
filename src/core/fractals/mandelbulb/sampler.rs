use tracing::debug;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::generate_points::generate_points_parallel_rayon::{
    generate_points_parallel_rayon, generate_points_parallel_rayon_cancelable,
};
use crate::core::data::point_buffer::PointBuffer;
use crate::core::fractals::mandelbulb::algorithm::MandelbulbAlgorithm;
use crate::core::fractals::mandelbulb::params::GenerationParams;

/// Samples the Mandelbulb boundary on a `dimension`³ lattice.
///
/// Deterministic and total: the same params always produce bit-identical output in
/// lattice order (`i` outer, `j` middle, `k` inner).
#[must_use]
pub fn generate(params: &GenerationParams) -> PointBuffer {
    let algorithm = MandelbulbAlgorithm::new(params);
    let points = generate_points_parallel_rayon(&algorithm);

    debug!(
        dimension = params.dimension(),
        power = params.power(),
        max_iterations = params.max_iterations(),
        points = points.point_count(),
        "sampled mandelbulb"
    );

    points
}

/// Like [`generate`], but checks `cancel` before every `(i, j)` column.
pub fn generate_cancelable<C: CancelToken>(
    params: &GenerationParams,
    cancel: &C,
) -> Result<PointBuffer, Cancelled> {
    let algorithm = MandelbulbAlgorithm::new(params);

    generate_points_parallel_rayon_cancelable(&algorithm, cancel)
}
