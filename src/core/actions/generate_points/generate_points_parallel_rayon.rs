use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_points::generate_points::sweep_column;
use crate::core::actions::generate_points::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point_buffer::PointBuffer;

/// Generates boundary points in parallel using rayon's work-stealing scheduler.
///
/// Output is identical to [`generate_points`](super::generate_points::generate_points).
/// For cancel-aware generation, use [`generate_points_parallel_rayon_cancelable`].
pub fn generate_points_parallel_rayon<Alg>(algorithm: &Alg) -> PointBuffer
where
    Alg: FractalAlgorithm + Sync,
{
    match generate_points_parallel_rayon_cancelable(algorithm, &NeverCancel) {
        Ok(points) => points,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Generates boundary points in parallel with cancellation support.
///
/// Each `i` row is one rayon task sweeping its `j` columns; the token is polled
/// before every column so a column is never abandoned half way. Rows are
/// re-assembled in `i` order, which keeps the canonical emission order.
///
/// Returns [`Cancelled`] if cancellation was requested, which should be handled as
/// expected control flow rather than an error to display.
pub fn generate_points_parallel_rayon_cancelable<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<PointBuffer, Cancelled>
where
    Alg: FractalAlgorithm + Sync,
    C: CancelToken,
{
    let dimension = algorithm.dimension();

    let rows = (0..dimension)
        .into_par_iter()
        .map(|i| {
            let mut row = PointBuffer::new();

            for j in 0..dimension {
                if cancel.is_cancelled() {
                    return Err(Cancelled);
                }

                sweep_column(algorithm, i, j, &mut row);
            }

            Ok(row)
        })
        .collect::<Result<Vec<PointBuffer>, Cancelled>>()?;

    let total = rows.iter().map(PointBuffer::point_count).sum();
    let mut points = PointBuffer::with_capacity(total);

    for mut row in rows {
        points.append(&mut row);
    }

    Ok(points)
}
