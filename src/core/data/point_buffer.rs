use thiserror::Error;

use crate::core::data::coord3::Coord3;

pub const COMPONENTS_PER_POINT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointBufferError {
    #[error("point buffer length {len} is not a multiple of 3")]
    IncompleteTriple { len: usize },
}

pub type PointBufferData = Vec<f32>;

/// Flattened `(x, y, z)` triples of emitted boundary points, in emission order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointBuffer {
    buffer: PointBufferData,
}

impl PointBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    #[must_use]
    pub fn with_capacity(points: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(points * COMPONENTS_PER_POINT),
        }
    }

    pub fn from_data(buffer: PointBufferData) -> Result<Self, PointBufferError> {
        if buffer.len() % COMPONENTS_PER_POINT != 0 {
            return Err(PointBufferError::IncompleteTriple { len: buffer.len() });
        }

        Ok(Self { buffer })
    }

    #[must_use]
    pub fn from_points(points: Vec<[f32; 3]>) -> Self {
        Self {
            buffer: points.into_flattened(),
        }
    }

    pub fn push(&mut self, point: Coord3) {
        self.buffer
            .extend_from_slice(&[point.x as f32, point.y as f32, point.z as f32]);
    }

    pub fn append(&mut self, other: &mut PointBuffer) {
        self.buffer.append(&mut other.buffer);
    }

    #[must_use]
    pub fn buffer(&self) -> &[f32] {
        &self.buffer
    }

    #[must_use]
    pub fn into_inner(self) -> PointBufferData {
        self.buffer
    }

    /// Native-endian byte view of the buffer, the layout of a `Float32Array`.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.buffer)
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.buffer.len() / COMPONENTS_PER_POINT
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.buffer
            .chunks_exact(COMPONENTS_PER_POINT)
            .map(|c| [c[0], c[1], c[2]])
    }
}
