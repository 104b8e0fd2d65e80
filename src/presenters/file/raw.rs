use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::point_buffer::PointBuffer;

/// Writes the wire payload as is: packed native-endian `f32` triples, no header.
pub struct RawF32FilePresenter {}

impl RawF32FilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for RawF32FilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl FilePresenterPort for RawF32FilePresenter {
    fn present(&self, points: &PointBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        std::fs::write(filepath, points.as_bytes())
    }
}
