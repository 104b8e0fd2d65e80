use std::path::Path;

use crate::core::data::point_buffer::PointBuffer;

pub trait FilePresenterPort {
    fn present(&self, points: &PointBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
