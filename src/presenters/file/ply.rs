use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::point_buffer::PointBuffer;

/// Writes the cloud as a binary little-endian PLY with one vertex per point.
pub struct PlyFilePresenter {}

impl PlyFilePresenter {
    pub fn new() -> Self {
        Self {}
    }

    fn write_to<W: Write>(points: &PointBuffer, out: &mut W) -> std::io::Result<()> {
        // PLY header: vertex element with three float properties
        writeln!(out, "ply")?;
        writeln!(out, "format binary_little_endian 1.0")?;
        writeln!(out, "element vertex {}", points.point_count())?;
        writeln!(out, "property float x")?;
        writeln!(out, "property float y")?;
        writeln!(out, "property float z")?;
        writeln!(out, "end_header")?;

        for value in points.buffer() {
            out.write_all(&value.to_le_bytes())?;
        }

        Ok(())
    }
}

impl Default for PlyFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl FilePresenterPort for PlyFilePresenter {
    fn present(&self, points: &PointBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(filepath)?);

        Self::write_to(points, &mut file)?;
        file.flush()
    }
}
