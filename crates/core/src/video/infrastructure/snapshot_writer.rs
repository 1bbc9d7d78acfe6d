use std::path::PathBuf;

use crate::shared::frame::{Frame, PixelFormat};

/// Dumps processed frames as PPM/PGM files for visual inspection.
///
/// Writes `frame<N>.ppm` into `dir` for the first `limit` frames it is
/// handed and ignores the rest. Intended for eyeballing an effect on the
/// opening frames of a run, not for bulk export.
pub struct SnapshotWriter {
    dir: PathBuf,
    limit: usize,
    written: usize,
}

impl SnapshotWriter {
    pub fn new(dir: impl Into<PathBuf>, limit: usize) -> Self {
        Self {
            dir: dir.into(),
            limit,
            written: 0,
        }
    }

    /// Saves `frame` unless the limit is reached. The counter only advances
    /// on a successful write.
    pub fn save(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        if self.written >= self.limit || frame.is_empty() {
            return Ok(());
        }

        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("frame{}.ppm", self.written));

        match frame.format() {
            PixelFormat::Rgb => {
                let img = image::RgbImage::from_raw(
                    frame.width(),
                    frame.height(),
                    frame.data().to_vec(),
                )
                .ok_or("frame buffer does not match its geometry")?;
                img.save(&path)?;
            }
            PixelFormat::Grayscale => {
                let img = image::GrayImage::from_raw(
                    frame.width(),
                    frame.height(),
                    frame.data().to_vec(),
                )
                .ok_or("frame buffer does not match its geometry")?;
                img.save(&path)?;
            }
        }

        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> usize {
        self.written
    }
}
