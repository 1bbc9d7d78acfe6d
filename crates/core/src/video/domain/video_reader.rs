use std::path::Path;

use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;

/// Decode side of the media codec service.
///
/// Implementations handle container parsing, codec selection and color
/// conversion; the pipeline only ever sees RGB `Frame`s and
/// `VideoMetadata`.
pub trait VideoReader: Send {
    /// Opens a video file and returns its metadata.
    ///
    /// Fails when the container cannot be opened, holds no video stream,
    /// or the stream's codec is unsupported.
    fn open(&mut self, path: &Path) -> Result<VideoMetadata, Box<dyn std::error::Error>>;

    /// Returns an iterator over frames in decode order, ending at
    /// end-of-stream.
    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_>;

    /// Releases any resources held by the reader.
    fn close(&mut self);
}
