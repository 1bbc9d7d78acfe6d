use std::path::Path;

use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;

/// Encode side of the media codec service.
///
/// Opened lazily by the driver once the first decoded frame fixes the
/// output geometry.
pub trait VideoWriter: Send {
    fn open(
        &mut self,
        path: &Path,
        metadata: &VideoMetadata,
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Accepts one RGB frame; color conversion and bitstream buffering
    /// happen inside the implementation.
    fn write(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Drains codec-internal delayed frames and finalizes the container.
    /// Closing a writer that was never opened is a no-op.
    fn close(&mut self) -> Result<(), Box<dyn std::error::Error>>;
}
