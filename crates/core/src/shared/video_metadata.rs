use std::path::PathBuf;

/// Geometry and timing shared by every frame of a video.
///
/// `codec` holds the source codec name; the writer uses it as an encoder
/// hint when opening the sink.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub total_frames: usize,
    pub codec: String,
    pub source_path: Option<PathBuf>,
}
