use crate::shared::frame::Frame;

/// Domain interface for a per-frame pixel transform.
///
/// Implementations mutate the frame in place (`&mut Frame`) and must be
/// self-contained per frame: applying an effect has no side effects beyond
/// the frame's own buffer. An invalid (empty) frame is left untouched.
pub trait PixelEffect: Send {
    fn apply(&self, frame: &mut Frame);
}
