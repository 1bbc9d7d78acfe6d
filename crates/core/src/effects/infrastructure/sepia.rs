use crate::effects::domain::pixel_effect::PixelEffect;
use crate::shared::frame::{Frame, PixelFormat};

/// Fixed-matrix sepia tone.
///
/// Source channels are read into locals before any write, and each output
/// channel clamps at 255.
pub struct Sepia;

impl PixelEffect for Sepia {
    fn apply(&self, frame: &mut Frame) {
        if frame.is_empty() || frame.format() != PixelFormat::Rgb {
            return;
        }

        for px in frame.data_mut().chunks_exact_mut(3) {
            let (r, g, b) = (px[0] as f32, px[1] as f32, px[2] as f32);
            px[0] = (r * 0.393 + g * 0.769 + b * 0.189).min(255.0) as u8;
            px[1] = (r * 0.349 + g * 0.686 + b * 0.168).min(255.0) as u8;
            px[2] = (r * 0.272 + g * 0.534 + b * 0.131).min(255.0) as u8;
        }
    }
}
