use crate::effects::domain::pixel_effect::PixelEffect;
use crate::shared::frame::{Frame, PixelFormat};

/// Per-channel gain in `[0, 2]`, clamped to the byte range.
///
/// Gains of `(1, 1, 1)` leave the frame unchanged. Range validation is the
/// caller's responsibility (the CLI rejects out-of-range gains before a
/// pipeline is built).
pub struct Saturation {
    r: f32,
    g: f32,
    b: f32,
}

impl Saturation {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        debug_assert!(
            [r, g, b].iter().all(|k| (0.0..=2.0).contains(k)),
            "saturation gains must be in [0, 2]"
        );
        Self { r, g, b }
    }
}

impl PixelEffect for Saturation {
    fn apply(&self, frame: &mut Frame) {
        if frame.is_empty() || frame.format() != PixelFormat::Rgb {
            return;
        }

        for px in frame.data_mut().chunks_exact_mut(3) {
            px[0] = (px[0] as f32 * self.r).min(255.0) as u8;
            px[1] = (px[1] as f32 * self.g).min(255.0) as u8;
            px[2] = (px[2] as f32 * self.b).min(255.0) as u8;
        }
    }
}
