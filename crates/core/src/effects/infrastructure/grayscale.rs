use crate::effects::domain::pixel_effect::PixelEffect;
use crate::shared::frame::{Frame, PixelFormat};

/// Replaces each pixel's channels with the truncated integer mean of its
/// original R, G and B values.
pub struct Grayscale;

impl PixelEffect for Grayscale {
    fn apply(&self, frame: &mut Frame) {
        if frame.is_empty() || frame.format() != PixelFormat::Rgb {
            return;
        }

        for px in frame.data_mut().chunks_exact_mut(3) {
            let gray = ((px[0] as u16 + px[1] as u16 + px[2] as u16) / 3) as u8;
            px[0] = gray;
            px[1] = gray;
            px[2] = gray;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        let mut frame = Frame::new(vec![10, 20, 40], 1, 1, PixelFormat::Rgb, 0);
        Grayscale.apply(&mut frame);
        // (10 + 20 + 40) / 3 = 23 with integer truncation
        assert_eq!(frame.data(), &[23, 23, 23]);
    }

    #[test]
    fn test_mean_truncates() {
        let mut frame = Frame::new(vec![0, 0, 2], 1, 1, PixelFormat::Rgb, 0);
        Grayscale.apply(&mut frame);
        assert_eq!(frame.data(), &[0, 0, 0]);
    }

    #[test]
    fn test_idempotent() {
        let mut frame = Frame::new(vec![17, 130, 255, 3, 90, 44], 2, 1, PixelFormat::Rgb, 0);
        Grayscale.apply(&mut frame);
        let once = frame.data().to_vec();
        Grayscale.apply(&mut frame);
        assert_eq!(frame.data(), &once[..]);
    }

    #[test]
    fn test_white_stays_white() {
        let mut frame = Frame::new(vec![255u8; 12], 2, 2, PixelFormat::Rgb, 0);
        Grayscale.apply(&mut frame);
        assert!(frame.data().iter().all(|&b| b == 255));
    }

    #[test]
    fn test_non_rgb_frame_untouched() {
        let mut frame = Frame::new(vec![7, 8, 9, 10], 4, 1, PixelFormat::Grayscale, 0);
        Grayscale.apply(&mut frame);
        assert_eq!(frame.data(), &[7, 8, 9, 10]);
    }

    #[test]
    fn test_empty_frame_no_op() {
        let mut frame = Frame::new(Vec::new(), 0, 0, PixelFormat::Rgb, 0);
        Grayscale.apply(&mut frame);
        assert!(frame.is_empty());
    }
}
