use std::cell::RefCell;

use crate::effects::domain::pixel_effect::PixelEffect;
use crate::shared::frame::Frame;

/// Box blur over a centered square neighborhood of odd radius.
///
/// The `(Δrow, Δcol)` offset table is built once at construction and reused
/// for every pixel of every frame processed at that radius. Sampling clamps
/// each axis independently to the frame bounds, so edge pixels are
/// replicated rather than wrapped or zero-padded.
pub struct BoxBlur {
    offsets: Vec<(i32, i32)>,
    inv_samples: f32,
    scratch: RefCell<Vec<u8>>,
}

impl BoxBlur {
    /// Builds the offset table for `radius`.
    ///
    /// A negative radius leaves the kernel uninitialized, turning `apply`
    /// into a no-op. An even radius is coerced to the next odd value so the
    /// neighborhood stays symmetric: offsets span `[-radius/2, +radius/2]`
    /// on both axes, `radius²` entries in total.
    pub fn new(radius: i32) -> Self {
        if radius < 0 {
            return Self {
                offsets: Vec::new(),
                inv_samples: 0.0,
                scratch: RefCell::new(Vec::new()),
            };
        }

        let radius = if radius % 2 == 0 { radius + 1 } else { radius };
        let half = radius / 2;
        let samples = (radius * radius) as usize;

        let mut offsets = Vec::with_capacity(samples);
        for dr in -half..=half {
            for dc in -half..=half {
                offsets.push((dr, dc));
            }
        }

        Self {
            offsets,
            inv_samples: 1.0 / samples as f32,
            scratch: RefCell::new(Vec::new()),
        }
    }

    pub fn is_initialized(&self) -> bool {
        !self.offsets.is_empty()
    }
}

impl PixelEffect for BoxBlur {
    fn apply(&self, frame: &mut Frame) {
        if frame.is_empty() || !self.is_initialized() {
            return;
        }

        let width = frame.width() as i32;
        let height = frame.height() as i32;
        let channels = frame.format().bytes_per_pixel();

        // Every neighborhood must average pristine source values, so the
        // results go into a scratch buffer (reused across frames) and are
        // copied back in one pass once the frame is fully processed.
        let mut out = self.scratch.borrow_mut();
        out.resize(frame.len(), 0);

        let src = frame.data();
        for row in 0..height {
            for col in 0..width {
                let base = ((row * width + col) as usize) * channels;
                for c in 0..channels {
                    let mut acc = 0.0f32;
                    for &(dr, dc) in &self.offsets {
                        let r = (row + dr).clamp(0, height - 1) as usize;
                        let s = (col + dc).clamp(0, width - 1) as usize;
                        acc += src[(r * width as usize + s) * channels + c] as f32
                            * self.inv_samples;
                    }
                    out[base + c] = acc as u8;
                }
            }
        }

        frame.data_mut().copy_from_slice(&out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::frame::PixelFormat;
    use rstest::rstest;

    fn rgb_frame(width: u32, height: u32, data: Vec<u8>) -> Frame {
        Frame::new(data, width, height, PixelFormat::Rgb, 0)
    }

    /// Independent clamped-neighborhood reference with the same summation
    /// order as the kernel.
    fn reference_blur(frame: &Frame, radius: i32) -> Vec<u8> {
        let radius = if radius % 2 == 0 { radius + 1 } else { radius };
        let half = radius / 2;
        let inv = 1.0 / (radius * radius) as f32;
        let (w, h) = (frame.width() as i32, frame.height() as i32);
        let ch = frame.format().bytes_per_pixel();
        let src = frame.data();

        let mut out = vec![0u8; src.len()];
        for row in 0..h {
            for col in 0..w {
                for c in 0..ch {
                    let mut acc = 0.0f32;
                    for dr in -half..=half {
                        for dc in -half..=half {
                            let r = (row + dr).clamp(0, h - 1) as usize;
                            let s = (col + dc).clamp(0, w - 1) as usize;
                            acc += src[(r * w as usize + s) * ch + c] as f32 * inv;
                        }
                    }
                    out[((row * w + col) as usize) * ch + c] = acc as u8;
                }
            }
        }
        out
    }

    /// Non-uniform test pattern so neighboring pixels differ.
    fn gradient_frame(width: u32, height: u32) -> Frame {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for row in 0..height {
            for col in 0..width {
                data.push((row * 40 + col * 7) as u8);
                data.push((row * 11 + col * 31) as u8);
                data.push((row * 3 + col * 53) as u8);
            }
        }
        rgb_frame(width, height, data)
    }

    #[test]
    fn test_radius_one_is_identity() {
        let mut frame = gradient_frame(8, 6);
        let original = frame.data().to_vec();
        BoxBlur::new(1).apply(&mut frame);
        assert_eq!(frame.data(), &original[..]);
    }

    #[test]
    fn test_negative_radius_is_uninitialized_no_op() {
        let blur = BoxBlur::new(-3);
        assert!(!blur.is_initialized());

        let mut frame = gradient_frame(4, 4);
        let original = frame.data().to_vec();
        blur.apply(&mut frame);
        assert_eq!(frame.data(), &original[..]);
    }

    #[test]
    fn test_empty_frame_is_no_op() {
        let mut frame = Frame::new(Vec::new(), 0, 0, PixelFormat::Rgb, 0);
        BoxBlur::new(3).apply(&mut frame);
        assert!(frame.is_empty());
    }

    #[rstest]
    #[case(0, 1)]
    #[case(2, 3)]
    #[case(4, 5)]
    fn test_even_radius_coerces_to_next_odd(#[case] even: i32, #[case] odd: i32) {
        let mut coerced = gradient_frame(7, 5);
        let mut direct = gradient_frame(7, 5);
        BoxBlur::new(even).apply(&mut coerced);
        BoxBlur::new(odd).apply(&mut direct);
        assert_eq!(coerced.data(), direct.data());
    }

    #[rstest]
    #[case(3)]
    #[case(5)]
    fn test_offset_table_has_radius_squared_entries(#[case] radius: i32) {
        let blur = BoxBlur::new(radius);
        assert_eq!(blur.offsets.len(), (radius * radius) as usize);
    }

    #[test]
    fn test_uniform_white_frame_stays_white() {
        // All neighbors identical, so edge clamping must not darken
        // anything: every average lands back on full white.
        let mut frame = rgb_frame(3, 3, vec![255u8; 27]);
        BoxBlur::new(3).apply(&mut frame);
        assert!(frame.data().iter().all(|&b| b == 255));
    }

    #[test]
    fn test_matches_clamped_neighborhood_reference() {
        // An implementation that mutates the frame while iterating feeds
        // blurred values into later neighborhoods and fails this.
        let mut frame = gradient_frame(9, 7);
        let expected = reference_blur(&frame, 3);
        BoxBlur::new(3).apply(&mut frame);
        assert_eq!(frame.data(), &expected[..]);
    }

    #[test]
    fn test_larger_radius_matches_reference() {
        let mut frame = gradient_frame(12, 10);
        let expected = reference_blur(&frame, 5);
        BoxBlur::new(5).apply(&mut frame);
        assert_eq!(frame.data(), &expected[..]);
    }

    #[test]
    fn test_edge_pixels_replicate_not_wrap() {
        // 3x1 row: bright pixel on the left, dark elsewhere. With
        // clamp-to-edge the rightmost pixel never samples the left edge,
        // so it must stay strictly darker than the leftmost.
        let mut frame = rgb_frame(3, 1, vec![210, 210, 210, 30, 30, 30, 30, 30, 30]);
        BoxBlur::new(3).apply(&mut frame);
        assert!(frame.data()[0] > frame.data()[6]);
    }

    #[test]
    fn test_average_truncates_toward_zero() {
        // 2x1 pixels 0 and 255, radius 3. Left pixel samples columns
        // clamped to {0, 0, 1} each row: mean = 255/3 = 85 exactly;
        // right pixel samples {0, 1, 1}: mean = 170.
        let mut frame = Frame::new(vec![0, 255], 2, 1, PixelFormat::Grayscale, 0);
        BoxBlur::new(3).apply(&mut frame);
        assert_eq!(frame.data(), &[85, 170]);
    }

    #[test]
    fn test_mean_within_one_lsb_of_exact() {
        use approx::assert_abs_diff_eq;

        // Float accumulation order may differ from an exact rational mean
        // by rounding; the result must stay within one unit of the lowest
        // channel bit.
        let mut frame = gradient_frame(5, 5);
        let src = frame.data().to_vec();
        BoxBlur::new(3).apply(&mut frame);

        // Interior pixel (2, 2): all nine neighbors are in bounds.
        for c in 0..3 {
            let mut sum = 0u32;
            for dr in -1i32..=1 {
                for dc in -1i32..=1 {
                    let idx = (((2 + dr) * 5 + (2 + dc)) as usize) * 3 + c;
                    sum += src[idx] as u32;
                }
            }
            let exact = sum as f64 / 9.0;
            let got = frame.data()[(2 * 5 + 2) * 3 + c] as f64;
            assert_abs_diff_eq!(got, exact, epsilon = 1.0);
        }
    }

    #[test]
    fn test_grayscale_single_channel_supported() {
        let mut frame = Frame::new(vec![100u8; 16], 4, 4, PixelFormat::Grayscale, 0);
        BoxBlur::new(3).apply(&mut frame);
        assert!(frame.data().iter().all(|&b| b == 100));
    }

    #[test]
    fn test_scratch_reused_across_frames() {
        let blur = BoxBlur::new(3);
        let mut a = gradient_frame(6, 6);
        let mut b = gradient_frame(6, 6);
        let expected = reference_blur(&a, 3);
        blur.apply(&mut a);
        blur.apply(&mut b);
        assert_eq!(a.data(), &expected[..]);
        assert_eq!(b.data(), &expected[..]);
    }
}
