use ndarray::{ArrayView3, ArrayViewMut3};

/// Pixel layout of a frame buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    /// One byte per pixel.
    Grayscale,
    /// Three bytes per pixel, R G B interleaved.
    Rgb,
}

impl PixelFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Grayscale => 1,
            PixelFormat::Rgb => 3,
        }
    }
}

/// A single decoded frame: contiguous bytes in row-major order.
///
/// Format conversion happens at I/O boundaries only; the effect layer reads
/// and writes raw channel bytes. The buffer is exclusively owned: moving a
/// frame into a batch transfers ownership, nothing copies it implicitly.
#[derive(Clone, Debug)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    format: PixelFormat,
    index: usize,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, format: PixelFormat, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * format.bytes_per_pixel(),
            "data length must equal width * height * bytes per pixel"
        );
        Self {
            data,
            width,
            height,
            format,
            index,
        }
    }

    /// Zero-filled frame with the given geometry.
    pub fn empty(width: u32, height: u32, format: PixelFormat, index: usize) -> Self {
        let len = (width as usize) * (height as usize) * format.bytes_per_pixel();
        Self::new(vec![0; len], width, height, format, index)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Position of this frame in source decode order.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// A frame with no pixel data is invalid and must not enter the pipeline.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.format.bytes_per_pixel(),
        )
    }
}
