//! Interleaved float pixel buffers.

use crate::{ComputeError, ComputeResult};

/// Interleaved `f32` image: Lab on input, output RGB on output.
///
/// A fourth channel, if present, is carried through untouched.
#[derive(Clone)]
pub struct PixelBuffer {
    pub(crate) data: Vec<f32>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Number of channels (3 or 4).
    pub channels: u32,
}

impl PixelBuffer {
    /// Create from f32 data.
    pub fn from_f32(data: Vec<f32>, width: u32, height: u32, channels: u32) -> ComputeResult<Self> {
        if !(3..=4).contains(&channels) {
            return Err(ComputeError::UnsupportedChannels(channels));
        }
        let expected = (width as usize) * (height as usize) * (channels as usize);
        if data.len() != expected {
            return Err(ComputeError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { data, width, height, channels })
    }

    /// Create a zero-filled buffer.
    pub fn new(width: u32, height: u32, channels: u32) -> Self {
        let size = (width as usize) * (height as usize) * (channels as usize);
        Self {
            data: vec![0.0; size],
            width,
            height,
            channels,
        }
    }

    /// Pixel data.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutable pixel data.
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// (width, height, channels).
    pub fn dimensions(&self) -> (u32, u32, u32) {
        (self.width, self.height, self.channels)
    }

    /// Number of pixels.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Floats per scanline.
    pub fn row_len(&self) -> usize {
        (self.width as usize) * (self.channels as usize)
    }

    /// Returns the first three channels of pixel `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * self.channels as usize;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &self.channels)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_f32_checks_size() {
        assert!(PixelBuffer::from_f32(vec![0.0; 12], 2, 2, 3).is_ok());
        assert!(matches!(
            PixelBuffer::from_f32(vec![0.0; 11], 2, 2, 3),
            Err(ComputeError::BufferSizeMismatch { expected: 12, actual: 11 })
        ));
        assert!(matches!(
            PixelBuffer::from_f32(vec![0.0; 8], 2, 2, 2),
            Err(ComputeError::UnsupportedChannels(2))
        ));
    }

    #[test]
    fn test_pixel_access() {
        let data: Vec<f32> = (0..16).map(|v| v as f32).collect();
        let buf = PixelBuffer::from_f32(data, 2, 2, 4).unwrap();
        assert_eq!(buf.pixel(1, 1), Some([12.0, 13.0, 14.0]));
        assert_eq!(buf.pixel(2, 0), None);
        assert_eq!(buf.row_len(), 8);
        assert_eq!(buf.pixel_count(), 4);
    }
}
