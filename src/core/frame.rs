use super::display_context::DisplayContext;
use crate::error::{Error, Result};

/// One RGBA color, 8 bits per channel
pub type Rgba = [u8; 4];

/// Row-major RGBA8 pixel buffer holding one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Create a transparent black buffer
    pub fn new(width: u32, height: u32) -> Self {
        let size = DisplayContext::new(width, height).buffer_size();
        Self {
            pixels: vec![0; size],
            width,
            height,
        }
    }

    /// Create a buffer with every pixel set to `color`
    pub fn solid(width: u32, height: u32, color: Rgba) -> Self {
        let count = DisplayContext::new(width, height).pixel_count();
        Self {
            pixels: color.repeat(count),
            width,
            height,
        }
    }

    /// Wrap existing RGBA bytes
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = DisplayContext::new(width, height).buffer_size();
        if pixels.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn context(&self) -> DisplayContext {
        DisplayContext::new(self.width, self.height)
    }

    /// Bytes per row, as the texture upload expects it
    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    /// Read one pixel, `None` outside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let idx = self.index(x, y)?;
        let mut color = [0; 4];
        color.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(color)
    }

    /// Write one pixel; writes outside the buffer are dropped
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx..idx + 4].copy_from_slice(&color);
        }
    }

    /// Iterate rows of RGBA bytes, top row first
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        let stride = self.bytes_per_row() as usize;
        self.pixels.chunks_exact_mut(stride.max(1))
    }

    /// Copy another frame of the same size into this one without reallocating
    ///
    /// On a size mismatch `self` is left as it was.
    pub fn copy_from(&mut self, other: &PixelBuffer) -> Result<()> {
        self.context().ensure_matches(other.dimensions())?;
        self.pixels.copy_from_slice(&other.pixels);
        Ok(())
    }
}
