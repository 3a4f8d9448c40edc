use crate::error::{Error, Result};

/// Frame size agreed between a producer and the presenter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayContext {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl DisplayContext {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Reject sizes the GPU cannot hold a texture for
    pub fn validated(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self::new(width, height))
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Total size in bytes for an RGBA8 buffer
    pub fn buffer_size(&self) -> usize {
        self.pixel_count() * 4
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Fail unless both sides fit in a texture of `max_dimension`
    pub fn ensure_within(&self, max_dimension: u32) -> Result<()> {
        if self.width > max_dimension || self.height > max_dimension {
            return Err(Error::ExceedsTextureLimit {
                width: self.width,
                height: self.height,
                max: max_dimension,
            });
        }
        Ok(())
    }

    /// Fail with [`Error::DimensionMismatch`] unless `other` has the same size
    pub fn ensure_matches(&self, other: (u32, u32)) -> Result<()> {
        if self.dimensions() != other {
            return Err(Error::mismatch(self.dimensions(), other));
        }
        Ok(())
    }
}
