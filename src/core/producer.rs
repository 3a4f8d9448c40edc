use super::display_context::DisplayContext;
use super::frame::{PixelBuffer, Rgba};

/// Blue channel of the gradient
pub const GRADIENT_BLUE: u8 = 150;

/// Supplies the next frame to display
///
/// Called synchronously on the window thread, once per displayed frame in
/// continuous mode and once in total in static mode.
pub trait FrameProducer {
    /// Size of every frame this producer returns
    fn dimensions(&self) -> DisplayContext;

    /// Produce the next frame
    fn next_frame(&mut self) -> PixelBuffer;
}

/// Scrolling gradient keyed by a frame counter
///
/// Every call advances the counter by one and then renders
/// `((x + offset) % 255, (y + offset) % 255, 150, 255)`.
#[derive(Debug, Clone)]
pub struct GradientProducer {
    context: DisplayContext,
    offset: u64,
}

impl GradientProducer {
    pub fn new(context: DisplayContext) -> Self {
        Self { context, offset: 0 }
    }

    /// Number of frames produced so far
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Color of pixel `(x, y)` for a given counter value
    pub fn color_at(x: u32, y: u32, offset: u64) -> Rgba {
        [
            ((x as u64 % 255 + offset % 255) % 255) as u8,
            ((y as u64 % 255 + offset % 255) % 255) as u8,
            GRADIENT_BLUE,
            255,
        ]
    }

    /// Render the frame for a counter value without advancing the counter
    pub fn frame_at(&self, offset: u64) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(self.context.width, self.context.height);
        for (y, row) in buffer.rows_mut().enumerate() {
            for (x, pixel) in row.chunks_exact_mut(4).enumerate() {
                pixel.copy_from_slice(&Self::color_at(x as u32, y as u32, offset));
            }
        }
        buffer
    }
}

impl FrameProducer for GradientProducer {
    fn dimensions(&self) -> DisplayContext {
        self.context
    }

    fn next_frame(&mut self) -> PixelBuffer {
        self.offset = self.offset.wrapping_add(1);
        self.frame_at(self.offset)
    }
}

/// Returns the same cached frame on every call
#[derive(Debug, Clone)]
pub struct StaticProducer {
    frame: PixelBuffer,
}

impl StaticProducer {
    /// Cache a single solid-color frame
    pub fn solid(context: DisplayContext, color: Rgba) -> Self {
        Self {
            frame: PixelBuffer::solid(context.width, context.height, color),
        }
    }

    /// Cache an existing frame
    pub fn from_buffer(frame: PixelBuffer) -> Self {
        Self { frame }
    }

    pub fn frame(&self) -> &PixelBuffer {
        &self.frame
    }
}

impl FrameProducer for StaticProducer {
    fn dimensions(&self) -> DisplayContext {
        self.frame.context()
    }

    fn next_frame(&mut self) -> PixelBuffer {
        self.frame.clone()
    }
}

/// Adapts a closure into a producer
///
/// The closure must honor the declared dimensions; the display rejects frames
/// that don't.
pub struct FnProducer<F> {
    context: DisplayContext,
    produce: F,
}

impl<F> FnProducer<F>
where
    F: FnMut() -> PixelBuffer,
{
    pub fn new(context: DisplayContext, produce: F) -> Self {
        Self { context, produce }
    }
}

impl<F> FrameProducer for FnProducer<F>
where
    F: FnMut() -> PixelBuffer,
{
    fn dimensions(&self) -> DisplayContext {
        self.context
    }

    fn next_frame(&mut self) -> PixelBuffer {
        (self.produce)()
    }
}
