use super::display_context::DisplayContext;
use super::frame::PixelBuffer;
use crate::error::Result;

/// Receives frames and puts them on screen
///
/// Implemented by the GPU presenter. The size reported by `dimensions` is
/// fixed; uploading never changes it.
pub trait FrameSink {
    /// Size of the texture frames are uploaded into
    fn dimensions(&self) -> DisplayContext;

    /// Replace the displayed image with `frame`
    fn upload(&mut self, frame: &PixelBuffer) -> Result<()>;

    /// Draw the current image and present it
    ///
    /// `Ok(false)` means the frame was skipped and nothing reached the screen.
    fn draw(&mut self) -> Result<bool>;
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;

    /// In-memory sink that keeps the last uploaded frame
    pub struct MockSink {
        pub staging: PixelBuffer,
        pub uploads: usize,
        pub draws: usize,
        pub skip_draws: bool,
    }

    impl MockSink {
        pub fn new(width: u32, height: u32) -> Self {
            Self {
                staging: PixelBuffer::new(width, height),
                uploads: 0,
                draws: 0,
                skip_draws: false,
            }
        }
    }

    impl FrameSink for MockSink {
        fn dimensions(&self) -> DisplayContext {
            self.staging.context()
        }

        fn upload(&mut self, frame: &PixelBuffer) -> Result<()> {
            self.staging.copy_from(frame)?;
            self.uploads += 1;
            Ok(())
        }

        fn draw(&mut self) -> Result<bool> {
            self.draws += 1;
            Ok(!self.skip_draws)
        }
    }
}
