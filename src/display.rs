use crate::core::{FrameProducer, FrameSink};
use crate::error::Result;

/// How often the producer is asked for a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DisplayMode {
    /// New frame before every redraw
    #[default]
    Continuous,
    /// One frame at startup, redrawn on window events
    Static,
}

/// Display pairs a frame producer with a sink
pub struct Display<P: FrameProducer> {
    producer: P,
    mode: DisplayMode,
    uploads: u64,
    frames_presented: u64,
}

impl<P: FrameProducer> Display<P> {
    pub fn new(producer: P, mode: DisplayMode) -> Self {
        Self {
            producer,
            mode,
            uploads: 0,
            frames_presented: 0,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Whether the window loop should redraw without waiting for events
    pub fn wants_continuous_redraw(&self) -> bool {
        self.mode == DisplayMode::Continuous
    }

    /// Check the producer was built for the sink's size
    pub fn validate(&self, sink: &dyn FrameSink) -> Result<()> {
        sink.dimensions()
            .ensure_matches(self.producer.dimensions().dimensions())
    }

    /// Full redraw cycle: produce → upload → draw
    ///
    /// Static mode produces and uploads on the first call only. Returns
    /// whether the frame was presented.
    pub fn redraw(&mut self, sink: &mut dyn FrameSink) -> Result<bool> {
        if self.needs_upload() {
            let frame = self.producer.next_frame();
            sink.dimensions().ensure_matches(frame.dimensions())?;
            sink.upload(&frame)?;
            self.uploads += 1;
        }

        let presented = sink.draw()?;
        if presented {
            self.frames_presented += 1;
        }
        Ok(presented)
    }

    fn needs_upload(&self) -> bool {
        match self.mode {
            DisplayMode::Continuous => true,
            DisplayMode::Static => self.uploads == 0,
        }
    }

    /// Number of frames pulled from the producer and uploaded
    pub fn uploads(&self) -> u64 {
        self.uploads
    }

    /// Number of completed draws
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn producer(&self) -> &P {
        &self.producer
    }

    pub fn producer_mut(&mut self) -> &mut P {
        &mut self.producer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sink::mock::MockSink;
    use crate::core::{DisplayContext, FnProducer, GradientProducer, PixelBuffer, StaticProducer};
    use crate::error::Error;

    #[test]
    fn continuous_mode_uploads_every_frame() {
        let producer = GradientProducer::new(DisplayContext::new(8, 8));
        let mut display = Display::new(producer, DisplayMode::Continuous);
        let mut sink = MockSink::new(8, 8);

        for _ in 0..3 {
            display.redraw(&mut sink).unwrap();
        }

        assert_eq!(sink.uploads, 3);
        assert_eq!(sink.draws, 3);
        assert_eq!(display.producer().offset(), 3);
        assert_eq!(sink.staging.pixel(0, 0), Some([3, 3, 150, 255]));
    }

    #[test]
    fn static_mode_uploads_once() {
        let producer = StaticProducer::solid(DisplayContext::new(4, 4), [10, 20, 30, 255]);
        let mut display = Display::new(producer, DisplayMode::Static);
        let mut sink = MockSink::new(4, 4);

        for _ in 0..5 {
            display.redraw(&mut sink).unwrap();
        }

        assert_eq!(display.uploads(), 1);
        assert_eq!(sink.uploads, 1);
        assert_eq!(sink.draws, 5);
        assert_eq!(display.frames_presented(), 5);
        assert_eq!(sink.staging.pixel(3, 3), Some([10, 20, 30, 255]));
    }

    #[test]
    fn skipped_draws_are_not_counted() {
        let producer = GradientProducer::new(DisplayContext::new(2, 2));
        let mut display = Display::new(producer, DisplayMode::Continuous);
        let mut sink = MockSink::new(2, 2);

        assert!(display.redraw(&mut sink).unwrap());
        sink.skip_draws = true;
        assert!(!display.redraw(&mut sink).unwrap());
        assert!(!display.redraw(&mut sink).unwrap());

        assert_eq!(sink.draws, 3);
        assert_eq!(display.frames_presented(), 1);
        assert_eq!(display.uploads(), 3);
    }

    #[test]
    fn static_mode_waits_for_events() {
        let producer = StaticProducer::solid(DisplayContext::new(1, 1), [0; 4]);
        assert!(!Display::new(producer.clone(), DisplayMode::Static).wants_continuous_redraw());
        assert!(Display::new(producer, DisplayMode::Continuous).wants_continuous_redraw());
    }

    #[test]
    fn validate_rejects_mismatched_producer() {
        let display = Display::new(
            GradientProducer::new(DisplayContext::new(500, 400)),
            DisplayMode::Continuous,
        );

        assert!(display.validate(&MockSink::new(500, 400)).is_ok());
        assert!(matches!(
            display.validate(&MockSink::new(500, 500)),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn wrong_sized_frame_is_not_uploaded() {
        let producer = FnProducer::new(DisplayContext::new(2, 2), || PixelBuffer::new(3, 3));
        let mut display = Display::new(producer, DisplayMode::Continuous);
        let mut sink = MockSink::new(2, 2);

        let result = display.redraw(&mut sink);

        assert!(matches!(result, Err(Error::DimensionMismatch { .. })));
        assert_eq!(sink.uploads, 0);
        assert_eq!(sink.draws, 0);
        assert_eq!(display.frames_presented(), 0);
    }
}
