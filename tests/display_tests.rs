use frame_presenter::core::{
    DisplayContext, FnProducer, FrameProducer, FrameSink, GradientProducer, PixelBuffer,
    StaticProducer,
};
use frame_presenter::{Display, DisplayMode, Error, Result};

/// Sink that stands in for the GPU presenter
struct RecordingSink {
    texture: PixelBuffer,
    uploads: usize,
    draws: usize,
}

impl RecordingSink {
    fn new(width: u32, height: u32) -> Self {
        Self {
            texture: PixelBuffer::new(width, height),
            uploads: 0,
            draws: 0,
        }
    }
}

impl FrameSink for RecordingSink {
    fn dimensions(&self) -> DisplayContext {
        self.texture.context()
    }

    fn upload(&mut self, frame: &PixelBuffer) -> Result<()> {
        self.texture.copy_from(frame)?;
        self.uploads += 1;
        Ok(())
    }

    fn draw(&mut self) -> Result<bool> {
        self.draws += 1;
        Ok(true)
    }
}

// ============================================================================
// Frame delivery
// ============================================================================

#[test]
fn test_upload_does_not_resize_texture() {
    let mut sink = RecordingSink::new(500, 500);
    let mut display = Display::new(
        GradientProducer::new(DisplayContext::new(500, 500)),
        DisplayMode::Continuous,
    );

    for _ in 0..4 {
        display.redraw(&mut sink).unwrap();
        assert_eq!(sink.dimensions(), DisplayContext::new(500, 500));
    }
    assert_eq!(sink.texture.as_bytes().len(), 500 * 500 * 4);
}

#[test]
fn test_continuous_display_shows_latest_frame() {
    let context = DisplayContext::new(32, 32);
    let mut sink = RecordingSink::new(32, 32);
    let mut display = Display::new(GradientProducer::new(context), DisplayMode::Continuous);

    display.redraw(&mut sink).unwrap();
    display.redraw(&mut sink).unwrap();

    assert_eq!(sink.texture, display.producer().frame_at(2));
    assert_eq!(display.uploads(), 2);
    assert_eq!(display.frames_presented(), 2);
}

#[test]
fn test_static_display_never_refreshes_texture() {
    let context = DisplayContext::new(16, 16);
    let mut sink = RecordingSink::new(16, 16);
    let mut display = Display::new(
        StaticProducer::solid(context, [200, 100, 50, 255]),
        DisplayMode::Static,
    );

    for _ in 0..20 {
        display.redraw(&mut sink).unwrap();
    }

    assert_eq!(sink.uploads, 1);
    assert_eq!(sink.draws, 20);
    assert_eq!(sink.texture, PixelBuffer::solid(16, 16, [200, 100, 50, 255]));
}

#[test]
fn test_static_mode_pulls_producer_once() {
    let mut calls = 0;
    let context = DisplayContext::new(2, 2);
    {
        let producer = FnProducer::new(context, || {
            calls += 1;
            PixelBuffer::new(2, 2)
        });
        let mut display = Display::new(producer, DisplayMode::Static);
        let mut sink = RecordingSink::new(2, 2);
        for _ in 0..3 {
            display.redraw(&mut sink).unwrap();
        }
    }
    assert_eq!(calls, 1);
}

// ============================================================================
// Contract violations
// ============================================================================

#[test]
fn test_wrong_sized_frame_is_contract_violation() {
    let producer = FnProducer::new(DisplayContext::new(10, 10), || PixelBuffer::new(10, 9));
    let mut display = Display::new(producer, DisplayMode::Continuous);
    let mut sink = RecordingSink::new(10, 10);

    match display.redraw(&mut sink) {
        Err(Error::DimensionMismatch {
            expected_width,
            expected_height,
            actual_width,
            actual_height,
        }) => {
            assert_eq!((expected_width, expected_height), (10, 10));
            assert_eq!((actual_width, actual_height), (10, 9));
        }
        other => panic!("expected DimensionMismatch, got {:?}", other),
    }
    assert_eq!(sink.uploads, 0);
    assert_eq!(sink.dimensions(), DisplayContext::new(10, 10));
}

#[test]
fn test_validate_catches_mismatch_before_first_frame() {
    let producer = GradientProducer::new(DisplayContext::new(640, 480));
    assert_eq!(producer.dimensions(), DisplayContext::new(640, 480));

    let display = Display::new(producer, DisplayMode::Continuous);
    assert!(display.validate(&RecordingSink::new(640, 480)).is_ok());
    assert!(display.validate(&RecordingSink::new(480, 640)).is_err());
}
