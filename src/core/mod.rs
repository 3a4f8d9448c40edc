pub mod clock;
pub mod display_context;
pub mod frame;
pub mod gpu_context;
pub mod presenter;
pub mod producer;
pub mod quad;
pub mod sink;
pub mod texture;

pub use clock::FrameClock;
pub use display_context::DisplayContext;
pub use frame::{PixelBuffer, Rgba};
pub use gpu_context::GpuContext;
pub use presenter::Presenter;
pub use producer::{FnProducer, FrameProducer, GradientProducer, StaticProducer, GRADIENT_BLUE};
pub use quad::{Vertex, QUAD_VERTICES};
pub use sink::FrameSink;
pub use texture::{texture_format_for, FrameTexture};
