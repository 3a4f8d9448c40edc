//! Error types for the frame presenter

use thiserror::Error;

/// Everything that can stop the presenter
#[derive(Error, Debug)]
pub enum Error {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Failed to create window: {0}")]
    CreateWindow(#[from] winit::error::OsError),

    #[error("Failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("Failed to find appropriate adapter: {0}")]
    NoAdapter(#[from] wgpu::RequestAdapterError),

    #[error("Failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("Surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("Shader compilation failed: {0}")]
    Shader(String),

    #[error("GPU validation failed: {0}")]
    Gpu(String),

    #[error("Display {width}x{height} exceeds the GPU texture limit of {max}")]
    ExceedsTextureLimit { width: u32, height: u32, max: u32 },

    #[error("Frame is {actual_width}x{actual_height}, expected {expected_width}x{expected_height}")]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error("Invalid pixel buffer size: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    #[error("Invalid display dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid color '{0}': expected R,G,B or R,G,B,A with values 0-255")]
    InvalidColor(String),
}

impl Error {
    /// Build a mismatch error from expected and actual `(width, height)` pairs
    pub fn mismatch(expected: (u32, u32), actual: (u32, u32)) -> Self {
        Error::DimensionMismatch {
            expected_width: expected.0,
            expected_height: expected.1,
            actual_width: actual.0,
            actual_height: actual.1,
        }
    }
}

/// Convenience type alias for Results with [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
