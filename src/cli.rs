// cli.rs - Command-line interface configuration
use clap::Parser;

use crate::core::{DisplayContext, Rgba};
use crate::display::DisplayMode;
use crate::error::{Error, Result};

pub const DEFAULT_WIDTH: u32 = 500;
pub const DEFAULT_HEIGHT: u32 = 500;
pub const DEFAULT_COLOR: Rgba = [30, 144, 255, 255];
/// `DEFAULT_COLOR` as it is written on the command line
pub const DEFAULT_COLOR_ARG: &str = "30,144,255,255";

#[derive(Parser, Debug, Clone)]
#[command(name = "frame-presenter")]
#[command(about = "Shows CPU-generated frames through a GPU texture", long_about = None)]
pub struct Cli {
    /// Produce a new frame every redraw, or show one frame
    #[arg(long, value_enum, default_value_t = DisplayMode::Continuous)]
    pub mode: DisplayMode,

    /// Frame and window width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Frame and window height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Window title
    #[arg(long, default_value = "Frame Presenter")]
    pub title: String,

    /// Solid color for static mode, as R,G,B or R,G,B,A
    #[arg(long, value_parser = parse_color_arg, default_value = DEFAULT_COLOR_ARG)]
    pub color: Rgba,
}

impl Cli {
    /// Validate arguments into a display configuration
    pub fn into_config(self) -> Result<DisplayConfig> {
        Ok(DisplayConfig {
            context: DisplayContext::validated(self.width, self.height)?,
            title: self.title,
            mode: self.mode,
            color: self.color,
        })
    }
}

/// Validated settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub context: DisplayContext,
    pub title: String,
    pub mode: DisplayMode,
    pub color: Rgba,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            context: DisplayContext::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            title: "Frame Presenter".to_string(),
            mode: DisplayMode::Continuous,
            color: DEFAULT_COLOR,
        }
    }
}

fn parse_color_arg(value: &str) -> std::result::Result<Rgba, String> {
    parse_color(value).map_err(|e| e.to_string())
}

/// Parse `R,G,B` or `R,G,B,A`; alpha defaults to opaque
pub fn parse_color(value: &str) -> Result<Rgba> {
    let channels = value
        .split(',')
        .map(|part| part.trim().parse::<u8>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| Error::InvalidColor(value.to_string()))?;

    match channels.as_slice() {
        &[r, g, b] => Ok([r, g, b, 255]),
        &[r, g, b, a] => Ok([r, g, b, a]),
        _ => Err(Error::InvalidColor(value.to_string())),
    }
}
