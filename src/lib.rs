pub mod app;
pub mod cli;
pub mod core;
pub mod display;
pub mod error;

pub use app::run;
pub use display::{Display, DisplayMode};
pub use error::{Error, Result};
