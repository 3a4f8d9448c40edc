use anyhow::Context;
use clap::Parser;

use frame_presenter::app;
use frame_presenter::cli::Cli;
use frame_presenter::core::{GradientProducer, StaticProducer};
use frame_presenter::display::DisplayMode;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Cli::parse()
        .into_config()
        .context("invalid display configuration")?;
    let context = config.context;

    // winit only hands out its event loop on the main thread; main() runs there
    match config.mode {
        DisplayMode::Continuous => app::run(config, GradientProducer::new(context))
            .context("continuous display failed")?,
        DisplayMode::Static => {
            let color = config.color;
            app::run(config, StaticProducer::solid(context, color))
                .context("static display failed")?
        }
    }

    Ok(())
}
