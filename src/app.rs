use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::cli::DisplayConfig;
use crate::core::{FrameClock, FrameProducer, Presenter};
use crate::display::{Display, DisplayMode};
use crate::error::{Error, Result};

/// Window loop driving a [`Display`] through a [`Presenter`]
///
/// The window is created on resume and closing it is the only way out of the
/// loop. A fatal error is kept and handed back by [`run`].
pub struct App<P: FrameProducer> {
    config: DisplayConfig,
    display: Display<P>,
    window: Option<Arc<Window>>,
    presenter: Option<Presenter>,
    clock: FrameClock,
    error: Option<Error>,
}

impl<P: FrameProducer> App<P> {
    pub fn new(config: DisplayConfig, producer: P) -> Self {
        let display = Display::new(producer, config.mode);
        Self {
            config,
            display,
            window: None,
            presenter: None,
            clock: FrameClock::new(),
            error: None,
        }
    }

    pub fn display(&self) -> &Display<P> {
        &self.display
    }

    /// Take the error that stopped the loop, if any
    pub fn take_error(&mut self) -> Option<Error> {
        self.error.take()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: Error) {
        log::error!("{}", err);
        if self.error.is_none() {
            self.error = Some(err);
        }
        event_loop.exit();
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<(Arc<Window>, Presenter)> {
        let context = self.config.context;
        let window = event_loop.create_window(
            Window::default_attributes()
                .with_title(self.config.title.clone())
                .with_inner_size(PhysicalSize::new(context.width, context.height))
                .with_resizable(false),
        )?;
        let window = Arc::new(window);

        let presenter = Presenter::new(window.clone(), context)?;
        self.display.validate(&presenter)?;

        Ok((window, presenter))
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(presenter) = self.presenter.as_mut() else {
            return;
        };

        match self.display.redraw(presenter) {
            Ok(presented) => {
                if counts_toward_fps(self.display.mode(), presented) {
                    self.clock.tick();
                }
            }
            Err(err) => self.fail(event_loop, err),
        }
    }
}

impl<P: FrameProducer> ApplicationHandler for App<P> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match self.create_window(event_loop) {
            Ok((window, presenter)) => {
                log::info!(
                    "Window open: {}x{}, {:?} mode",
                    self.config.context.width,
                    self.config.context.height,
                    self.display.mode()
                );
                window.request_redraw();
                self.window = Some(window);
                self.presenter = Some(presenter);
                self.clock.reset();
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!(
                    "Close requested after {} frames",
                    self.display.frames_presented()
                );
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(presenter) = self.presenter.as_mut() {
                    presenter.resize_surface(size.width, size.height);
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {
                if !self.display.wants_continuous_redraw() {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if !self.display.wants_continuous_redraw() {
            return;
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Whether a redraw feeds the FPS clock
///
/// Static mode redraws only on window events, so its frame rate is not
/// measured. Skipped frames never count.
pub fn counts_toward_fps(mode: DisplayMode, presented: bool) -> bool {
    presented && mode == DisplayMode::Continuous
}

/// Control flow for a display: spin when continuous, sleep when static
pub fn control_flow_for<P: FrameProducer>(display: &Display<P>) -> ControlFlow {
    if display.wants_continuous_redraw() {
        ControlFlow::Poll
    } else {
        ControlFlow::Wait
    }
}

/// Open the window and show frames from `producer` until it is closed
///
/// Must be called from the main thread; the event loop and the GPU surface
/// stay on it for the whole run.
pub fn run<P: FrameProducer>(config: DisplayConfig, producer: P) -> Result<()> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, producer);
    event_loop.set_control_flow(control_flow_for(app.display()));

    event_loop.run_app(&mut app)?;

    match app.take_error() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
