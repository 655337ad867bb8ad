use std::time::{Duration, Instant};

use glam::UVec2;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{CursorGrabMode, Window, WindowId},
};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::input::InputEvent;
use crate::mode::{Mode, WindowControl};
use crate::render::{Presenter, RenderFrame};

enum State {
    Ready(Window),
    Init,
}

pub struct EngineContext {
    config: EngineConfig,
    event_loop: EventLoop<()>,
}

pub struct App {
    state: State,
    config: EngineConfig,
    mode: Box<dyn Mode>,
    presenter: Box<dyn Presenter>,
    previous: Instant,
    error: Option<EngineError>,
}

struct HostWindow<'a>(&'a Window);

impl WindowControl for HostWindow<'_> {
    fn release_pointer(&mut self) {
        if let Err(err) = self.0.set_cursor_grab(CursorGrabMode::None) {
            log::warn!("could not release pointer: {err}");
        }
        self.0.set_cursor_visible(true);
    }
}

impl App {
    pub fn new(config: EngineConfig, mode: Box<dyn Mode>, presenter: Box<dyn Presenter>) -> Self {
        Self {
            state: State::Init,
            config,
            mode,
            presenter,
            previous: Instant::now(),
            error: None,
        }
    }

    fn draw(&mut self) {
        let State::Ready(window) = &self.state else {
            return;
        };

        let now = Instant::now();
        let elapsed = clamp_elapsed(now - self.previous, self.config.max_elapsed);
        self.previous = now;
        self.mode.update(elapsed);

        let size = window.inner_size();
        if size.width > 0 && size.height > 0 {
            let drawable_size = UVec2::new(size.width, size.height);
            let mut frame = RenderFrame::new(drawable_size);
            self.mode.draw(drawable_size, &mut frame);
            self.presenter.present(&frame);
        }

        window.request_redraw();
    }

    fn resized(&mut self, size: PhysicalSize<u32>) {
        log::debug!("window resized to {}x{}", size.width, size.height);
    }

    fn input(&mut self, event: InputEvent) {
        if let State::Ready(window) = &self.state {
            let consumed = self.mode.handle_event(&event, &mut HostWindow(window));
            log::trace!("{event:?} consumed={consumed}");
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let State::Init = self.state {
            let win_attr = Window::default_attributes()
                .with_title(self.config.title.clone())
                .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));

            match event_loop.create_window(win_attr) {
                Ok(window) => {
                    log::info!("created window '{}'", self.config.title);
                    window.request_redraw();
                    self.previous = Instant::now();
                    self.state = State::Ready(window);
                }
                Err(err) => {
                    log::error!("failed to create a window: {err}");
                    self.error = Some(err.into());
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::Resized(size) => self.resized(size),
            WindowEvent::RedrawRequested => self.draw(),
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(input) = InputEvent::from_key(event.physical_key, event.state, event.repeat) {
                    self.input(input);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.input(InputEvent::from_mouse(button, state));
            }
            _ => {}
        }
    }
}

/// Frame time in seconds, capped so a stall does not turn into one huge step.
fn clamp_elapsed(raw: Duration, max: f32) -> f32 {
    raw.as_secs_f32().min(max)
}

/// Installs `env_logger`. `RUST_LOG` takes precedence over `default_filter`.
pub fn init_logging(default_filter: &str) {
    let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init();
    if result.is_err() {
        log::debug!("logger already installed");
    }
}

impl EngineContext {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        Ok(Self { config, event_loop })
    }

    /// Runs `mode` on the current thread until the window closes.
    pub fn run(self, mode: Box<dyn Mode>, presenter: Box<dyn Presenter>) -> Result<(), EngineError> {
        let mut app = App::new(self.config, mode, presenter);
        self.event_loop.run_app(&mut app)?;
        log::info!("event loop finished");
        match app.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
