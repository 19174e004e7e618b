use softbuffer::{Context, Surface};

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Theme, Window, WindowId},
};

use std::{num::NonZeroU32, sync::Arc};

use crate::{
    data::{
        config::{Config, MAX_HEIGHT, MAX_WIDTH},
        frame_interval, Background, CAP_MILLI_HZ, DEFAULT_MILLI_HZ,
    },
    error::{Error, Result},
    modes::ticker::FrameTicker,
};

type WindowSurface = Surface<Arc<Window>, Arc<Window>>;

struct WindowState {
    config: Config,
    window: Option<Arc<Window>>,
    surface: Option<WindowSurface>,
    background: Option<Background>,
    ticker: Option<FrameTicker>,
    final_buffer_size: PhysicalSize<u32>,
    error: Option<Error>,
}

impl ApplicationHandler for WindowState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Resumed fires again on some platforms after a suspend; the
        // window and its frame loop are already in place then.
        if self.window.is_some() {
            return;
        }

        let (w, h) = self.config.size;

        let window_attributes = Window::default_attributes()
            .with_title("driftfield")
            .with_inner_size(PhysicalSize::<u32>::new(w as u32, h as u32))
            .with_transparent(false)
            .with_theme(Some(Theme::Dark));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.error = Some(e.into());
                event_loop.exit();
                return;
            }
        };

        self.window = Some(Arc::clone(&window));

        let inner = window.inner_size();
        let size = capped_size(inner.width, inner.height)
            .map(|(w, h)| PhysicalSize::new(w.get(), h.get()))
            .unwrap_or(inner);
        self.final_buffer_size = size;

        let surface = match Self::create_surface(&window, size) {
            Ok(surface) => surface,
            Err(e) => {
                log::warn!("no drawable surface: {e}");
                return;
            }
        };

        self.surface = Some(surface);

        let Some(background) =
            Background::mount(size.width as usize, size.height as usize, &self.config)
        else {
            return;
        };

        self.background = Some(background);

        let milli_hz = self
            .config
            .milli_hz()
            .unwrap_or_else(|| Self::check_refresh_rate(&window));

        log::info!("refresh rate {}hz", milli_hz as f32 / 1000.0);

        let redraw_target = Arc::clone(&window);

        match FrameTicker::register(frame_interval(milli_hz), move || {
            if !redraw_target.is_minimized().unwrap_or(false) {
                redraw_target.request_redraw();
            }
        }) {
            Ok(ticker) => self.ticker = Some(ticker),
            Err(e) => log::warn!("unable to start the frame loop: {e}"),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && !event.repeat =>
            {
                if event.logical_key == Key::Named(NamedKey::Escape) {
                    event_loop.exit();
                }
            }

            WindowEvent::Resized(PhysicalSize { width, height }) => {
                let Some((w, h)) = capped_size(width, height) else {
                    return;
                };

                let Some(surface) = self.surface.as_mut() else {
                    return;
                };

                if let Err(e) = surface.resize(w, h) {
                    log::warn!("unable to resize the framebuffer: {e}");
                    return;
                }

                self.final_buffer_size = PhysicalSize::new(w.get(), h.get());

                if let Some(background) = self.background.as_mut() {
                    background.resize(w.get() as usize, h.get() as usize);
                }

                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                let (Some(window), Some(surface), Some(background)) = (
                    self.window.as_ref(),
                    self.surface.as_mut(),
                    self.background.as_mut(),
                ) else {
                    return;
                };

                background.render();

                let mut buffer = match surface.buffer_mut() {
                    Ok(buffer) => buffer,
                    Err(e) => {
                        log::warn!("unable to get the framebuffer: {e}");
                        return;
                    }
                };

                background.present_to(&mut buffer, self.final_buffer_size.width as usize);

                window.pre_present_notify();
                if let Err(e) = buffer.present() {
                    log::warn!("failing to present the frame: {e}");
                }
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _: &ActiveEventLoop) {
        self.unmount();
    }
}

impl WindowState {
    fn new(config: Config) -> Self {
        Self {
            config,
            window: None,
            surface: None,
            background: None,
            ticker: None,
            final_buffer_size: PhysicalSize::<u32>::new(0, 0),
            error: None,
        }
    }

    fn create_surface(window: &Arc<Window>, size: PhysicalSize<u32>) -> Result<WindowSurface> {
        let context = Context::new(Arc::clone(window))?;
        let mut surface = Surface::new(&context, Arc::clone(window))?;

        if let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) {
            surface.resize(w, h)?;
        }

        Ok(surface)
    }

    fn check_refresh_rate(window: &Window) -> u32 {
        let Some(milli_hz) = window
            .current_monitor()
            .and_then(|m| m.refresh_rate_millihertz())
        else {
            log::warn!(
                "unable to query the monitor refresh rate, using {}hz",
                DEFAULT_MILLI_HZ / 1000
            );
            return DEFAULT_MILLI_HZ;
        };

        if milli_hz > CAP_MILLI_HZ {
            log::info!("refresh rate capped to {}hz", CAP_MILLI_HZ / 1000);
            return CAP_MILLI_HZ;
        }

        milli_hz
    }

    /// Stops the frame loop before the surface goes away.
    fn unmount(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.dispose();
        }

        if let Some(background) = self.background.take() {
            background.dispose();
        }

        self.surface = None;
    }
}

/// Clamps a window size to the supported resolution. `None` for a zero
/// side, which minimised windows report.
fn capped_size(width: u32, height: u32) -> Option<(NonZeroU32, NonZeroU32)> {
    let w = width.min(MAX_WIDTH as u32);
    let h = height.min(MAX_HEIGHT as u32);

    if (w, h) != (width, height) {
        log::warn!("window size {width}x{height} capped to {w}x{h}");
    }

    Some((NonZeroU32::new(w)?, NonZeroU32::new(h)?))
}

pub fn winit_main(config: Config) -> Result<()> {
    let event_loop = EventLoop::new()?;

    let mut state = WindowState::new(config);

    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop.run_app(&mut state)?;

    state.unmount();

    match state.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
