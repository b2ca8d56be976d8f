use color_eyre::{Report, Result};
use glium::Display;
use glium::backend::glutin::SimpleWindowBuilder;
use glium::glutin::surface::WindowSurface;
use log::{error, info};
use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::application::Application;
use crate::config::Config;

/// Owns the window, its OpenGL display and the application drawing into it.
///
/// Both are created lazily on the first `resumed` and dropped together with the context.
pub struct OpenGLContext<A: Application> {
    pub window: Option<Window>,
    pub display: Option<Display<WindowSurface>>,
    pub application: Option<A>,
    config: Config,
    error: Option<Report>,
}

impl<A: Application> OpenGLContext<A> {
    pub fn new(config: Config) -> Self {
        Self {
            window: None,
            display: None,
            application: None,
            config,
            error: None,
        }
    }

    /// The error that stopped the event loop, if any.
    pub fn take_error(&mut self) -> Option<Report> {
        self.error.take()
    }

    fn fail(&mut self, report: Report, event_loop: &ActiveEventLoop) {
        error!("{report:#}");

        // Keep the first failure, later ones are usually fallout
        if self.error.is_none() {
            self.error = Some(report);
        }

        event_loop.exit();
    }

    fn parts(&mut self) -> Option<(&mut A, &Window, &Display<WindowSurface>)> {
        match (&mut self.application, &self.window, &self.display) {
            (Some(application), Some(window), Some(display)) => {
                Some((application, window, display))
            }
            _ => None,
        }
    }
}

impl<A: Application> ApplicationHandler for OpenGLContext<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (window, display) = SimpleWindowBuilder::new()
            .set_window_builder(self.config.window_attributes(A::TITLE))
            .build(event_loop);

        let size = window.inner_size();
        info!(
            "Created window \"{}\" ({}x{})",
            A::TITLE,
            size.width,
            size.height
        );

        match A::new(&self.config, &window, &display, event_loop) {
            Ok(application) => self.application = Some(application),
            Err(report) => self.fail(report, event_loop),
        }

        self.window = Some(window);
        self.display = Some(display);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some((application, window, display)) = self.parts() else {
            return;
        };

        if window_id != window.id() {
            return;
        }

        if let Err(report) = application.window_event(event, event_loop, window, display) {
            self.fail(report, event_loop);
        }
    }

    fn device_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let Some((application, window, display)) = self.parts() {
            application.device_event(event, event_loop, window, display);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        info!("Exiting {}", A::TITLE);

        // GPU objects must go before the context that owns them
        self.application = None;
    }
}
