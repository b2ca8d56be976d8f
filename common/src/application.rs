use color_eyre::Result;
use glium::Display;
use glium::glutin::surface::WindowSurface;
use winit::event::{DeviceEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::config::Config;

pub trait Application: Sized {
    /// Window title.
    const TITLE: &'static str;

    fn new(
        config: &Config,
        window: &Window,
        display: &Display<WindowSurface>,
        event_loop: &ActiveEventLoop,
    ) -> Result<Self>;

    fn window_event(
        &mut self,
        event: WindowEvent,
        event_loop: &ActiveEventLoop,
        window: &Window,
        display: &Display<WindowSurface>,
    ) -> Result<()>;

    #[allow(unused_variables)]
    fn device_event(
        &mut self,
        event: DeviceEvent,
        event_loop: &ActiveEventLoop,
        window: &Window,
        display: &Display<WindowSurface>,
    ) {
    }
}
