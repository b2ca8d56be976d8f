use color_eyre::Result;
use glium::glutin::surface::WindowSurface;
use glium::{Display, Surface};
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::KeyCode;
use winit::window::Window;

use common::application::Application;
use common::colors::{self, ColorExt};
use common::config::Config;
use common::input::Input;

/// Empty starting point: a window cleared to the background color every frame.
pub struct Template {
    input: Input,
}

impl Application for Template {
    const TITLE: &'static str = "Template";

    fn new(
        _config: &Config,
        _window: &Window,
        _display: &Display<WindowSurface>,
        _event_loop: &ActiveEventLoop,
    ) -> Result<Self> {
        Ok(Self {
            input: Input::new(),
        })
    }

    fn window_event(
        &mut self,
        event: WindowEvent,
        event_loop: &ActiveEventLoop,
        _window: &Window,
        display: &Display<WindowSurface>,
    ) -> Result<()> {
        self.input.process_window_event(&event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(new_size) => display.resize((new_size.width, new_size.height)),
            WindowEvent::RedrawRequested => {
                if self.input.key_hit(KeyCode::Escape) {
                    event_loop.exit();
                }

                let mut target = display.draw();
                {
                    let (red, green, blue, alpha) = colors::CLEAR.to_rgba_tuple();
                    target.clear_color_srgb(red, green, blue, alpha);

                    // render stuff here
                }
                target.finish()?;

                self.input.reset_internal_state();
            }
            _ => (),
        };

        Ok(())
    }
}
