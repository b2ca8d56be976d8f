use color_eyre::Result;
use glium::glutin::surface::WindowSurface;
use glium::{Display, Frame, Surface, uniform};
use log::debug;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::KeyCode;
use winit::window::Window;

use common::application::Application;
use common::colors::{self, ColorExt};
use common::config::Config;
use common::frame::FrameState;
use common::geometry::primitives::COLORED_TRIANGLE_CENTERED;
use common::geometry::{ColoredVertex, Mesh};
use common::input::Input;
use common::maths;
use common::shader::ShaderProgram;

const FPS_LOG_INTERVAL: u64 = 600;

/// A colored triangle spinning about the screen's center, one radian per second.
pub struct Transform {
    input: Input,
    state: FrameState,
    program: ShaderProgram,
    triangle: Mesh<ColoredVertex>,
}

impl Application for Transform {
    const TITLE: &'static str = "Transform";

    fn new(
        config: &Config,
        _window: &Window,
        display: &Display<WindowSurface>,
        _event_loop: &ActiveEventLoop,
    ) -> Result<Self> {
        let program = ShaderProgram::from_files(
            display,
            &config.shader_path("transform", "vert"),
            &config.shader_path("default", "frag"),
            None,
        )?;

        let triangle = Mesh::new(display, &COLORED_TRIANGLE_CENTERED)?;

        debug!(
            "Ready with program {} ({} vertices)",
            program.name(),
            triangle.vertex_count()
        );

        Ok(Self {
            input: Input::new(),
            state: FrameState::default(),
            program,
            triangle,
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
                let rendered = self.render(&mut target);
                target.finish()?;
                rendered?;

                self.input.reset_internal_state();
                self.state.update_statistics();

                if self.state.frame_count % FPS_LOG_INTERVAL == 0 {
                    debug!(
                        "{} frames, {:.1} fps average, last frame {:.2} ms ({:.0} fps)",
                        self.state.frame_count,
                        self.state.average_fps(),
                        self.state.deltatime * 1000.0,
                        self.state.fps
                    );
                }
            }
            _ => (),
        };

        Ok(())
    }
}

impl Transform {
    fn render(&self, target: &mut Frame) -> Result<()> {
        let (red, green, blue, alpha) = colors::CLEAR.to_rgba_tuple();
        target.clear_color_srgb(red, green, blue, alpha);

        let transform = maths::rotation_z(self.state.elapsed());

        self.triangle.draw(
            target,
            &self.program,
            &uniform! { transform: maths::raw_matrix(transform) },
        )?;

        Ok(())
    }
}
