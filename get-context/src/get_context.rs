use color_eyre::Result;
use glium::glutin::surface::WindowSurface;
use glium::uniforms::EmptyUniforms;
use glium::{Display, Frame, Surface, uniform};
use log::info;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::KeyCode;
use winit::window::Window;

use common::application::Application;
use common::colors::{self, ColorExt};
use common::config::Config;
use common::geometry::primitives::{COLORED_TRIANGLE_LEFT, PLAIN_TRIANGLE_RIGHT};
use common::geometry::{ColoredVertex, Mesh, PositionVertex};
use common::input::Input;
use common::shader::ShaderProgram;

/// Two triangles side by side: per-vertex colors on the left, solid pink on the right.
pub struct GetContext {
    input: Input,
    vertex_color_program: ShaderProgram,
    solid_color_program: ShaderProgram,
    left_triangle: Mesh<ColoredVertex>,
    right_triangle: Mesh<PositionVertex>,
}

impl Application for GetContext {
    const TITLE: &'static str = "Getting Context";

    fn new(
        config: &Config,
        _window: &Window,
        display: &Display<WindowSurface>,
        _event_loop: &ActiveEventLoop,
    ) -> Result<Self> {
        let vertex_color_program = ShaderProgram::from_files(
            display,
            &config.shader_path("default", "vert"),
            &config.shader_path("default", "frag"),
            None,
        )?;

        let solid_color_program = ShaderProgram::from_files(
            display,
            &config.shader_path("solid_color", "vert"),
            &config.shader_path("solid_color", "frag"),
            None,
        )?;

        let left_triangle = Mesh::new(display, &COLORED_TRIANGLE_LEFT)?;
        let right_triangle = Mesh::new(display, &PLAIN_TRIANGLE_RIGHT)?;

        info!(
            "Ready with programs {} ({} vertices) and {} ({} vertices)",
            vertex_color_program.name(),
            left_triangle.vertex_count(),
            solid_color_program.name(),
            right_triangle.vertex_count()
        );

        Ok(Self {
            input: Input::new(),
            vertex_color_program,
            solid_color_program,
            left_triangle,
            right_triangle,
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
            }
            _ => (),
        };

        Ok(())
    }
}

impl GetContext {
    fn render(&self, target: &mut Frame) -> Result<()> {
        let (red, green, blue, alpha) = colors::CLEAR.to_rgba_tuple();
        target.clear_color_srgb(red, green, blue, alpha);

        self.left_triangle
            .draw(target, &self.vertex_color_program, &EmptyUniforms)?;

        self.right_triangle.draw(
            target,
            &self.solid_color_program,
            &uniform! { solid_color: colors::PINK.to_rgba_array() },
        )?;

        Ok(())
    }
}
