use color_eyre::Result;
use winit::event_loop::{ControlFlow, EventLoop};

use crate::application::Application;
use crate::config::Config;
use crate::context::OpenGLContext;

pub fn run<A: Application>(config: Config) -> Result<()> {
    // Winit is dodgey on Wayland, prefer to use Xwayland
    // unsafe {
    //     std::env::set_var("WINIT_UNIX_BACKEND", "x11");
    // }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut opengl_context = OpenGLContext::<A>::new(config);
    event_loop.run_app(&mut opengl_context)?;

    match opengl_context.take_error() {
        Some(report) => Err(report),
        None => Ok(()),
    }
}
