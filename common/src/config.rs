use std::path::{Path, PathBuf};

use clap::Parser;
use log::LevelFilter;
use winit::dpi::LogicalSize;
use winit::window::WindowAttributes;

#[derive(Parser, Clone, Debug)]
#[command(version, about = "OpenGL getting started programs")]
pub struct Config {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Allow the window to be resized
    #[arg(long)]
    pub resizable: bool,

    /// Directory containing `<name>/<name>.{vert,frag}` shader sources
    #[arg(long, default_value = "assets/shaders")]
    pub shaders_dir: PathBuf,

    #[arg(long, default_value_t = LevelFilter::Debug)]
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self::parse_from([env!("CARGO_PKG_NAME")])
    }
}

impl Config {
    pub fn window_attributes(&self, title: &str) -> WindowAttributes {
        WindowAttributes::default()
            .with_title(title)
            .with_inner_size(LogicalSize::new(self.width, self.height))
            .with_resizable(self.resizable)
    }

    /// Path of a shader stage, e.g. `shader_path("default", "vert")`.
    pub fn shader_path(&self, name: &str, extension: &str) -> PathBuf {
        shader_path_in(&self.shaders_dir, name, extension)
    }
}

fn shader_path_in(shaders_dir: &Path, name: &str, extension: &str) -> PathBuf {
    shaders_dir.join(name).join(format!("{name}.{extension}"))
}
