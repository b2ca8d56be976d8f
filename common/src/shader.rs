use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glium::draw_parameters::DrawParameters;
use glium::glutin::surface::WindowSurface;
use glium::index::IndicesSource;
use glium::program::{ProgramCreationError, ProgramCreationInput, ShaderType};
use glium::uniforms::Uniforms;
use glium::vertex::MultiVerticesSource;
use glium::{Display, DrawError, Program, Surface};
use log::debug;
use thiserror::Error;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ShaderStage {
    Vertex,
    TessellationControl,
    TessellationEvaluation,
    Geometry,
    Fragment,
    Compute,
}

impl From<ShaderType> for ShaderStage {
    fn from(shader_type: ShaderType) -> Self {
        match shader_type {
            ShaderType::Vertex => Self::Vertex,
            ShaderType::TessellationControl => Self::TessellationControl,
            ShaderType::TessellationEvaluation => Self::TessellationEvaluation,
            ShaderType::Geometry => Self::Geometry,
            ShaderType::Fragment => Self::Fragment,
            ShaderType::Compute => Self::Compute,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Vertex => "VERTEX",
            Self::TessellationControl => "TESSELLATION_CONTROL",
            Self::TessellationEvaluation => "TESSELLATION_EVALUATION",
            Self::Geometry => "GEOMETRY",
            Self::Fragment => "FRAGMENT",
            Self::Compute => "COMPUTE",
        };

        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum ShaderError {
    #[error("ERROR::SHADER::FILE_NOT_FOUND {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("ERROR::SHADER::FILE_NOT_SUCCESSFULLY_READ {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("ERROR::SHADER::EMPTY_SOURCE {}", path.display())]
    EmptySource { path: PathBuf },

    #[error("ERROR::SHADER::{stage}::COMPILATION_FAILED\n{log}")]
    Compilation { stage: ShaderStage, log: String },

    #[error("ERROR::SHADER::PROGRAM::LINKING_FAILED\n{log}")]
    Linking { log: String },

    #[error("ERROR::SHADER::PROGRAM::UNSUPPORTED {0}")]
    Unsupported(String),
}

impl From<ProgramCreationError> for ShaderError {
    fn from(creation_error: ProgramCreationError) -> Self {
        match creation_error {
            ProgramCreationError::CompilationError(log, shader_type) => Self::Compilation {
                stage: shader_type.into(),
                log,
            },
            ProgramCreationError::LinkingError(log) => Self::Linking { log },
            other => Self::Unsupported(other.to_string()),
        }
    }
}

pub fn load_source(path: &Path) -> Result<String, ShaderError> {
    let source = fs::read_to_string(path).map_err(|io_error| match io_error.kind() {
        io::ErrorKind::NotFound => ShaderError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ShaderError::Read {
            path: path.to_path_buf(),
            source: io_error,
        },
    })?;

    if source.trim().is_empty() {
        return Err(ShaderError::EmptySource {
            path: path.to_path_buf(),
        });
    }

    Ok(source)
}

/// Source input for programs whose color outputs are already sRGB encoded.
fn creation_input<'a>(
    vertex_source: &'a str,
    fragment_source: &'a str,
    geometry_source: Option<&'a str>,
) -> ProgramCreationInput<'a> {
    ProgramCreationInput::SourceCode {
        vertex_shader: vertex_source,
        tessellation_control_shader: None,
        tessellation_evaluation_shader: None,
        geometry_shader: geometry_source,
        fragment_shader: fragment_source,
        transform_feedback_varyings: None,
        outputs_srgb: true,
        uses_point_size: false,
    }
}

/// A linked vertex + fragment (and optionally geometry) program.
///
/// The GPU program is released when this is dropped.
pub struct ShaderProgram {
    name: String,
    program: Program,
}

impl ShaderProgram {
    pub fn from_source(
        display: &Display<WindowSurface>,
        name: &str,
        vertex_source: &str,
        fragment_source: &str,
        geometry_source: Option<&str>,
    ) -> Result<Self, ShaderError> {
        let program = Program::new(
            display,
            creation_input(vertex_source, fragment_source, geometry_source),
        )?;

        debug!("Linked shader program {name}");

        Ok(Self {
            name: name.to_owned(),
            program,
        })
    }

    pub fn from_files(
        display: &Display<WindowSurface>,
        vertex_source_path: &Path,
        fragment_source_path: &Path,
        geometry_source_path: Option<&Path>,
    ) -> Result<Self, ShaderError> {
        let vertex_source = load_source(vertex_source_path)?;
        let fragment_source = load_source(fragment_source_path)?;
        let geometry_source = geometry_source_path.map(load_source).transpose()?;

        Self::from_source(
            display,
            &program_name(vertex_source_path),
            &vertex_source,
            &fragment_source,
            geometry_source.as_deref(),
        )
    }

    /// Draws with this program bound.
    pub fn draw<'a, 'b, S, V, I, U>(
        &self,
        surface: &mut S,
        vertices: V,
        indices: I,
        uniforms: &U,
        draw_parameters: &DrawParameters<'_>,
    ) -> Result<(), DrawError>
    where
        S: Surface,
        V: MultiVerticesSource<'b>,
        I: Into<IndicesSource<'a>>,
        U: Uniforms,
    {
        surface.draw(vertices, indices, &self.program, uniforms, draw_parameters)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn program_name(vertex_source_path: &Path) -> String {
    vertex_source_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| vertex_source_path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_shader_path(extension: &str) -> PathBuf {
        std::env::temp_dir().join(format!("shader-{}.{extension}", fastrand::u64(..)))
    }

    #[test]
    fn load_source_missing_file() {
        let path = temp_shader_path("vert");

        let result = load_source(&path);

        assert!(matches!(result, Err(ShaderError::FileNotFound { path: missing }) if missing == path));
    }

    #[test]
    fn load_source_reads_file() {
        let path = temp_shader_path("frag");
        let source = "#version 330 core\nout vec4 color;\nvoid main() { color = vec4(1.0); }\n";
        fs::write(&path, source).unwrap();

        let loaded = load_source(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded, source);
    }

    #[test]
    fn load_source_rejects_whitespace_only_file() {
        let path = temp_shader_path("vert");
        fs::write(&path, "  \n\t\n").unwrap();

        let result = load_source(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ShaderError::EmptySource { .. })));
    }

    #[test]
    fn load_source_directory_is_read_error() {
        let result = load_source(&std::env::temp_dir());

        assert!(matches!(result, Err(ShaderError::Read { .. })));
    }

    #[test]
    fn compilation_error_keeps_stage_and_log() {
        let error = ShaderError::from(ProgramCreationError::CompilationError(
            "0:3(1): error: syntax error".to_owned(),
            ShaderType::Fragment,
        ));

        match &error {
            ShaderError::Compilation { stage, log } => {
                assert_eq!(*stage, ShaderStage::Fragment);
                assert_eq!(log, "0:3(1): error: syntax error");
            }
            other => panic!("expected compilation error, got {other:?}"),
        }

        assert_eq!(
            error.to_string(),
            "ERROR::SHADER::FRAGMENT::COMPILATION_FAILED\n0:3(1): error: syntax error"
        );
    }

    #[test]
    fn linking_error_keeps_log() {
        let error = ShaderError::from(ProgramCreationError::LinkingError(
            "vertex_color not written".to_owned(),
        ));

        assert!(matches!(error, ShaderError::Linking { ref log } if log == "vertex_color not written"));
        assert!(error.to_string().starts_with("ERROR::SHADER::PROGRAM::LINKING_FAILED\n"));
    }

    #[test]
    fn unsupported_driver_features_are_reported() {
        let error = ShaderError::from(ProgramCreationError::CompilationNotSupported);

        assert!(matches!(error, ShaderError::Unsupported(_)));
    }

    #[test]
    fn missing_file_message_names_path() {
        let error = load_source(Path::new("missing/missing.vert")).unwrap_err();

        assert_eq!(error.to_string(), "ERROR::SHADER::FILE_NOT_FOUND missing/missing.vert");
    }

    #[test]
    fn programs_declare_srgb_output() {
        let input = creation_input("vertex", "fragment", Some("geometry"));

        match input {
            ProgramCreationInput::SourceCode {
                vertex_shader,
                fragment_shader,
                geometry_shader,
                tessellation_control_shader,
                outputs_srgb,
                uses_point_size,
                ..
            } => {
                assert_eq!(vertex_shader, "vertex");
                assert_eq!(fragment_shader, "fragment");
                assert_eq!(geometry_shader, Some("geometry"));
                assert!(tessellation_control_shader.is_none());
                assert!(outputs_srgb);
                assert!(!uses_point_size);
            }
            _ => panic!("expected source code input"),
        }
    }

    #[test]
    fn stage_names() {
        assert_eq!(ShaderStage::from(ShaderType::Vertex).to_string(), "VERTEX");
        assert_eq!(ShaderStage::from(ShaderType::Geometry).to_string(), "GEOMETRY");
        assert_eq!(ShaderStage::from(ShaderType::Fragment).to_string(), "FRAGMENT");
    }

    #[test]
    fn program_name_from_vertex_stem() {
        assert_eq!(program_name(Path::new("assets/shaders/default/default.vert")), "default");
        assert_eq!(program_name(Path::new("")), "");
    }
}
