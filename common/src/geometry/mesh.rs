use color_eyre::Result;
use glium::glutin::surface::WindowSurface;
use glium::index::{NoIndices, PrimitiveType};
use glium::uniforms::Uniforms;
use glium::{Display, DrawParameters, Surface, Vertex, VertexBuffer};
use log::debug;

use crate::shader::ShaderProgram;

/// A static vertex buffer drawn as an unindexed triangle list.
pub struct Mesh<T: Copy + Vertex> {
    vertex_buffer: VertexBuffer<T>,
    indices: NoIndices,
}

impl<T: Copy + Vertex> Mesh<T> {
    pub fn new(display: &Display<WindowSurface>, vertices: &[T]) -> Result<Self> {
        let vertex_buffer = VertexBuffer::immutable(display, vertices)?;

        debug!(
            "Uploaded {} vertices ({} bytes)",
            vertices.len(),
            std::mem::size_of_val(vertices)
        );

        Ok(Self {
            vertex_buffer,
            indices: NoIndices(PrimitiveType::TrianglesList),
        })
    }

    pub fn draw<S: Surface, U: Uniforms>(
        &self,
        surface: &mut S,
        program: &ShaderProgram,
        uniforms: &U,
    ) -> Result<()> {
        program.draw(
            surface,
            &self.vertex_buffer,
            self.indices,
            uniforms,
            &DrawParameters::default(),
        )?;

        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_buffer.len()
    }
}
