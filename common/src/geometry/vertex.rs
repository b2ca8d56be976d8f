use glium::implement_vertex;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColoredVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl ColoredVertex {
    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

implement_vertex!(ColoredVertex, position, color);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionVertex {
    pub position: [f32; 3],
}

impl PositionVertex {
    pub const fn new(position: [f32; 3]) -> Self {
        Self { position }
    }
}

implement_vertex!(PositionVertex, position);
