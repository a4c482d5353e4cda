//! A rectangle and a diamond in one flat colour, from sources compiled in place.

use shader::Shader;

use super::Exercise;
use crate::graphics::gl_types::{Attribute, Mesh};

const VERTEX_SOURCE: &str = "#version 330 core
layout (location = 0) in vec3 position;
void main()
{
    gl_Position = vec4(position.x, position.y, position.z, 1.0);
}
";

const FRAGMENT_SOURCE: &str = "#version 330 core
out vec4 color;
void main()
{
    color = vec4(1.0f, 0.5f, 0.2f, 1.0f);
}
";

#[rustfmt::skip]
pub const VERTICES: [f32; 24] = [
     0.5,   0.5, 0.0, // rectangle top right
     0.5,  -0.5, 0.0, // rectangle bottom right
    -0.5,  -0.5, 0.0, // rectangle bottom left
    -0.5,   0.5, 0.0, // rectangle top left
     0.6,   0.0, 0.0, // diamond left
     0.75,  0.4, 0.0, // diamond top
     0.9,   0.0, 0.0, // diamond right
     0.75, -0.4, 0.0, // diamond bottom
];

#[rustfmt::skip]
pub const INDICES: [u32; 12] = [
    0, 1, 3,
    1, 2, 3,
    5, 4, 6,
    7, 6, 4,
];

pub const ATTRIBUTES: [Attribute; 1] = [Attribute { index: 0, size: 3, offset: 0 }];

pub struct Quads {
    shader: Shader,
    mesh: Mesh,
}

impl Quads {
    pub fn new() -> Self {
        Self {
            shader: Shader::from_source(VERTEX_SOURCE, FRAGMENT_SOURCE),
            mesh: Mesh::new(&VERTICES, &INDICES, &ATTRIBUTES),
        }
    }
}

impl Exercise for Quads {
    fn draw(&mut self, _elapsed: f32) {
        self.shader.set_used();
        self.mesh.draw();
    }
}
