use shader::Shader;

use super::Exercise;
use crate::config::AssetConfig;
use crate::graphics::gl_types::{Attribute, Mesh};

/// How far right the triangle is pushed, in normalized device coordinates.
pub const OFFSET_X: f32 = 0.5;

#[rustfmt::skip]
pub const VERTICES: [f32; 18] = [
    // position       colour
     0.5, -0.5, 0.0,  1.0, 0.0, 0.0, // bottom right, red
    -0.5, -0.5, 0.0,  0.0, 1.0, 0.0, // bottom left, green
     0.0,  0.5, 0.0,  0.0, 0.0, 1.0, // top, blue
];

pub const INDICES: [u32; 3] = [0, 1, 2];

pub const ATTRIBUTES: [Attribute; 2] = [
    Attribute { index: 0, size: 3, offset: 0 },
    Attribute { index: 1, size: 3, offset: 3 },
];

/// One coloured triangle, moved along x by a uniform in the vertex shader.
pub struct Offset {
    shader: Shader,
    mesh: Mesh,
}

impl Offset {
    pub fn new(assets: &AssetConfig) -> Self {
        Self {
            shader: Shader::new(assets.shader("move_x.vs"), assets.shader("fshader.frag")),
            mesh: Mesh::new(&VERTICES, &INDICES, &ATTRIBUTES),
        }
    }
}

impl Exercise for Offset {
    fn draw(&mut self, _elapsed: f32) {
        self.shader.set_used();
        self.shader.set_float("offset_x", OFFSET_X);
        self.mesh.draw();
    }
}
