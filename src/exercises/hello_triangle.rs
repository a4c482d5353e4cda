use shader::Shader;

use super::Exercise;
use crate::config::AssetConfig;
use crate::graphics::gl_types::{Attribute, Mesh};

#[rustfmt::skip]
pub const RECTANGLE: [f32; 24] = [
    // position      colour
     0.5,  0.5, 0.0,  0.0, 0.0, 1.0, // top right, blue
     0.5, -0.5, 0.0,  1.0, 0.0, 0.0, // bottom right, red
    -0.5, -0.5, 0.0,  0.0, 0.0, 1.0, // bottom left, blue
    -0.5,  0.5, 0.0,  0.0, 1.0, 0.0, // top left, green
];

#[rustfmt::skip]
pub const DIAMOND: [f32; 12] = [
    0.6,   0.0, 0.0, // left
    0.75,  0.4, 0.0, // top
    0.9,   0.0, 0.0, // right
    0.75, -0.4, 0.0, // bottom
];

#[rustfmt::skip]
pub const INDICES: [u32; 6] = [
    0, 1, 3,
    1, 2, 3,
];

pub const RECTANGLE_ATTRIBUTES: [Attribute; 2] = [
    Attribute { index: 0, size: 3, offset: 0 },
    Attribute { index: 1, size: 3, offset: 3 },
];

pub const DIAMOND_ATTRIBUTES: [Attribute; 1] = [Attribute { index: 0, size: 3, offset: 0 }];

/// Green channel of the diamond, pulsing between 0 and 1.
pub fn green_at(elapsed: f32) -> f32 {
    elapsed.sin() / 2.0 + 0.5
}

/// Two programs sharing a vertex shader: a per-vertex coloured rectangle and a diamond whose colour
/// comes from a uniform updated every frame.
pub struct HelloTriangle {
    vertex_colours: Shader,
    dynamic_colour: Shader,
    rectangle: Mesh,
    diamond: Mesh,
}

impl HelloTriangle {
    pub fn new(assets: &AssetConfig) -> Self {
        Self {
            vertex_colours: Shader::new(assets.shader("vshader.vs"), assets.shader("fshader.frag")),
            dynamic_colour: Shader::new(assets.shader("vshader.vs"), assets.shader("fshader1.frag")),
            rectangle: Mesh::new(&RECTANGLE, &INDICES, &RECTANGLE_ATTRIBUTES),
            diamond: Mesh::new(&DIAMOND, &INDICES, &DIAMOND_ATTRIBUTES),
        }
    }
}

impl Exercise for HelloTriangle {
    fn draw(&mut self, elapsed: f32) {
        self.vertex_colours.set_used();
        self.rectangle.draw();

        self.dynamic_colour.set_used();
        self.dynamic_colour.set_vec4("dynamic_color", [0.0, green_at(elapsed), 0.0, 1.0]);
        self.diamond.draw();
    }
}
