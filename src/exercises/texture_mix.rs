use glutin::event::VirtualKeyCode;
use log::info;
use shader::Shader;

use super::Exercise;
use crate::config::AssetConfig;
use crate::graphics::gl_types::{Attribute, Mesh};
use crate::graphics::texture::Texture;

#[rustfmt::skip]
pub const VERTICES: [f32; 32] = [
    // position       colour          uv
     0.5,  0.5, 0.0,  1.0, 0.0, 0.0,  1.0, 1.0, // top right
     0.5, -0.5, 0.0,  0.0, 1.0, 0.0,  1.0, 0.0, // bottom right
    -0.5, -0.5, 0.0,  0.0, 0.0, 1.0,  0.0, 0.0, // bottom left
    -0.5,  0.5, 0.0,  1.0, 1.0, 0.0,  0.0, 1.0, // top left
];

#[rustfmt::skip]
pub const INDICES: [u32; 6] = [
    0, 1, 3,
    1, 2, 3,
];

pub const ATTRIBUTES: [Attribute; 3] = [
    Attribute { index: 0, size: 3, offset: 0 },
    Attribute { index: 1, size: 3, offset: 3 },
    Attribute { index: 2, size: 2, offset: 6 },
];

/// How much of the second texture shows through the first, always within 0..=1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixRatio(f32);

impl MixRatio {
    pub const STEP: f32 = 0.1;

    pub fn new(ratio: f32) -> Self {
        MixRatio(ratio.max(0.0).min(1.0))
    }

    pub fn get(self) -> f32 { self.0 }

    pub fn raise(&mut self) {
        *self = Self::new(self.0 + Self::STEP);
    }

    pub fn lower(&mut self) {
        *self = Self::new(self.0 - Self::STEP);
    }
}

impl Default for MixRatio {
    fn default() -> Self {
        MixRatio(0.2)
    }
}

/// A quad sampling two textures at once and blending them by [`MixRatio`]. Up and Down change the
/// blend.
pub struct TextureMix {
    shader: Shader,
    mesh: Mesh,
    container: Texture,
    face: Texture,
    mix_ratio: MixRatio,
}

impl TextureMix {
    pub fn new(assets: &AssetConfig) -> Self {
        let shader = Shader::new(assets.shader("texture.vs"), assets.shader("texture.frag"));
        let mesh = Mesh::new(&VERTICES, &INDICES, &ATTRIBUTES);

        info!("Loading textures");
        let container = Texture::load(&assets.image("container.jpg"));
        let face = Texture::load(&assets.image("awesomeface.png"));

        // The samplers don't change, so point them at their units once
        shader.set_used();
        shader.set_int("texture0", 0);
        shader.set_int("texture1", 1);

        Self { shader, mesh, container, face, mix_ratio: MixRatio::default() }
    }
}

impl Exercise for TextureMix {
    fn draw(&mut self, _elapsed: f32) {
        self.shader.set_used();

        self.container.bind_to_unit(0);
        self.face.bind_to_unit(1);
        self.shader.set_float("mix_ratio", self.mix_ratio.get());

        self.mesh.draw();
    }

    fn key_pressed(&mut self, key: VirtualKeyCode) {
        match key {
            VirtualKeyCode::Up => self.mix_ratio.raise(),
            VirtualKeyCode::Down => self.mix_ratio.lower(),
            _ => return,
        }
        info!("mix ratio is now {:.1}", self.mix_ratio.get());
    }
}
