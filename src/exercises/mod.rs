//! The exercises themselves. Each one builds its GPU resources up front (a context has to be
//! current by then) and then draws one frame per call to [`Exercise::draw`].

pub mod hello_triangle;
pub mod offset;
pub mod quads;
pub mod texture_mix;

use std::str::FromStr;

use glutin::event::VirtualKeyCode;

use crate::config::AssetConfig;

pub trait Exercise {
    /// `elapsed` is the time in seconds since the window opened.
    fn draw(&mut self, elapsed: f32);

    fn key_pressed(&mut self, _key: VirtualKeyCode) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseKind {
    Quads,
    HelloTriangle,
    Offset,
    TextureMix,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 4] = [
        ExerciseKind::Quads,
        ExerciseKind::HelloTriangle,
        ExerciseKind::Offset,
        ExerciseKind::TextureMix,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ExerciseKind::Quads => "quads",
            ExerciseKind::HelloTriangle => "hello-triangle",
            ExerciseKind::Offset => "offset",
            ExerciseKind::TextureMix => "texture-mix",
        }
    }

    /// Needs a current context with the GL functions loaded.
    pub fn build(self, assets: &AssetConfig) -> Box<dyn Exercise> {
        match self {
            ExerciseKind::Quads => Box::new(quads::Quads::new()),
            ExerciseKind::HelloTriangle => Box::new(hello_triangle::HelloTriangle::new(assets)),
            ExerciseKind::Offset => Box::new(offset::Offset::new(assets)),
            ExerciseKind::TextureMix => Box::new(texture_mix::TextureMix::new(assets)),
        }
    }
}

impl FromStr for ExerciseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown exercise \"{}\"", s))
    }
}

/// How many whole vertices of `stride` floats are in `vertices`.
pub fn vertex_count(vertices: &[f32], stride: usize) -> usize {
    vertices.len() / stride
}
