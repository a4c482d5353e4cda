//! Loading, compiling and linking GLSL shader programs.
//!
//! Everything talks to the graphics card through [`Driver`], and [`GlDriver`] is the one that
//! actually calls into OpenGL. See [`Shader`] for the two flavours of construction.

pub mod driver;
pub mod error;
pub mod program;

#[cfg(test)]
mod fake;

pub use driver::{Driver, GlDriver, Handle, Stage};
pub use error::ShaderError;
pub use program::Shader;
