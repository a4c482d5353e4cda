//! A simple set of wrappers around the OpenGL API.
//!
//! Every exercise needs the same few things: a vertex array, a vertex buffer, an element buffer
//! and sometimes a texture. Each of those takes a handful of cryptic, unsafe function calls to set
//! up, and another to clean up. The types in here own the object names OpenGL hands out and delete
//! them on drop, so the exercises only have to say *what* they draw.
//!
//! Shader programs live in the `shader` crate.
//!
//! A knowledge of OpenGL is *necessary* to understand any of this. [Learn OpenGL](learnopengl) is
//! the classic set of tutorials these exercises follow, and there is
//! [a Rust port of its example code](learnopengl-rs).
//!
//! [learnopengl]: https://learnopengl.com/
//! [learnopengl-rs]: https://github.com/bwasty/learn-opengl-rs

pub mod gl_types;
pub mod texture;
