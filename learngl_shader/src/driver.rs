//! The handful of OpenGL entry points a shader program needs, behind a trait.
//!
//! [`GlDriver`] forwards straight to the `gl` crate, which means a context must be current and
//! `gl::load_with` must have been called before any of its methods are used. Anything else that
//! implements [`Driver`] can stand in for the graphics card (the tests in this crate use an
//! in-memory one).

use std::ffi::CString;
use std::fmt;

use gl;
use gl::types::*;

/// An object name issued by the driver. Zero is never a live object.
pub type Handle = u32;

/// The pipeline stage a shader is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Vertex = gl::VERTEX_SHADER as isize,
    Fragment = gl::FRAGMENT_SHADER as isize,
}

impl Stage {
    pub fn gl_enum(self) -> GLenum {
        self as GLenum
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Vertex => write!(f, "vertex"),
            Stage::Fragment => write!(f, "fragment"),
        }
    }
}

pub trait Driver {
    fn create_shader(&self, stage: Stage) -> Handle;

    /// Hands `source` to the shader object and compiles it. Check the outcome with
    /// [`Driver::compile_status`].
    fn compile_shader(&self, shader: Handle, source: &str);

    fn compile_status(&self, shader: Handle) -> bool;

    fn shader_info_log(&self, shader: Handle) -> String;

    fn delete_shader(&self, shader: Handle);

    fn create_program(&self) -> Handle;

    fn attach_shader(&self, program: Handle, shader: Handle);

    fn link_program(&self, program: Handle);

    fn link_status(&self, program: Handle) -> bool;

    fn program_info_log(&self, program: Handle) -> String;

    fn use_program(&self, program: Handle);

    fn delete_program(&self, program: Handle);

    /// Returns -1 when the program has no active uniform called `name`.
    fn uniform_location(&self, program: Handle, name: &str) -> i32;

    fn uniform_1f(&self, location: i32, value: f32);

    fn uniform_1i(&self, location: i32, value: i32);

    fn uniform_4f(&self, location: i32, value: [f32; 4]);
}

/// The real thing. Zero-sized, since the `gl` crate keeps its function pointers in globals.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlDriver;

impl Driver for GlDriver {
    fn create_shader(&self, stage: Stage) -> Handle {
        unsafe { gl::CreateShader(stage.gl_enum()) }
    }

    fn compile_shader(&self, shader: Handle, source: &str) {
        // Passing the length explicitly means the source doesn't need a nul terminator
        let ptr = source.as_ptr() as *const GLchar;
        let len = source.len() as GLint;
        unsafe {
            gl::ShaderSource(shader, 1, &ptr, &len);
            gl::CompileShader(shader);
        }
    }

    fn compile_status(&self, shader: Handle) -> bool {
        let mut success = 0;
        unsafe { gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success) };
        success != 0
    }

    fn shader_info_log(&self, shader: Handle) -> String {
        let mut len = 0;
        unsafe { gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len) };

        read_info_log(len, |cap, written, buf| unsafe {
            gl::GetShaderInfoLog(shader, cap, written, buf)
        })
    }

    fn delete_shader(&self, shader: Handle) {
        unsafe { gl::DeleteShader(shader) }
    }

    fn create_program(&self) -> Handle {
        unsafe { gl::CreateProgram() }
    }

    fn attach_shader(&self, program: Handle, shader: Handle) {
        unsafe { gl::AttachShader(program, shader) }
    }

    fn link_program(&self, program: Handle) {
        unsafe { gl::LinkProgram(program) }
    }

    fn link_status(&self, program: Handle) -> bool {
        let mut success = 0;
        unsafe { gl::GetProgramiv(program, gl::LINK_STATUS, &mut success) };
        success != 0
    }

    fn program_info_log(&self, program: Handle) -> String {
        let mut len = 0;
        unsafe { gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len) };

        read_info_log(len, |cap, written, buf| unsafe {
            gl::GetProgramInfoLog(program, cap, written, buf)
        })
    }

    fn use_program(&self, program: Handle) {
        unsafe { gl::UseProgram(program) }
    }

    fn delete_program(&self, program: Handle) {
        unsafe { gl::DeleteProgram(program) }
    }

    fn uniform_location(&self, program: Handle, name: &str) -> i32 {
        match CString::new(name) {
            Ok(name) => unsafe { gl::GetUniformLocation(program, name.as_ptr()) },
            // A name with an interior nul can't name any uniform
            Err(_) => -1,
        }
    }

    fn uniform_1f(&self, location: i32, value: f32) {
        unsafe { gl::Uniform1f(location, value) }
    }

    fn uniform_1i(&self, location: i32, value: i32) {
        unsafe { gl::Uniform1i(location, value) }
    }

    fn uniform_4f(&self, location: i32, [x, y, z, w]: [f32; 4]) {
        unsafe { gl::Uniform4f(location, x, y, z, w) }
    }
}

/// Allocates a buffer of `len` bytes (the length the driver reported, nul included), lets `fill`
/// write the log into it, and trims it to what was actually written.
fn read_info_log<F>(len: GLint, fill: F) -> String
where
    F: FnOnce(GLsizei, *mut GLsizei, *mut GLchar),
{
    if len <= 0 {
        return String::new();
    }

    let mut buf: Vec<u8> = vec![0; len as usize];
    let mut written: GLsizei = 0;
    fill(len, &mut written, buf.as_mut_ptr() as *mut GLchar);

    buf.truncate(written.max(0) as usize);
    String::from_utf8_lossy(&buf).into_owned()
}
