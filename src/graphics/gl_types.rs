use std::ffi::c_void;
use std::mem::size_of;
use std::ptr::null;

use gl;
// NB: I don't bother with the GL types because they're all type aliases for Rust primitives

/// Remembers how vertex attributes are laid out in the buffers bound while it was bound, so one
/// bind before a draw call restores all of it.
pub struct VertexArray {
    id: u32,
}

impl VertexArray {
    pub fn id(&self) -> u32 { self.id }

    pub fn generate() -> Self {
        let mut id = 0u32;
        unsafe { gl::GenVertexArrays(1, &mut id) };
        Self { id }
    }

    pub fn bind(&self) {
        unsafe { gl::BindVertexArray(self.id) };
    }

    pub fn unbind() {
        unsafe { gl::BindVertexArray(0) };
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe { gl::DeleteVertexArrays(1, &self.id) };
    }
}

pub enum GlBufferType {
    Array = gl::ARRAY_BUFFER as isize,
    Element = gl::ELEMENT_ARRAY_BUFFER as isize,
}

/// Vertex data on the graphics card. Vertices don't have to be spatial; here they carry positions,
/// colours and texture coordinates, interleaved.
pub struct VertexBuffer {
    id: u32,
}

impl VertexBuffer {
    pub fn id(&self) -> u32 { self.id }

    pub fn init(data: &[f32]) -> Self {
        let vbo = Self::generate();
        vbo.bind();
        unsafe {
            gl::BufferData(
                gl::ARRAY_BUFFER,
                (data.len() * size_of::<f32>()) as isize,
                data.as_ptr() as *const c_void,
                gl::STATIC_DRAW
            );
        }

        vbo
    }

    pub fn generate() -> Self {
        let mut vbo = 0u32;
        unsafe { gl::GenBuffers(1, &mut vbo) };
        Self { id: vbo }
    }

    pub fn bind(&self) {
        unsafe { gl::BindBuffer(gl::ARRAY_BUFFER, self.id) };
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe { gl::DeleteBuffers(1, &self.id) };
    }
}

/// A list of vertex indices, so vertices shared between triangles only get sent once. The element
/// buffer binding is part of the vertex array state, so init this while the vertex array is bound.
pub struct ElementBuffer {
    id: u32,
    len: usize,
}

impl ElementBuffer {
    pub fn id(&self) -> u32 { self.id }

    /// How many indices were uploaded, which is what a draw call over the whole buffer wants.
    pub fn len(&self) -> usize { self.len }

    pub fn init(data: &[u32]) -> Self {
        let mut ebo = Self::generate();
        ebo.bind();
        unsafe {
            gl::BufferData(
                gl::ELEMENT_ARRAY_BUFFER,
                (data.len() * size_of::<u32>()) as isize,
                data.as_ptr() as *const c_void,
                gl::STATIC_DRAW
            );
        }
        ebo.len = data.len();

        ebo
    }

    pub fn generate() -> Self {
        let mut ebo = 0u32;
        unsafe { gl::GenBuffers(1, &mut ebo) };
        Self { id: ebo, len: 0 }
    }

    pub fn bind(&self) {
        unsafe { gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, self.id) };
    }
}

impl Drop for ElementBuffer {
    fn drop(&mut self) {
        unsafe { gl::DeleteBuffers(1, &self.id) };
    }
}

pub fn unbind_buffers(buffer_type: GlBufferType) {
    unsafe { gl::BindBuffer(buffer_type as u32, 0) };
}

/// Where an attribute sits inside one interleaved vertex, counted in floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attribute {
    pub index: u32,
    pub size: i32,
    pub offset: usize,
}

/// Describes every attribute of the currently bound vertex buffer and enables them. The stride is
/// the sum of the attribute sizes.
pub fn set_vertex_attribs(attributes: &[Attribute]) {
    let stride = stride_of(attributes);
    for attr in attributes {
        set_vertex_attrib(attr.index, attr.offset, attr.size, stride);
    }
}

pub fn stride_of(attributes: &[Attribute]) -> usize {
    attributes.iter().map(|a| a.size as usize).sum()
}

pub fn set_vertex_attrib(index: u32, offset: usize, size: i32, stride: usize) {
    unsafe {
        gl::VertexAttribPointer(
            index,
            size,
            gl::FLOAT,
            gl::FALSE,
            (stride * size_of::<f32>()) as i32,
            (offset * size_of::<f32>()) as *const c_void
        );
        gl::EnableVertexAttribArray(index);
    }
}

/// Draws `count` indices from the element buffer of the bound vertex array as triangles.
pub fn draw_elements(count: usize) {
    unsafe {
        gl::DrawElements(gl::TRIANGLES, count as i32, gl::UNSIGNED_INT, null());
    }
}

pub fn clear([r, g, b, a]: [f32; 4]) {
    unsafe {
        gl::ClearColor(r, g, b, a);
        gl::Clear(gl::COLOR_BUFFER_BIT);
    }
}

pub fn set_viewport(width: u32, height: u32) {
    unsafe { gl::Viewport(0, 0, width as i32, height as i32) };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonMode {
    Line = gl::LINE as isize,
    Fill = gl::FILL as isize,
}

impl PolygonMode {
    pub fn apply(self) {
        unsafe { gl::PolygonMode(gl::FRONT_AND_BACK, self as u32) };
    }
}

/// A vertex array, its vertex buffer and its element buffer, set up in the order GL wants.
pub struct Mesh {
    vao: VertexArray,
    _vbo: VertexBuffer,
    ebo: ElementBuffer,
}

impl Mesh {
    pub fn new(vertices: &[f32], indices: &[u32], attributes: &[Attribute]) -> Self {
        let vao = VertexArray::generate();
        vao.bind();

        let vbo = VertexBuffer::init(vertices);
        let ebo = ElementBuffer::init(indices);
        set_vertex_attribs(attributes);

        // The element buffer has to stay bound until the vertex array is unbound
        unbind_buffers(GlBufferType::Array);
        VertexArray::unbind();

        Self { vao, _vbo: vbo, ebo }
    }

    pub fn draw(&self) {
        self.vao.bind();
        draw_elements(self.ebo.len());
        VertexArray::unbind();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stride_is_the_sum_of_attribute_sizes() {
        let attributes = [
            Attribute { index: 0, size: 3, offset: 0 },
            Attribute { index: 1, size: 3, offset: 3 },
            Attribute { index: 2, size: 2, offset: 6 },
        ];

        assert_eq!(stride_of(&attributes), 8);
        assert_eq!(stride_of(&attributes[..1]), 3);
    }
}
