use std::ffi::c_void;
use std::path::Path;

use gl;
use image::RgbImage;
use log::error;

/// "Texture" is the OpenGL term for an image passed to the graphics pipeline. The fragment shader
/// samples it through a `sampler2D` uniform that holds the texture unit it's bound to.
pub struct Texture {
    id: u32,
}

impl Texture {
    pub fn id(&self) -> u32 { self.id }

    /// Loads the image at `path` as RGB. An image that can't be loaded is logged and replaced with
    /// [`placeholder`] so the exercise still has something to sample.
    pub fn load(path: &Path) -> Self {
        let pixels = match image::open(path) {
            Ok(img) => img.to_rgb8(),
            Err(e) => {
                error!("failed to load texture {}: {}", path.display(), e);
                placeholder()
            }
        };

        Self::from_rgb(&pixels)
    }

    pub fn from_rgb(pixels: &RgbImage) -> Self {
        let mut id = 0u32;
        let (width, height) = pixels.dimensions();
        unsafe {
            gl::GenTextures(1, &mut id);
            gl::BindTexture(gl::TEXTURE_2D, id);

            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::REPEAT as i32);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::REPEAT as i32);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::NEAREST as i32);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::NEAREST as i32);

            // Rows of RGB8 aren't necessarily a multiple of 4 bytes long
            gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                gl::RGB as i32,
                width as i32,
                height as i32,
                0,
                gl::RGB,
                gl::UNSIGNED_BYTE,
                pixels.as_raw().as_ptr() as *const c_void
            );
            gl::GenerateMipmap(gl::TEXTURE_2D);

            gl::BindTexture(gl::TEXTURE_2D, 0);
        }

        Texture { id }
    }

    /// Binds to texture unit `unit` (0 for `GL_TEXTURE0` and so on).
    pub fn bind_to_unit(&self, unit: u32) {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + unit);
            gl::BindTexture(gl::TEXTURE_2D, self.id);
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe { gl::DeleteTextures(1, &self.id) };
    }
}

/// A 2x2 magenta and black checkerboard.
pub fn placeholder() -> RgbImage {
    RgbImage::from_fn(2, 2, |x, y| {
        if (x + y) % 2 == 0 {
            image::Rgb([255, 0, 255])
        } else {
            image::Rgb([0, 0, 0])
        }
    })
}
