use std::fs;
use std::path::Path;

use log::{debug, error};

use crate::driver::{Driver, GlDriver, Handle, Stage};
use crate::error::ShaderError;

/// A linked vertex + fragment shader program.
///
/// There are two ways to build one. The lenient constructors ([`Shader::new`],
/// [`Shader::from_source`] and their `_with` counterparts) never fail: an unreadable file, a
/// stage that doesn't compile, or a program that doesn't link is logged and construction carries
/// on with whatever handle the driver gave back. Drawing with such a program just draws nothing.
/// The `try_` constructors stop at the first problem instead, clean up after themselves and hand
/// back a [`ShaderError`].
///
/// Either way the per-stage shader objects are deleted as soon as linking has been attempted, and
/// the program itself is deleted when the `Shader` is dropped.
pub struct Shader<D: Driver = GlDriver> {
    id: Handle,
    driver: D,
}

impl Shader {
    /// Reads, compiles and links the two shader files, logging anything that goes wrong.
    pub fn new(vertex_path: impl AsRef<Path>, fragment_path: impl AsRef<Path>) -> Self {
        Self::load_with(GlDriver, vertex_path, fragment_path)
    }

    pub fn from_source(vertex_source: &str, fragment_source: &str) -> Self {
        Self::compile_with(GlDriver, vertex_source, fragment_source)
    }

    pub fn try_new(
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self, ShaderError> {
        Self::try_load_with(GlDriver, vertex_path, fragment_path)
    }

    pub fn try_from_source(vertex_source: &str, fragment_source: &str) -> Result<Self, ShaderError> {
        Self::try_compile_with(GlDriver, vertex_source, fragment_source)
    }
}

impl<D: Driver> Shader<D> {
    pub fn load_with(
        driver: D,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Self {
        let source = read_or_empty(vertex_path.as_ref());
        let vertex = compile_or_log(&driver, Stage::Vertex, &source);

        let source = read_or_empty(fragment_path.as_ref());
        let fragment = compile_or_log(&driver, Stage::Fragment, &source);

        Self::link_or_log(driver, vertex, fragment)
    }

    pub fn compile_with(driver: D, vertex_source: &str, fragment_source: &str) -> Self {
        let vertex = compile_or_log(&driver, Stage::Vertex, vertex_source);
        let fragment = compile_or_log(&driver, Stage::Fragment, fragment_source);

        Self::link_or_log(driver, vertex, fragment)
    }

    /// Both files are read before the driver is touched, so a missing file creates no objects.
    pub fn try_load_with(
        driver: D,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self, ShaderError> {
        let vertex_source = read_source(vertex_path.as_ref())?;
        let fragment_source = read_source(fragment_path.as_ref())?;

        Self::try_compile_with(driver, &vertex_source, &fragment_source)
    }

    pub fn try_compile_with(
        driver: D,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, ShaderError> {
        let vertex = compile(&driver, Stage::Vertex, vertex_source).map_err(|(id, e)| {
            driver.delete_shader(id);
            e
        })?;

        let fragment = compile(&driver, Stage::Fragment, fragment_source).map_err(|(id, e)| {
            driver.delete_shader(id);
            driver.delete_shader(vertex);
            e
        })?;

        let (id, linked) = link(&driver, vertex, fragment);
        match linked {
            Ok(()) => Ok(Self { id, driver }),
            Err(e) => {
                driver.delete_program(id);
                Err(e)
            }
        }
    }

    fn link_or_log(driver: D, vertex: Handle, fragment: Handle) -> Self {
        let (id, linked) = link(&driver, vertex, fragment);
        if let Err(e) = linked {
            error!("{}", e);
        }

        Self { id, driver }
    }

    /// The program's handle, whether or not it linked.
    pub fn program(&self) -> Handle {
        self.id
    }

    /// Makes this the program subsequent draw calls run.
    pub fn set_used(&self) {
        self.driver.use_program(self.id);
    }

    // Uniform uploads go to whichever program is bound, so these need `set_used` first

    pub fn set_float(&self, name: &str, value: f32) {
        let location = self.driver.uniform_location(self.id, name);
        self.driver.uniform_1f(location, value);
    }

    pub fn set_int(&self, name: &str, value: i32) {
        let location = self.driver.uniform_location(self.id, name);
        self.driver.uniform_1i(location, value);
    }

    pub fn set_vec4(&self, name: &str, value: [f32; 4]) {
        let location = self.driver.uniform_location(self.id, name);
        self.driver.uniform_4f(location, value);
    }
}

impl<D: Driver> Drop for Shader<D> {
    fn drop(&mut self) {
        if self.id != 0 {
            self.driver.delete_program(self.id);
        }
    }
}

fn read_source(path: &Path) -> Result<String, ShaderError> {
    fs::read_to_string(path).map_err(|source| ShaderError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_or_empty(path: &Path) -> String {
    read_source(path).unwrap_or_else(|e| {
        error!("{}", e);
        String::new()
    })
}

/// On failure the shader object is handed back with the error so the caller decides its fate.
fn compile<D: Driver>(
    driver: &D,
    stage: Stage,
    source: &str,
) -> Result<Handle, (Handle, ShaderError)> {
    let id = driver.create_shader(stage);
    driver.compile_shader(id, source);

    if driver.compile_status(id) {
        debug!("compiled {} shader {}", stage, id);
        Ok(id)
    } else {
        let log = driver.shader_info_log(id);
        Err((id, ShaderError::Compile { stage, log }))
    }
}

fn compile_or_log<D: Driver>(driver: &D, stage: Stage, source: &str) -> Handle {
    compile(driver, stage, source).unwrap_or_else(|(id, e)| {
        error!("{}", e);
        id
    })
}

/// Links the two stages into a new program, then deletes the stages no matter how it went.
fn link<D: Driver>(driver: &D, vertex: Handle, fragment: Handle) -> (Handle, Result<(), ShaderError>) {
    let id = driver.create_program();
    driver.attach_shader(id, vertex);
    driver.attach_shader(id, fragment);
    driver.link_program(id);

    let linked = if driver.link_status(id) {
        debug!("linked shader program {}", id);
        Ok(())
    } else {
        Err(ShaderError::Link { log: driver.program_info_log(id) })
    };

    driver.delete_shader(vertex);
    driver.delete_shader(fragment);

    (id, linked)
}
