//! An in-memory stand-in for the graphics driver, plus a logger that records what was logged on
//! the current thread. Test-only.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::driver::{Driver, Handle, Stage};

#[derive(Debug)]
pub struct FakeShader {
    pub stage: Stage,
    pub compiled: bool,
    pub log: String,
    pub source: String,
    pub deletions: u32,
}

#[derive(Debug, Default)]
pub struct FakeProgram {
    pub attached: Vec<Handle>,
    pub linked: bool,
    pub log: String,
    pub uniforms: Vec<String>,
    pub deletions: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Upload {
    Float(f32),
    Int(i32),
    Vec4([f32; 4]),
}

#[derive(Debug, Default)]
pub struct State {
    next: Handle,
    pub shaders: HashMap<Handle, FakeShader>,
    pub programs: HashMap<Handle, FakeProgram>,
    pub bound: Handle,
    /// (program bound at the time, location, value)
    pub uploads: Vec<(Handle, i32, Upload)>,
    /// Errors a real driver would raise through glGetError
    pub errors: Vec<String>,
}

impl State {
    fn issue(&mut self) -> Handle {
        self.next += 1;
        self.next
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeDriver(Rc<RefCell<State>>);

impl FakeDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> std::cell::Ref<'_, State> {
        self.0.borrow()
    }

    pub fn live_shaders(&self) -> usize {
        self.state().shaders.values().filter(|s| s.deletions == 0).count()
    }

    pub fn live_programs(&self) -> usize {
        self.state().programs.values().filter(|p| p.deletions == 0).count()
    }
}

/// A very rough GLSL checker: every statement line has to end in `;`, a brace, or be a function
/// header, and there has to be a `main`.
fn check_source(source: &str) -> Result<(), String> {
    if source.trim().is_empty() {
        return Err("0:1: error: empty shader source".to_string());
    }

    let mut depth = 0i32;
    for (n, line) in source.lines().enumerate() {
        let line = line.trim();
        depth += line.matches('{').count() as i32;
        depth -= line.matches('}').count() as i32;

        let ok = line.is_empty()
            || line.starts_with('#')
            || line.starts_with("//")
            || line.ends_with(';')
            || line.ends_with('{')
            || line.ends_with('}')
            || (line.starts_with("void ") && line.ends_with(')'));

        if !ok {
            return Err(format!("0:{}: error: syntax error, expected ';'", n + 1));
        }
    }

    if depth != 0 {
        return Err("0:0: error: unbalanced braces".to_string());
    }

    if !source.contains("void main") {
        return Err("0:0: error: missing main function".to_string());
    }

    Ok(())
}

fn uniform_names(source: &str) -> Vec<String> {
    source
        .lines()
        .map(str::trim)
        .filter(|l| l.starts_with("uniform "))
        .filter_map(|l| l.trim_end_matches(';').split_whitespace().last())
        .map(String::from)
        .collect()
}

fn declarations<'a>(source: &'a str, qualifier: &str) -> Vec<&'a str> {
    source
        .lines()
        .map(str::trim)
        .filter(|l| l.split_whitespace().next() == Some(qualifier))
        .filter_map(|l| l.trim_end_matches(';').split_whitespace().last())
        .collect()
}

fn unmatched_input(stages: &[&FakeShader]) -> Option<String> {
    let outputs: Vec<&str> = stages
        .iter()
        .filter(|s| s.stage == Stage::Vertex)
        .flat_map(|s| declarations(&s.source, "out"))
        .collect();

    stages
        .iter()
        .filter(|s| s.stage == Stage::Fragment)
        .flat_map(|s| declarations(&s.source, "in"))
        .find(|input| !outputs.contains(input))
        .map(String::from)
}

impl Driver for FakeDriver {
    fn create_shader(&self, stage: Stage) -> Handle {
        let mut state = self.0.borrow_mut();
        let id = state.issue();
        state.shaders.insert(id, FakeShader {
            stage,
            compiled: false,
            log: String::new(),
            source: String::new(),
            deletions: 0,
        });
        id
    }

    fn compile_shader(&self, shader: Handle, source: &str) {
        if let Some(s) = self.0.borrow_mut().shaders.get_mut(&shader) {
            s.source = source.to_string();
            match check_source(source) {
                Ok(()) => s.compiled = true,
                Err(log) => {
                    s.compiled = false;
                    s.log = log;
                }
            }
        }
    }

    fn compile_status(&self, shader: Handle) -> bool {
        self.state().shaders.get(&shader).map_or(false, |s| s.compiled)
    }

    fn shader_info_log(&self, shader: Handle) -> String {
        self.state().shaders.get(&shader).map(|s| s.log.clone()).unwrap_or_default()
    }

    fn delete_shader(&self, shader: Handle) {
        if let Some(s) = self.0.borrow_mut().shaders.get_mut(&shader) {
            s.deletions += 1;
        }
    }

    fn create_program(&self) -> Handle {
        let mut state = self.0.borrow_mut();
        let id = state.issue();
        state.programs.insert(id, FakeProgram::default());
        id
    }

    fn attach_shader(&self, program: Handle, shader: Handle) {
        if let Some(p) = self.0.borrow_mut().programs.get_mut(&program) {
            p.attached.push(shader);
        }
    }

    fn link_program(&self, program: Handle) {
        let mut state = self.0.borrow_mut();
        let State { shaders, programs, .. } = &mut *state;
        let p = match programs.get_mut(&program) {
            Some(p) => p,
            None => return,
        };

        let stages: Vec<&FakeShader> = p.attached.iter().filter_map(|id| shaders.get(id)).collect();
        let has = |stage: Stage| stages.iter().any(|s| s.stage == stage);

        p.linked = false;
        if stages.iter().any(|s| !s.compiled) {
            p.log = "error: attached shader was not compiled successfully".to_string();
        } else if !has(Stage::Vertex) || !has(Stage::Fragment) {
            p.log = "error: program needs a vertex and a fragment shader".to_string();
        } else if let Some(name) = unmatched_input(&stages) {
            p.log = format!("error: fragment shader input `{}` has no matching vertex output", name);
        } else {
            p.linked = true;
            p.log.clear();
            p.uniforms = stages.iter().flat_map(|s| uniform_names(&s.source)).collect();
        }
    }

    fn link_status(&self, program: Handle) -> bool {
        self.state().programs.get(&program).map_or(false, |p| p.linked)
    }

    fn program_info_log(&self, program: Handle) -> String {
        self.state().programs.get(&program).map(|p| p.log.clone()).unwrap_or_default()
    }

    fn use_program(&self, program: Handle) {
        let mut state = self.0.borrow_mut();
        let linked = state.programs.get(&program).map_or(false, |p| p.linked && p.deletions == 0);
        if program != 0 && !linked {
            state.errors.push(format!("GL_INVALID_OPERATION: program {} is not linked", program));
        }
        state.bound = program;
    }

    fn delete_program(&self, program: Handle) {
        // A bound program stays bound after deletion, as in GL
        if let Some(p) = self.0.borrow_mut().programs.get_mut(&program) {
            p.deletions += 1;
        }
    }

    fn uniform_location(&self, program: Handle, name: &str) -> i32 {
        self.state()
            .programs
            .get(&program)
            .and_then(|p| p.uniforms.iter().position(|u| u == name))
            .map_or(-1, |i| i as i32)
    }

    fn uniform_1f(&self, location: i32, value: f32) {
        self.upload(location, Upload::Float(value));
    }

    fn uniform_1i(&self, location: i32, value: i32) {
        self.upload(location, Upload::Int(value));
    }

    fn uniform_4f(&self, location: i32, value: [f32; 4]) {
        self.upload(location, Upload::Vec4(value));
    }
}

impl FakeDriver {
    fn upload(&self, location: i32, value: Upload) {
        // Location -1 is silently ignored, like the real thing
        if location < 0 {
            return;
        }
        let mut state = self.0.borrow_mut();
        let bound = state.bound;
        state.uploads.push((bound, location, value));
    }
}

thread_local! {
    static CAPTURED: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.with(|c| c.borrow_mut().push((record.level(), record.args().to_string())));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Installs the capturing logger (once per process) and clears this thread's record.
pub fn capture_logs() {
    INIT.call_once(|| {
        // Another logger may already be installed if tests share the process with one
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });
    CAPTURED.with(|c| c.borrow_mut().clear());
}

pub fn logged_errors() -> Vec<String> {
    CAPTURED.with(|c| {
        c.borrow()
            .iter()
            .filter(|(level, _)| *level == Level::Error)
            .map(|(_, msg)| msg.clone())
            .collect()
    })
}
