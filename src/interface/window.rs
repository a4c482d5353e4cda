use std::time::Instant;

use glutin::dpi::LogicalSize;
use glutin::event::{ElementState, Event, KeyboardInput, WindowEvent};
use glutin::event_loop::{ControlFlow, EventLoop};
use glutin::window::WindowBuilder;
use glutin::{Api, ContextBuilder, GlProfile, GlRequest};
use log::{debug, error, info};

use super::input::{command_for, Command};
use crate::config::Config;
use crate::error::AppError;
use crate::exercises::ExerciseKind;
use crate::graphics::gl_types::{clear, set_viewport};

/// Opens the window, builds the exercise and draws it until the window is closed.
///
/// Only returns if setting up the window or context fails; once the loop starts it owns the
/// thread until the process exits.
pub fn run(config: Config, kind: ExerciseKind) -> Result<(), AppError> {
    info!("Starting {} with an OpenGL 3.3 core context", kind.name());

    let events = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(config.window.title.as_str())
        .with_inner_size(LogicalSize::new(config.window.width as f64, config.window.height as f64))
        .with_resizable(false);

    let context = ContextBuilder::new()
        .with_gl(GlRequest::Specific(Api::OpenGl, (3, 3)))
        .with_gl_profile(GlProfile::Core)
        .build_windowed(window, &events)?;

    let context = unsafe { context.make_current() }.map_err(|(_, e)| e)?;

    gl::load_with(|s| context.get_proc_address(s) as *const std::ffi::c_void);

    let size = context.window().inner_size();
    set_viewport(size.width, size.height);

    info!("Building {}", kind.name());
    let mut exercise = Some(kind.build(&config.assets));
    let clear_color = config.window.clear_color;
    let started = Instant::now();

    events.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::Resized(size) => {
                    context.resize(size);
                    set_viewport(size.width, size.height);
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput {
                        state: ElementState::Pressed,
                        virtual_keycode: Some(key),
                        ..
                    },
                    ..
                } => {
                    debug!("Key pressed: {:?}", key);
                    match command_for(key) {
                        Command::Close => *control_flow = ControlFlow::Exit,
                        Command::Polygons(mode) => mode.apply(),
                        Command::Forward(key) => {
                            if let Some(exercise) = exercise.as_mut() {
                                exercise.key_pressed(key);
                            }
                        }
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => context.window().request_redraw(),
            Event::RedrawRequested(_) => {
                clear(clear_color);
                if let Some(exercise) = exercise.as_mut() {
                    exercise.draw(started.elapsed().as_secs_f32());
                }

                if let Err(e) = context.swap_buffers() {
                    error!("Failed to swap buffers: {}", e);
                    *control_flow = ControlFlow::Exit;
                }
            }
            // Free the GPU resources while the context still exists
            Event::LoopDestroyed => {
                exercise.take();
                info!("Done.");
            }
            _ => {}
        }
    })
}
