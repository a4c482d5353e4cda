use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to create an OpenGL context: {0}")]
    Creation(#[from] glutin::CreationError),

    #[error("failed to make the OpenGL context current: {0}")]
    Context(#[from] glutin::ContextError),
}
