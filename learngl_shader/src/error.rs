use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::driver::Stage;

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("failed to read shader file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("{stage} shader failed to compile:\n{log}")]
    Compile { stage: Stage, log: String },

    #[error("shader program failed to link:\n{log}")]
    Link { log: String },
}
