//! Settings shared by every exercise. All of them have defaults, so the config file is optional
//! and may leave out anything it doesn't care about:
//!
//! ```toml
//! [window]
//! title = "Learning OpenGL"
//! width = 800
//! height = 600
//! clear_color = [0.2, 0.3, 0.3, 1.0]
//!
//! [assets]
//! shader_dir = "./shader"
//! image_dir = "./res/img"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub assets: AssetConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_color: [f32; 4],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("Learning OpenGL"),
            width: 800,
            height: 600,
            clear_color: [0.2, 0.3, 0.3, 1.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub shader_dir: PathBuf,
    pub image_dir: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            shader_dir: PathBuf::from("./shader"),
            image_dir: PathBuf::from("./res/img"),
        }
    }
}

impl AssetConfig {
    pub fn shader(&self, name: &str) -> PathBuf {
        self.shader_dir.join(name)
    }

    pub fn image(&self, name: &str) -> PathBuf {
        self.image_dir.join(name)
    }
}

impl Config {
    /// Loads `path` if there is one, otherwise hands back the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p,
            None => return Ok(Self::default()),
        };

        let src = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&src).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
