use std::ffi::OsString;
use std::path::PathBuf;

use clap::{App, ArgMatches, ErrorKind};

use crate::config::Config;
use crate::exercises::ExerciseKind;

/// What was asked for on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub config: Option<PathBuf>,
    pub shader_dir: Option<PathBuf>,
    pub image_dir: Option<PathBuf>,
    pub exercise: ExerciseKind,
}

impl Options {
    /// Directories given on the command line win over the config file.
    pub fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.shader_dir {
            config.assets.shader_dir = dir.clone();
        }
        if let Some(dir) = &self.image_dir {
            config.assets.image_dir = dir.clone();
        }
    }
}

pub fn parse<I, T>(args: I) -> clap::Result<Options>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let yaml = load_yaml!("cli.yaml");
    let matches = App::from_yaml(yaml).get_matches_from_safe(args)?;

    options_from(&matches)
}

fn options_from(matches: &ArgMatches) -> clap::Result<Options> {
    let name = matches.subcommand_name().unwrap_or_default();
    let exercise = name
        .parse::<ExerciseKind>()
        .map_err(|e| clap::Error::with_description(&e, ErrorKind::InvalidSubcommand))?;

    Ok(Options {
        config: matches.value_of_os("config").map(PathBuf::from),
        shader_dir: matches.value_of_os("shader-dir").map(PathBuf::from),
        image_dir: matches.value_of_os("image-dir").map(PathBuf::from),
        exercise,
    })
}
