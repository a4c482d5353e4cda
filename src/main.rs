#[macro_use] extern crate clap;

pub mod config;
pub mod error;
pub mod exercises;
pub mod graphics;
pub mod interface;

use std::process;

use log::error;

use config::Config;
use error::AppError;
use interface::cli::{self, Options};

fn run(options: Options) -> Result<(), AppError> {
    let mut config = Config::load(options.config.as_deref())?;
    options.apply(&mut config);

    interface::window::run(config, options.exercise)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match cli::parse(std::env::args_os()) {
        Ok(options) => options,
        Err(e) => e.exit(),
    };

    if let Err(e) = run(options) {
        error!("{}", e);
        process::exit(1);
    }
}
