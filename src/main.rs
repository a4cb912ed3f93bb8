//! Standalone viewer: drag to rotate the box, scroll or pinch to zoom.
//!
//! Usage: `tumble [OPTIONS_TOML]`. With a preset, F5 re-reads it.

use std::path::PathBuf;
use std::process::ExitCode;

use tumble::options::Options;
use tumble::viewer::Viewer;

fn main() -> ExitCode {
    env_logger::init();

    let mut builder = Viewer::builder();
    if let Some(path) = std::env::args().nth(1).map(PathBuf::from) {
        match Options::load(&path) {
            Ok(options) => builder = builder.with_options(options),
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        }
        builder = builder.with_preset(path);
    }

    match builder.build().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
