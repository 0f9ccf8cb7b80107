//! cvbuild - a CMake/Ninja build driver for OpenCV-based C++ projects
//!
//! Collects the OpenCV install prefix and the build variant, persists them
//! in `build_config.json`, and drives the configure-then-compile pipeline
//! against the out-of-tree `build/` directory.
//!
//! ## Architecture
//!
//! ```text
//! CLI → commands/ → build/ pipeline → CMake/Ninja (direct)
//! ```

mod build;
mod cli;
mod commands;
mod config;
mod error;
mod exec;
mod utils;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.execute()
}
