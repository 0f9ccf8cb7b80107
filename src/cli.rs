//! CLI argument parsing using clap derive macros

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::commands::{
    build::BuildCommand, clean::CleanCommand, reset_config::ResetConfigCommand,
};
use crate::config::BuildType;

/// cvbuild - CMake/Ninja build driver
///
/// Configures and compiles an OpenCV-based C++ project, remembering the
/// OpenCV install prefix and the build variant between invocations.
#[derive(Parser, Debug)]
#[command(name = "cvbuild")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Command to execute: build (default), clean, reset-config
    ///
    /// The command is matched case-insensitively. An unrecognized word
    /// prints the command list instead of failing, so this is a plain
    /// positional rather than a clap subcommand.
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    /// OpenCV install prefix handed to the configure step
    #[arg(long, env = "CVBUILD_PREFIX_PATH", value_name = "DIR")]
    pub prefix_path: Option<PathBuf>,

    /// Build variant for the configure step
    #[arg(
        long,
        env = "CVBUILD_BUILD_TYPE",
        value_enum,
        ignore_case = true,
        value_name = "VARIANT"
    )]
    pub build_type: Option<BuildType>,

    /// Number of parallel compile jobs (defaults to the logical core count)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Execute the selected command
    pub fn execute(self) -> Result<()> {
        // Set up terminal colors
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        let token = self
            .command
            .as_deref()
            .unwrap_or("build")
            .to_ascii_lowercase();

        match token.as_str() {
            "build" => BuildCommand {
                prefix_path: self.prefix_path,
                build_type: self.build_type,
                jobs: self.jobs,
            }
            .execute(self.verbose),
            "clean" => CleanCommand.execute(self.verbose),
            "reset-config" => ResetConfigCommand.execute(self.verbose),
            _ => {
                print_usage();
                Ok(())
            }
        }
    }
}

/// Print the command list for an unrecognized token
fn print_usage() {
    println!("cvbuild - CMake/Ninja build driver\n");
    println!("Usage: cvbuild [COMMAND] [OPTIONS]\n");
    println!("Commands:");
    println!("  build         Configure (if needed) and compile the project (default)");
    println!("  clean         Remove the entire build directory");
    println!("  reset-config  Remove the saved configuration file (build_config.json)");
    println!("\nRun 'cvbuild --help' for the full option list.");
}
