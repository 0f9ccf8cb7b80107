//! Clean command implementation

use std::fs;

use anyhow::{Context, Result};

use crate::utils::paths::{get_build_dir, project_root_or_cwd, BUILD_DIR};
use crate::utils::terminal::{print_banner, print_success};

/// Remove the entire build directory
#[derive(Debug)]
pub struct CleanCommand;

impl CleanCommand {
    /// Execute the clean command
    pub fn execute(self, _verbose: bool) -> Result<()> {
        let project_root = project_root_or_cwd()?;
        let build_dir = get_build_dir(&project_root);

        if !build_dir.is_dir() {
            println!(
                "Build directory '{}' does not exist. Nothing to clean.",
                BUILD_DIR
            );
            return Ok(());
        }

        print_banner("Cleaning Project");
        println!("Removing build directory: {}", build_dir.display());
        fs::remove_dir_all(&build_dir)
            .with_context(|| format!("Failed to remove {}", build_dir.display()))?;

        print_success("clean complete");
        Ok(())
    }
}
