//! Build command implementation
//!
//! The full flow: resolve the configuration (persisting it when it
//! changed), run the CMake configure step, then the Ninja compile step.

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::build::{self, BuildContext};
use crate::config::resolve::resolve;
use crate::config::{BuildType, ConfigStore};
use crate::utils::paths::find_project_root;
use crate::utils::terminal::{print_banner, print_info};
use crate::utils::tools::require_tool;

/// Configure (if needed) and compile the project
#[derive(Debug)]
pub struct BuildCommand {
    /// OpenCV install prefix, bypassing the stored value and the prompt
    pub prefix_path: Option<PathBuf>,
    /// Build variant, bypassing the stored value and the prompt
    pub build_type: Option<BuildType>,
    /// Parallel job count override
    pub jobs: Option<usize>,
}

impl BuildCommand {
    /// Execute the build command
    pub fn execute(self, verbose: bool) -> Result<()> {
        let project_root = find_project_root()?;

        // Both external tools must be reachable before any work starts
        let cmake = require_tool("cmake", "the configure step")?;
        let ninja = require_tool("ninja", "the compile step")?;
        if verbose {
            for tool in [&cmake, &ninja] {
                print_info(&format!("using {} at {}", tool.name, tool.path.display()));
            }
        }

        let store = ConfigStore::new(&project_root);
        let stdin = io::stdin();
        let resolved = resolve(
            &store,
            self.prefix_path.as_deref(),
            self.build_type,
            &mut stdin.lock(),
        )?;

        let jobs = self.jobs.unwrap_or_else(build::default_jobs);
        println!("\nConfiguration: {} | Jobs: {}", resolved.build_type, jobs);

        let ctx = BuildContext::new(
            project_root,
            resolved.prefix_path,
            resolved.build_type,
            jobs,
        );

        if !build::configure(&ctx)?.success {
            bail!("CMake configuration failed");
        }

        if !build::compile(&ctx).success {
            bail!("Compilation failed");
        }

        print_banner("Build Succeeded");
        println!("  Variant:   {}", ctx.build_type);
        println!("  Artifacts: {}", ctx.build_dir.display());
        Ok(())
    }
}
