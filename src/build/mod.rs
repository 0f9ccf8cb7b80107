//! Build pipeline orchestration
//!
//! Sequences the CMake configure step and the Ninja compile step against
//! the out-of-tree build directory. Working directories are threaded
//! explicitly through every invocation; the tool never changes its own
//! current directory.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::BuildType;
use crate::exec::{run_command, CommandResult};
use crate::utils::paths::{get_build_dir, BUILD_DIR};
use crate::utils::terminal::{print_banner, print_error};

/// Fallback job count when logical core detection fails
const DEFAULT_JOBS: usize = 4;

/// Job count for the compile step: the host's logical core count, or the
/// fixed default when detection fails.
pub fn default_jobs() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(DEFAULT_JOBS)
}

/// Everything the pipeline needs, threaded explicitly
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Project root (where CMakeLists.txt is located)
    pub project_root: PathBuf,
    /// Out-of-tree build directory
    pub build_dir: PathBuf,
    /// OpenCV install prefix for CMAKE_PREFIX_PATH
    pub prefix_path: PathBuf,
    /// Build variant for CMAKE_BUILD_TYPE
    pub build_type: BuildType,
    /// Parallel job count for the compile step
    pub jobs: usize,
}

impl BuildContext {
    /// Create a new build context
    pub fn new(
        project_root: PathBuf,
        prefix_path: PathBuf,
        build_type: BuildType,
        jobs: usize,
    ) -> Self {
        let build_dir = get_build_dir(&project_root);
        Self {
            project_root,
            build_dir,
            prefix_path,
            build_type,
            jobs,
        }
    }
}

/// Run the CMake configure step.
///
/// Creates the build directory on demand. The `..` source argument is
/// relative to the build directory, which is therefore also the working
/// directory of the invocation.
pub fn configure(ctx: &BuildContext) -> Result<CommandResult> {
    print_banner("CMake Configuration");
    println!("Source: {}", ctx.project_root.display());

    std::fs::create_dir_all(&ctx.build_dir).with_context(|| {
        format!(
            "Failed to create build directory {}",
            ctx.build_dir.display()
        )
    })?;

    let args = vec![
        "-G".to_string(),
        "Ninja".to_string(),
        "-D".to_string(),
        format!("CMAKE_BUILD_TYPE={}", ctx.build_type),
        "-D".to_string(),
        format!("CMAKE_PREFIX_PATH={}", ctx.prefix_path.display()),
        "..".to_string(),
    ];

    Ok(run_command("cmake", &args, &ctx.build_dir))
}

/// Run the Ninja compile step.
///
/// The build directory must already exist; compiling before configuring is
/// reported with guidance instead of spawning anything.
pub fn compile(ctx: &BuildContext) -> CommandResult {
    if !ctx.build_dir.is_dir() {
        print_error(&format!(
            "Build directory '{}' does not exist. Run 'cvbuild build' first.",
            BUILD_DIR
        ));
        return CommandResult::not_run();
    }

    print_banner("Ninja Compilation");
    println!("Using {} parallel jobs.", ctx.jobs);

    let args = vec!["-j".to_string(), ctx.jobs.to_string()];
    run_command("ninja", &args, &ctx.build_dir)
}
