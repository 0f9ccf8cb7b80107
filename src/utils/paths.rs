//! Path utilities for the cvbuild CLI

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::CvbuildError;
use crate::utils::terminal::print_warning;

/// Marker file that identifies the project root
pub const PROJECT_MANIFEST: &str = "CMakeLists.txt";

/// Name of the out-of-tree build directory under the project root
pub const BUILD_DIR: &str = "build";

/// Find the project root by looking for CMakeLists.txt
pub fn find_project_root() -> Result<PathBuf> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    find_project_root_from(&current_dir)
}

/// Find the project root starting from a specific directory
pub fn find_project_root_from(start: &Path) -> Result<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join(PROJECT_MANIFEST).exists() {
            return Ok(dir.to_path_buf());
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => {
                return Err(CvbuildError::project_structure(
                    format!(
                        "Could not find {} in {} or any parent directory",
                        PROJECT_MANIFEST,
                        start.display()
                    ),
                    "Run cvbuild from inside the C++ project you want to build.",
                )
                .into())
            }
        }
    }
}

/// Project root for the maintenance commands.
///
/// Falls back to the current directory with a warning when no
/// CMakeLists.txt is found, so `clean` and `reset-config` stay usable on a
/// partially set up tree.
pub fn project_root_or_cwd() -> Result<PathBuf> {
    if let Ok(root) = find_project_root() {
        return Ok(root);
    }

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    print_warning(&format!(
        "{} not found. May not be in a project directory, continuing in {}",
        PROJECT_MANIFEST,
        cwd.display()
    ));
    Ok(cwd)
}

/// Get the build directory for a project
pub fn get_build_dir(project_root: &Path) -> PathBuf {
    project_root.join(BUILD_DIR)
}

/// Expand a leading `~` home-directory shorthand
pub fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix('~') {
        if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') {
            if let Some(base) = directories::BaseDirs::new() {
                return base.home_dir().join(rest.trim_start_matches(['/', '\\']));
            }
        }
    }
    PathBuf::from(raw)
}

/// Resolve operator input to an absolute, normalized directory path.
///
/// Expands the home shorthand, canonicalizes, and accepts only a path that
/// exists and is a directory.
pub fn resolve_existing_dir(raw: &str) -> Result<PathBuf> {
    let expanded = expand_home(raw);
    let resolved = std::fs::canonicalize(&expanded)
        .with_context(|| format!("Directory not found at '{}'", raw))?;

    if !resolved.is_dir() {
        anyhow::bail!("'{}' is not a directory", resolved.display());
    }

    Ok(resolved)
}
