//! Resolution of the two configuration values
//!
//! Flags and environment variables come first, then the stored document,
//! then an interactive prompt. The prompt reads from any `BufRead` so the
//! flows are testable without a terminal; end of input fails the flow
//! instead of spinning, which keeps non-interactive runs bounded.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use console::style;

use crate::config::{BuildType, ConfigStore};
use crate::utils::paths::resolve_existing_dir;
use crate::utils::terminal::{print_banner, print_error};

/// Fully resolved configuration for one build invocation
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// OpenCV install prefix, absolute and validated
    pub prefix_path: PathBuf,
    /// Selected build variant
    pub build_type: BuildType,
}

/// Classify a single-letter build-variant answer.
///
/// Empty input selects Debug; anything other than d/D/r/R is rejected.
pub fn parse_choice(input: &str) -> Option<BuildType> {
    match input.trim().to_ascii_lowercase().as_str() {
        "r" => Some(BuildType::Release),
        "d" | "" => Some(BuildType::Debug),
        _ => None,
    }
}

/// Resolve the OpenCV prefix path.
///
/// A stored path that still exists as a directory is reused without
/// prompting. Otherwise the operator is asked until they provide a valid
/// directory.
pub fn resolve_prefix_path<R: BufRead>(stored: Option<&str>, input: &mut R) -> Result<PathBuf> {
    if let Some(path) = stored {
        let candidate = PathBuf::from(path);
        if candidate.is_dir() {
            println!("Using previously saved OpenCV path: {}", path);
            return Ok(candidate);
        }
    }

    print_banner("OpenCV Path Setup");
    println!("OpenCV prefix path not found or invalid.");
    println!("Enter the root installation directory of your OpenCV build.");

    loop {
        let line = prompt_line("Enter CMAKE_PREFIX_PATH: ", input)?;
        match resolve_existing_dir(line.trim()) {
            Ok(resolved) => {
                println!("Path accepted: {}", resolved.display());
                return Ok(resolved);
            }
            Err(e) => print_error(&format!("{:#}. Please try again.", e)),
        }
    }
}

/// Resolve the build variant.
///
/// A stored variant is reused unconditionally. Otherwise the operator is
/// asked, and an unrecognized answer is rejected and asked again.
pub fn resolve_build_type<R: BufRead>(
    stored: Option<BuildType>,
    input: &mut R,
) -> Result<BuildType> {
    if let Some(variant) = stored {
        print_banner("Build Configuration Type");
        println!("Saved build type found: {}", variant);
        return Ok(variant);
    }

    print_banner("Build Configuration Type");
    loop {
        let line = prompt_line("Select build type: [D]ebug, [R]elease [D]: ", input)?;
        match parse_choice(&line) {
            Some(variant) => return Ok(variant),
            None => print_error("Invalid input. Please choose 'D' for Debug or 'R' for Release."),
        }
    }
}

/// Resolve both configuration values and persist them if anything changed.
///
/// `flag_prefix` and `flag_build_type` bypass both the stored document and
/// the prompt. An explicit flag value that fails validation is a hard
/// error; there is no prompting fallback from a flag.
pub fn resolve<R: BufRead>(
    store: &ConfigStore,
    flag_prefix: Option<&Path>,
    flag_build_type: Option<BuildType>,
    input: &mut R,
) -> Result<ResolvedConfig> {
    let mut config = store.load();

    let prefix_path = match flag_prefix {
        Some(path) => resolve_existing_dir(&path.to_string_lossy())
            .context("Invalid --prefix-path value")?,
        None => resolve_prefix_path(config.prefix_path.as_deref(), input)?,
    };

    let build_type = match flag_build_type {
        Some(variant) => variant,
        None => resolve_build_type(config.build_type, input)?,
    };

    let prefix_str = prefix_path.display().to_string();
    if config.prefix_path.as_deref() != Some(prefix_str.as_str())
        || config.build_type != Some(build_type)
    {
        config.prefix_path = Some(prefix_str);
        config.build_type = Some(build_type);
        store.save(&config)?;
        println!("\nConfiguration saved.");
    }

    Ok(ResolvedConfig {
        prefix_path,
        build_type,
    })
}

fn prompt_line<R: BufRead>(prompt: &str, input: &mut R) -> Result<String> {
    print!("{}", style(prompt).cyan().bold());
    io::stdout().flush().context("Failed to flush standard output")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from standard input")?;
    if read == 0 {
        bail!(
            "Standard input closed before the build configuration was complete. \
             Pass --prefix-path and --build-type to configure non-interactively."
        );
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;
    use std::io::Cursor;

    #[test]
    fn choice_classification_table() {
        assert_eq!(parse_choice("r"), Some(BuildType::Release));
        assert_eq!(parse_choice("R"), Some(BuildType::Release));
        assert_eq!(parse_choice("d"), Some(BuildType::Debug));
        assert_eq!(parse_choice("D"), Some(BuildType::Debug));
        assert_eq!(parse_choice(""), Some(BuildType::Debug));
        assert_eq!(parse_choice("\n"), Some(BuildType::Debug));
        assert_eq!(parse_choice("x"), None);
        assert_eq!(parse_choice("release"), None);
    }

    #[test]
    fn stored_variant_is_reused_without_prompting() {
        // An empty reader would fail any prompt attempt
        let mut input = Cursor::new("");
        let variant = resolve_build_type(Some(BuildType::Release), &mut input).unwrap();
        assert_eq!(variant, BuildType::Release);
    }

    #[test]
    fn unrecognized_answers_are_asked_again() {
        let mut input = Cursor::new("x\nq\nr\n");
        assert_eq!(
            resolve_build_type(None, &mut input).unwrap(),
            BuildType::Release
        );
    }

    #[test]
    fn empty_answer_selects_debug() {
        let mut input = Cursor::new("\n");
        assert_eq!(
            resolve_build_type(None, &mut input).unwrap(),
            BuildType::Debug
        );
    }

    #[test]
    fn end_of_input_fails_instead_of_spinning() {
        let mut input = Cursor::new("x\n");
        assert!(resolve_build_type(None, &mut input).is_err());
    }

    #[test]
    fn stored_path_is_reused_when_still_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let stored = dir.path().to_string_lossy().to_string();

        let mut input = Cursor::new("");
        let resolved = resolve_prefix_path(Some(&stored), &mut input).unwrap();
        assert_eq!(resolved, dir.path());
    }

    #[test]
    fn vanished_stored_path_falls_back_to_prompting() {
        let dir = tempfile::tempdir().unwrap();
        let mut input = Cursor::new(format!("{}\n", dir.path().display()));

        let resolved = resolve_prefix_path(Some("/no/longer/there"), &mut input).unwrap();
        assert_eq!(resolved, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn non_directories_are_rejected_until_a_valid_answer() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a-file");
        std::fs::write(&file, "x").unwrap();

        let mut input = Cursor::new(format!("{}\n{}\n", file.display(), dir.path().display()));
        let resolved = resolve_prefix_path(None, &mut input).unwrap();
        assert_eq!(resolved, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn resolved_values_are_persisted() {
        let project = tempfile::tempdir().unwrap();
        let prefix = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(project.path());

        let mut input = Cursor::new(format!("{}\nr\n", prefix.path().display()));
        let resolved = resolve(&store, None, None, &mut input).unwrap();

        assert_eq!(resolved.build_type, BuildType::Release);
        let saved = store.load();
        assert_eq!(saved.build_type, Some(BuildType::Release));
        assert_eq!(
            saved.prefix_path.as_deref(),
            Some(resolved.prefix_path.display().to_string().as_str())
        );
    }

    #[test]
    fn stored_document_satisfies_resolution_without_prompting() {
        let project = tempfile::tempdir().unwrap();
        let prefix = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(project.path());
        store
            .save(&BuildConfig {
                prefix_path: Some(prefix.path().display().to_string()),
                build_type: Some(BuildType::Debug),
                extra: serde_json::Map::new(),
            })
            .unwrap();

        let mut input = Cursor::new("");
        let resolved = resolve(&store, None, None, &mut input).unwrap();
        assert_eq!(resolved.build_type, BuildType::Debug);
        assert_eq!(resolved.prefix_path, prefix.path());
    }

    #[test]
    fn flags_bypass_store_and_prompt() {
        let project = tempfile::tempdir().unwrap();
        let prefix = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(project.path());

        let mut input = Cursor::new("");
        let resolved = resolve(
            &store,
            Some(prefix.path()),
            Some(BuildType::Debug),
            &mut input,
        )
        .unwrap();

        assert_eq!(resolved.build_type, BuildType::Debug);
        assert!(store.path().exists());
    }

    #[test]
    fn invalid_prefix_flag_is_a_hard_error() {
        let project = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(project.path());

        let mut input = Cursor::new("");
        let result = resolve(
            &store,
            Some(Path::new("/definitely/not/there")),
            Some(BuildType::Debug),
            &mut input,
        );
        assert!(result.is_err());
    }
}
