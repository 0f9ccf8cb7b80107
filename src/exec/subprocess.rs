//! Synchronous subprocess execution
//!
//! Every external build-tool invocation goes through `run_command`.
//! Execution failures are converted into a `CommandResult` instead of an
//! error so callers can short-circuit the pipeline without unwinding.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use console::style;

use crate::utils::terminal::print_error;
use crate::utils::tools::get_tool_hint;

/// Result of a subprocess execution
#[derive(Debug, Clone, Copy)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code (-1 when the process did not run or was killed)
    pub exit_code: i32,
}

impl CommandResult {
    /// Result for a command that was never spawned
    pub fn not_run() -> Self {
        Self {
            success: false,
            exit_code: -1,
        }
    }
}

/// Run a command with inherited stdio in an explicit working directory.
///
/// The working directory is always passed to the child; the tool's own
/// current directory is never mutated.
pub fn run_command(program: &str, args: &[String], cwd: &Path) -> CommandResult {
    println!(
        "\n{} {}",
        style("---> Executing:").cyan().bold(),
        format_command_line(program, args)
    );

    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status();

    match status {
        Ok(status) if status.success() => CommandResult {
            success: true,
            exit_code: 0,
        },
        Ok(status) => {
            let exit_code = status.code().unwrap_or(-1);
            print_error(&format!("'{}' failed with exit code {}", program, exit_code));
            CommandResult {
                success: false,
                exit_code,
            }
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            print_error(&format!(
                "'{}' is not installed or not on your PATH",
                program
            ));
            eprintln!("{}", get_tool_hint(program));
            CommandResult::not_run()
        }
        Err(e) => {
            print_error(&format!("Failed to execute '{}': {}", program, e));
            CommandResult::not_run()
        }
    }
}

fn format_command_line(program: &str, args: &[String]) -> String {
    let mut line = String::from(program);
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}
