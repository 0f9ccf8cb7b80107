//! Tool detection and validation
//!
//! Detects the external build tools cvbuild drives and produces helpful
//! error messages when one is missing.

use std::path::PathBuf;

use anyhow::Result;
use which::which;

use crate::error::{hints, CvbuildError};

/// Tool detection result
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Tool name
    pub name: String,
    /// Path to the tool executable
    pub path: PathBuf,
}

/// Check if a tool exists on the search path
pub fn check_tool(tool_name: &str) -> Option<ToolInfo> {
    which(tool_name).ok().map(|path| ToolInfo {
        name: tool_name.to_string(),
        path,
    })
}

/// Require a tool to exist, return an error with an installation hint if missing
pub fn require_tool(tool_name: &str, required_for: &str) -> Result<ToolInfo> {
    match check_tool(tool_name) {
        Some(info) => Ok(info),
        None => Err(CvbuildError::missing_tool(
            tool_name,
            required_for,
            get_tool_hint(tool_name),
        )
        .into()),
    }
}

/// Get installation hint for a tool
pub fn get_tool_hint(tool_name: &str) -> &'static str {
    match tool_name {
        "cmake" => hints::cmake(),
        "ninja" => hints::ninja(),
        _ => "Install this tool and ensure it's in your PATH",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_a_shell() {
        // sh exists on any system the test suite runs on
        let info = check_tool("sh").expect("sh should be on PATH");
        assert_eq!(info.name, "sh");
        assert!(info.path.is_absolute());
    }

    #[test]
    fn missing_tool_carries_a_hint() {
        let err = require_tool("definitely-not-a-real-tool", "testing").unwrap_err();
        assert!(err.to_string().contains("definitely-not-a-real-tool"));
    }
}
