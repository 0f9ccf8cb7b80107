//! Error types and helpers for user-friendly error messages
//!
//! Structured failures carry an actionable hint so a missing tool or a
//! wrong invocation directory tells the operator what to do next.

use thiserror::Error;

/// Custom error types with helpful context and suggestions
#[derive(Error, Debug)]
pub enum CvbuildError {
    /// Tool/executable not found or misconfigured
    #[error("Missing tool: {tool} (required for {required_for})\n\n{hint}")]
    MissingTool {
        tool: String,
        required_for: String,
        hint: String,
    },

    /// Invalid project structure
    #[error("{message}\n\n{hint}")]
    ProjectStructure { message: String, hint: String },
}

impl CvbuildError {
    /// Create a missing tool error
    pub fn missing_tool(
        tool: impl Into<String>,
        required_for: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::MissingTool {
            tool: tool.into(),
            required_for: required_for.into(),
            hint: hint.into(),
        }
    }

    /// Create a project structure error
    pub fn project_structure(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::ProjectStructure {
            message: message.into(),
            hint: hint.into(),
        }
    }
}

/// Common error hints for missing tools
pub mod hints {
    /// Get hint for missing CMake
    pub fn cmake() -> &'static str {
        "Install CMake from https://cmake.org/ or use your package manager:\n\
         • macOS: brew install cmake\n\
         • Ubuntu: sudo apt install cmake\n\
         • Windows: winget install Kitware.CMake"
    }

    /// Get hint for missing Ninja
    pub fn ninja() -> &'static str {
        "Install Ninja from https://ninja-build.org/ or use your package manager:\n\
         • macOS: brew install ninja\n\
         • Ubuntu: sudo apt install ninja-build\n\
         • Windows: winget install Ninja-build.Ninja"
    }
}
