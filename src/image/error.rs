//! Error types for external image-tool invocations.

use thiserror::Error;

/// A single external tool invocation that did not produce the output.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The binary could not be resolved on the system path.
    #[error("`{program}` was not found on the system path")]
    NotFound { program: String },

    /// The binary was found but could not be launched.
    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The binary ran and exited with a nonzero status.
    #[error("`{program}` exited with code {code}: {stderr}")]
    Failed {
        program: String,
        /// Exit code, `-1` when the process was terminated by a signal.
        code: i32,
        stderr: String,
    },
}

/// Both tiers of the export strategy failed.
///
/// Carries the preferred tool's error (from its availability probe or its
/// export attempt) alongside the fallback tool's error.
#[derive(Debug, Error)]
#[error("no tool could export the image: dism: {dism}; wimlib-imagex: {wimlib}")]
pub struct ImageError {
    pub dism: ToolError,
    pub wimlib: ToolError,
}
