// ============================================================================
// tcap-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for tcap-core
//
// Every fatal condition of a single append invocation is represented here.
// Probe degradations (duration, audio presence) are deliberately absent: they
// are logged and replaced with safe defaults instead of being raised.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use thiserror::Error;

/// Which input a missing path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Video,
    Still,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Video => write!(f, "Input video"),
            InputKind::Still => write!(f, "Thumbnail image"),
        }
    }
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("{kind} not found: {}", path.display())]
    NotFound { kind: InputKind, path: PathBuf },

    #[error("Unable to read video stream metadata from {}: {reason}", path.display())]
    UnreadableStream { path: PathBuf, reason: String },

    #[error("Command failed ({status}): {command}\nSTDERR:\n{stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Failed to start command '{command}': {source}")]
    CommandStart {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed waiting for command '{command}': {source}")]
    CommandWait {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Required dependency '{0}' not found on PATH")]
    DependencyNotFound(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    OperationFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// True for the render/probe command failure family.
    #[must_use]
    pub fn is_command_failure(&self) -> bool {
        matches!(
            self,
            CoreError::CommandFailed { .. }
                | CoreError::CommandStart { .. }
                | CoreError::CommandWait { .. }
        )
    }
}

pub fn not_found_error(kind: InputKind, path: &Path) -> CoreError {
    CoreError::NotFound {
        kind,
        path: path.to_path_buf(),
    }
}

pub fn command_failed_error(
    command: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        command: command.into(),
        status,
        stderr: stderr.into(),
    }
}

pub fn command_start_error(command: impl Into<String>, source: io::Error) -> CoreError {
    CoreError::CommandStart {
        command: command.into(),
        source,
    }
}

pub fn command_wait_error(command: impl Into<String>, source: io::Error) -> CoreError {
    CoreError::CommandWait {
        command: command.into(),
        source,
    }
}
