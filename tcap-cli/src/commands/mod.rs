//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific mode.

/// Appends the still to a video (pair and explicit modes).
pub mod append;

/// Prints version and environment details.
pub mod info;
