//! Utility modules for file operations and path handling.
//!
//! # Modules
//!
//! - [`files`]: Async file discovery and reading utilities
//! - [`paths`]: Path resolution helpers (marker search, tilde expansion)

pub mod files;
pub mod paths;
