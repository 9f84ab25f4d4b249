//! The `folio` command-line interface.
//!
//! # Modules
//!
//! - [`cli`]: argument types parsed by `clap`
//! - [`config`]: [`FolioConfig`], loaded from file and `FOLIO_*` env vars
//! - [`config_handlers`]: `folio config {path,get,set,init,export}`
//! - [`handlers`]: the content commands
//! - [`app`]: [`FolioCli`], logging setup and dispatch

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;
pub mod handlers;

pub use app::FolioCli;
pub use cli::{CliArgs, Command};
pub use config::FolioConfig;
