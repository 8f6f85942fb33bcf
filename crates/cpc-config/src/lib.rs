//! Configuration for the cpc translator.
//!
//! This crate loads and saves `.cpc/config.yaml`, discovers the `.cpc/`
//! directory by walking up the filesystem, and exposes the typed settings
//! the command-line tool applies (output mode, colors, verb heuristic
//! extensions and default meanings).

pub mod config;
pub mod cpc_dir;
