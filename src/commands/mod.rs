//! Command implementations for the panel-layout CLI.
//!
//! - `layout` - Layout viewing and editing (show, add, move, reset, ...)
//! - `config` - Configuration file management (init, path, validate)

pub(crate) mod config;
pub(crate) mod layout;

pub(crate) use config::*;
pub(crate) use layout::*;
