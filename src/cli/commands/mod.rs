//! CLI command handlers for `CgpaTracker`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod config;
pub mod record;
pub mod report;
