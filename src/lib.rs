//! Shared library for `CgpaTracker`
//! Contains the grade/record data model, persistence, configuration, and
//! logging used by the CLI binary

pub mod core;
pub mod logger;

pub use self::core::{config, models, record, store};
