//! Core module for the record tracker

pub mod config;
pub mod models;
pub mod record;
pub mod store;

/// Returns the current version of the `CgpaTracker` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
