//! Data models for `CgpaTracker`

pub mod course;
pub mod semester;

pub use course::{Course, Grade};
pub use semester::Semester;
