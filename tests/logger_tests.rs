//! Integration tests for logger behavior.

use cgpa_tracker::logger::{set_level, set_level_from_str, Level};
use cgpa_tracker::{debug, error, info, warn};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[cfg(feature = "log-debug")]
#[test]
fn debug_respects_runtime_flag() {
    use cgpa_tracker::logger::{disable_debug, enable_debug, is_debug_enabled};

    set_level(Level::Debug);
    disable_debug();
    assert!(!is_debug_enabled());
    debug!("should be silent");

    enable_debug();
    assert!(is_debug_enabled());
    debug!("should emit");
}

#[cfg(feature = "verbose")]
#[test]
fn verbose_respects_runtime_flag() {
    use cgpa_tracker::logger::{disable_verbose, enable_verbose, is_verbose_enabled};
    use cgpa_tracker::verbose;

    // Verbose is off by default
    verbose!("This should not appear");

    enable_verbose();
    assert!(is_verbose_enabled());
    verbose!("This should appear: verbose test {}", 42);

    disable_verbose();
    assert!(!is_verbose_enabled());
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_captures_messages() {
    use cgpa_tracker::logger::init_file_logging;
    use std::fs;
    use tempfile::TempDir;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_path = temp_dir.path().join("tracker.log");

    assert!(init_file_logging(&log_path));
    set_level(Level::Warn);
    warn!("file warning message");
    error!("file error message");

    let contents = fs::read_to_string(&log_path).expect("Failed to read log file");
    assert!(contents.contains("[WARN] file warning message"));
    assert!(contents.contains("[ERROR] file error message"));
}
