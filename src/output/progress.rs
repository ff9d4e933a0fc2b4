//! Progress markers
//!
//! Seeding prints one line per step. Those lines go to stdout unless the
//! run summary owns stdout (JSON output), in which case they move to stderr.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

static TO_STDERR: AtomicBool = AtomicBool::new(false);

/// Send progress markers to stderr instead of stdout
pub fn progress_to_stderr(enabled: bool) {
    TO_STDERR.store(enabled, Ordering::Relaxed);
}

fn uses_stderr() -> bool {
    TO_STDERR.load(Ordering::Relaxed)
}

/// Print one progress line
pub fn progress(line: impl fmt::Display) {
    if uses_stderr() {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}
