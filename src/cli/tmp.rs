//! Temporary per-worker output files, and their purge on abnormal termination.
//!
//! Worker processes write to private files in the configured temp directory, concatenated after every worker finishes.
//! If the run ends abnormally instead --- a panic, or a child reporting failure --- the recorded files are purged before the process goes down.
//! The purge is registered, not ad hoc: a panic hook covers faults, and the coordinating path purges on any child failure.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

static TEMP_FILES: OnceLock<Mutex<Vec<PathBuf>>> = OnceLock::new();

fn registry() -> &'static Mutex<Vec<PathBuf>> {
    TEMP_FILES.get_or_init(|| Mutex::new(Vec::default()))
}

/// Records a temporary file for purging.
pub fn note_temp(path: PathBuf) {
    if let Ok(mut files) = registry().lock() {
        files.push(path);
    }
}

/// Removes every recorded temporary file.
pub fn purge_temps() {
    if let Ok(mut files) = registry().lock() {
        for path in files.drain(..) {
            let _ = std::fs::remove_file(&path);
        }
    }
}

/// Installs a panic hook which purges recorded temporary files before the default hook runs.
pub fn register_purge_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        purge_temps();
        default_hook(info);
    }));
}
