//! Shared capability-based filesystem helpers for locale-faker tests.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;

/// Create a unique, empty directory under `target/locale-faker-tests`.
///
/// # Errors
///
/// Returns any filesystem errors encountered while creating the directory.
pub fn unique_temp_dir(prefix: &str) -> io::Result<Utf8PathBuf> {
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let process_id = std::process::id();
    let dir = Utf8PathBuf::from("target")
        .join("locale-faker-tests")
        .join(format!("{prefix}-{process_id}-{counter}"));
    let root = Dir::open_ambient_dir(".", ambient_authority())?;
    root.create_dir_all(&dir)?;
    Ok(dir)
}

/// Write `contents` to `relative` below `dir`, creating parent directories.
///
/// # Errors
///
/// Returns any filesystem errors encountered while writing.
pub fn write_locale_file(dir: &Utf8Path, relative: &str, contents: &str) -> io::Result<()> {
    let root = Dir::open_ambient_dir(dir, ambient_authority())?;
    if let Some(parent) = Utf8Path::new(relative)
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
    {
        root.create_dir_all(parent)?;
    }
    root.write(relative, contents)
}
