//! Base directory for test temp dirs
//!
//! `TMPDIR` may be relative (`TMPDIR=tmp`); temp dirs must never land inside
//! a project tree that a packaging test then mirrors or erases.

use std::env;
use std::path::PathBuf;

/// Absolute directory to create temp dirs in
pub fn temp_dir_base() -> PathBuf {
    let dir = env::temp_dir();
    if dir.is_absolute() {
        return dir;
    }
    if cfg!(windows) {
        env::var_os("TEMP")
            .or_else(|| env::var_os("TMP"))
            .map_or_else(|| PathBuf::from(r"C:\Windows\Temp"), PathBuf::from)
    } else {
        PathBuf::from("/tmp")
    }
}
