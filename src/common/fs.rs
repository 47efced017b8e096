//! Common file system operations with unified error handling
//!
//! Erasing and mirroring directory trees for bundle assembly.

use std::fs;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;
use crate::error::fs::{copy_error, erase_error, install_error};

/// Options for [`erase_tree`]
#[derive(Debug, Default, Clone)]
pub struct EraseOptions {
    /// Top-level entry names left in place
    pub keep: Vec<String>,
}

impl EraseOptions {
    pub fn keep(names: &[&str]) -> Self {
        Self {
            keep: names.iter().map(|name| (*name).to_string()).collect(),
        }
    }

    fn keeps(&self, name: &std::ffi::OsStr) -> bool {
        name.to_str()
            .is_some_and(|name| self.keep.iter().any(|kept| kept == name))
    }
}

/// Delete everything beneath `root`, children before parents
///
/// `root` itself stays in place. A missing `root` is a no-op. The first
/// failure aborts the walk, possibly leaving the tree partially erased.
pub fn erase_tree(root: &Path, options: &EraseOptions) -> Result<usize> {
    if !root.exists() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(root).map_err(|e| erase_error(root, e))? {
        let entry = entry.map_err(|e| erase_error(root, e))?;
        if options.keeps(&entry.file_name()) {
            log::debug!("Keeping {}", entry.path().display());
            continue;
        }

        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| erase_error(&path, e))?;
        if file_type.is_dir() {
            removed += erase_dir(&path)?;
        } else {
            // Files and symlinks alike; links are never followed
            fs::remove_file(&path).map_err(|e| erase_error(&path, e))?;
            removed += 1;
        }
    }

    log::debug!("Erased {} entries under {}", removed, root.display());
    Ok(removed)
}

/// Post-order removal of a real (non-symlink) directory, itself included
fn erase_dir(dir: &Path) -> Result<usize> {
    let mut removed = 0;
    for entry in WalkDir::new(dir).contents_first(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            erase_error(&path, e)
        })?;
        let path = entry.path();

        if entry.file_type().is_dir() {
            fs::remove_dir(path).map_err(|e| erase_error(path, e))?;
        } else {
            fs::remove_file(path).map_err(|e| erase_error(path, e))?;
        }
        removed += 1;
    }
    Ok(removed)
}

/// Create `root` if needed, then erase its contents
pub fn recreate_dir(root: &Path, options: &EraseOptions) -> Result<()> {
    fs::create_dir_all(root).map_err(|e| erase_error(root, e))?;
    erase_tree(root, options)?;
    Ok(())
}

/// Mirror every descendant of `src` into `dst`
///
/// The source root is never an entry of its own; only its contents are
/// copied, at the same relative paths. Existing files are overwritten. A
/// missing `src` is a no-op. Returns the number of files copied.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<usize> {
    if !src.exists() {
        log::debug!("{} does not exist, nothing to copy", src.display());
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            copy_error(&path, e)
        })?;

        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| copy_error(entry.path(), e))?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| copy_error(&target, e))?;
        } else {
            ensure_parent_dir(&target).map_err(|e| copy_error(&target, e))?;
            fs::copy(entry.path(), &target).map_err(|e| copy_error(entry.path(), e))?;
            copied += 1;
        }
    }

    log::debug!(
        "Copied {} files from {} to {}",
        copied,
        src.display(),
        dst.display()
    );
    Ok(copied)
}

/// Absolute, canonical form of a path that may not exist yet
///
/// The deepest existing ancestor is canonicalized. The missing tail holds no
/// symlinks, so its `.` and `..` components are folded lexically.
pub fn canonical_path(path: &Path) -> std::io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    for existing in absolute.ancestors() {
        if existing.exists() {
            let tail = absolute
                .strip_prefix(existing)
                .map_err(|e| std::io::Error::other(e.to_string()))?;
            let mut canonical = dunce::canonicalize(existing)?;
            for component in tail.components() {
                match component {
                    Component::ParentDir => {
                        canonical.pop();
                    }
                    Component::CurDir => {}
                    other => canonical.push(other),
                }
            }
            return Ok(canonical);
        }
    }
    Ok(absolute)
}

/// Ensure the parent directory of `path` exists
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Mark a file executable (0o755); no-op on non-unix platforms
pub fn make_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))
            .map_err(|e| install_error(path, e))?;
    }
    #[cfg(not(unix))]
    {
        let _ = (path, install_error);
    }
    Ok(())
}
