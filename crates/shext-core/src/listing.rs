//! Recursive file listing.
//!
//! Walks with an explicit stack instead of recursion, so deep trees cannot
//! overflow the call stack. Directory symlinks are not followed; symlinks to
//! files are listed like files.

use globset::{Glob, GlobMatcher};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ShextError};

/// Absolute paths of every file under `root`, at any depth.
///
/// Sibling order is whatever the OS returns. Fails with [`ShextError::Io`]
/// when `root` or a directory below it cannot be read.
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    walk(root, None)
}

/// Like [`list_files`], keeping only files whose name matches `pattern`
/// (`*`, `?`, `[abc]`, `{a,b}`). An empty pattern matches every file.
pub fn list_files_matching(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if pattern.is_empty() {
        return walk(root, None);
    }
    let matcher = Glob::new(pattern)
        .map_err(|e| ShextError::invalid(format!("file pattern {:?}: {}", pattern, e)))?
        .compile_matcher();
    walk(root, Some(&matcher))
}

fn walk(root: &Path, matcher: Option<&GlobMatcher>) -> Result<Vec<PathBuf>> {
    let root = fs::canonicalize(root).map_err(|e| ShextError::io(root, e))?;
    tracing::debug!("listing files under {}", root.display());

    let mut files = Vec::new();
    let mut stack = vec![root];
    while let Some(dir) = stack.pop() {
        let entries = fs::read_dir(&dir).map_err(|e| ShextError::io(&dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| ShextError::io(&dir, e))?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| ShextError::io(&path, e))?;

            if file_type.is_dir() {
                stack.push(path);
                continue;
            }
            let is_file = file_type.is_file() || (file_type.is_symlink() && path.is_file());
            if !is_file {
                continue;
            }
            let matches = match matcher {
                Some(m) => m.is_match(entry.file_name()),
                None => true,
            };
            if matches {
                files.push(path);
            }
        }
    }

    tracing::trace!("found {} files", files.len());
    Ok(files)
}
