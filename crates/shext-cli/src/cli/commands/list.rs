//! List command: print every file under a directory.

use anyhow::{Context, Result};
use shext_core::listing;
use std::path::Path;

pub fn run_list(dir: &Path, pattern: Option<&str>) -> Result<()> {
    let mut files = match pattern {
        Some(p) => listing::list_files_matching(dir, p),
        None => listing::list_files(dir),
    }
    .with_context(|| format!("list {}", dir.display()))?;
    files.sort();
    for f in &files {
        println!("{}", f.display());
    }
    tracing::debug!("listed {} files under {}", files.len(), dir.display());
    Ok(())
}
