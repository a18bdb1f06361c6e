//! Shard directory planning.
//!
//! A batch of `N` pages is spread over `ceil(N / cap)` directories so no
//! directory holds more than `cap` pages. Each directory is two levels of
//! three random lowercase letters:
//!
//! ```text
//! output/
//! ├── kqz/abt/      # pages 1..=cap
//! └── mwe/uro/      # remaining pages
//! ```
//!
//! Names are not deduplicated. Two plans that draw the same name share one
//! physical directory; creation is idempotent so this is harmless.

use crate::naming::random_lowercase;
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Letters per directory level.
pub const SEGMENT_LEN: usize = 3;

#[derive(Error, Debug)]
pub enum ShardError {
    #[error("Folder cap must be at least 1")]
    ZeroCap,
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Number of directories needed for `total_count` pages at `max_per_folder` each.
pub fn folder_count(total_count: usize, max_per_folder: usize) -> usize {
    total_count.div_ceil(max_per_folder)
}

/// Plan and create the shard directories for a batch under `root`.
///
/// Returns relative paths (`abc/xyz`, always `/`-separated) in creation order.
/// The caller fills them in that order, `max_per_folder` pages each, with the
/// last one taking the remainder.
pub fn plan_directories<R: Rng + ?Sized>(
    rng: &mut R,
    root: &Path,
    total_count: usize,
    max_per_folder: usize,
) -> Result<Vec<String>, ShardError> {
    if max_per_folder == 0 {
        return Err(ShardError::ZeroCap);
    }

    let count = folder_count(total_count, max_per_folder);
    let mut folders = Vec::with_capacity(count);
    for _ in 0..count {
        let outer = random_lowercase(rng, SEGMENT_LEN);
        let inner = random_lowercase(rng, SEGMENT_LEN);
        let path = root.join(&outer).join(&inner);
        fs::create_dir_all(&path).map_err(|source| ShardError::CreateDir {
            path: path.clone(),
            source,
        })?;
        folders.push(format!("{outer}/{inner}"));
    }
    Ok(folders)
}
