//! Writing rendered pages to disk.
//!
//! Each page goes to `<root>/<folder>/<filename>`. A failure is returned to
//! the caller as a [`WriteError`] naming the target; the generation cycle logs
//! it and moves on to the next page.

use crate::types::PageRecord;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Failed to write {path}: {source}")]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

pub fn target_path(root: &Path, record: &PageRecord) -> PathBuf {
    root.join(&record.folder).join(&record.filename)
}

/// Write `markup` as UTF-8 to the record's target path.
pub fn write_page(root: &Path, record: &PageRecord, markup: &str) -> Result<PathBuf, WriteError> {
    let path = target_path(root, record);
    match fs::write(&path, markup) {
        Ok(()) => Ok(path),
        Err(source) => Err(WriteError { path, source }),
    }
}
