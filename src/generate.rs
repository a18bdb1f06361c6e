//! One generation cycle.
//!
//! ```text
//! plan shard dirs → build records → for each record: sample links, render, write
//! ```
//!
//! Every record exists before the first page is rendered, since each page
//! links to pages sampled from the whole batch. Writing is best effort: a page
//! that fails to write is logged and reported, and the cycle carries on.

use crate::batch::PageFactory;
use crate::config::GeneratorConfig;
use crate::render::Renderer;
use crate::shard::ShardError;
use crate::sources::Sources;
use crate::write::{WriteError, write_page};
use chrono::{DateTime, Utc};
use rand::Rng;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, error, info};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Shard error: {0}")]
    Shard(#[from] ShardError),
}

/// Pages assigned to one planned shard directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderReport {
    pub folder: String,
    pub pages: usize,
}

/// Outcome of a generation cycle.
#[derive(Debug)]
pub struct GenerateReport {
    /// Planned folders in creation order.
    pub folders: Vec<FolderReport>,
    /// Records built for the batch.
    pub pages: usize,
    /// Pages successfully written.
    pub written: usize,
    pub failed: Vec<WriteError>,
}

/// Run one cycle of `count` pages under `output_root`.
///
/// Only directory creation failures abort the cycle; per-page write failures
/// are collected in [`GenerateReport::failed`].
pub fn run_cycle<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
    sources: &Sources,
    output_root: &Path,
    count: usize,
    base_time: DateTime<Utc>,
) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_root)?;

    let factory = PageFactory::new(config, &sources.pools);
    let batch = factory.build_batch(rng, output_root, count, base_time)?;
    info!(
        pages = batch.records.len(),
        folders = batch.folders.len(),
        "batch assembled"
    );

    let renderer = Renderer::new(&sources.templates, config.links_per_page);
    let mut written = 0;
    let mut failed = Vec::new();
    for record in &batch.records {
        let markup = renderer.render(rng, record, &batch.records);
        match write_page(output_root, record, &markup) {
            Ok(path) => {
                debug!(path = %path.display(), "wrote page");
                written += 1;
            }
            Err(err) => {
                error!(path = %err.path.display(), error = %err.source, "failed to write page");
                failed.push(err);
            }
        }
    }

    let cap = config.max_files_per_folder;
    let folders = batch
        .folders
        .iter()
        .enumerate()
        .map(|(i, folder)| FolderReport {
            folder: folder.clone(),
            pages: batch.records.len().saturating_sub(i * cap).min(cap),
        })
        .collect();

    Ok(GenerateReport {
        folders,
        pages: batch.records.len(),
        written,
        failed,
    })
}
