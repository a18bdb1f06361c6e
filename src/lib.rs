//! # page-forge
//!
//! Bulk generation of static HTML pages from keyword corpora and templates.
//! Each run produces one batch: pages with word-salad titles and bodies,
//! spread over random shard directories and cross-linked with internal links
//! sampled from the same batch.
//!
//! # Pipeline
//!
//! ```text
//! 1. Sources   templates + keyword lists  →  TemplateSet, KeywordPools
//! 2. Shard     page count                 →  kqz/abt/, mwe/uro/, ...
//! 3. Batch     pools + shard plan         →  Vec<PageRecord>
//! 4. Render    record + sampled links     →  HTML
//! 5. Write     HTML                       →  <folder>/<slug>.html
//! ```
//!
//! All records exist before rendering starts, because link sampling draws
//! from the whole batch. A single random source is threaded through every
//! step, so a seeded run is fully reproducible.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `page-forge.toml` loading, defaults, validation, stock config |
//! | [`sources`] | Template and keyword file loading with built-in fallbacks |
//! | [`text`] | Keyword pools and bounded word-salad synthesis |
//! | [`naming`] | Title → filename slug, with random fallback |
//! | [`shard`] | Shard directory planning and creation under a per-folder cap |
//! | [`batch`] | Page record assembly: locale split, folder filling, record fields |
//! | [`render`] | Internal-link sampling, link list markup, placeholder substitution |
//! | [`write`] | Per-page file output |
//! | [`generate`] | One full generation cycle and its report |
//! | [`output`] | CLI summary formatting |
//! | [`logging`] | `tracing` subscriber setup |
//! | [`types`] | `PageRecord`, `Locale`, `Origin` |
//!
//! # Failure Policy
//!
//! A run is best effort. Missing templates and keyword lists are replaced by
//! built-in defaults, a page that fails to write is skipped, and text that
//! cannot reach its target length is returned shorter. Only failing to create
//! the output or shard directories aborts a run.

pub mod batch;
pub mod config;
pub mod generate;
pub mod logging;
pub mod naming;
pub mod output;
pub mod render;
pub mod shard;
pub mod sources;
pub mod text;
pub mod types;
pub mod write;

#[cfg(test)]
pub(crate) mod test_helpers;
