//! Generator configuration.
//!
//! Loaded from an optional `page-forge.toml` in the source directory. Every
//! field has a default, so the file only needs the values being changed:
//!
//! ```toml
//! count = 50
//!
//! [text]
//! description = [20, 40]
//! ```
//!
//! Unknown keys are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! count = 200                 # Pages per generation cycle
//! max_files_per_folder = 500  # Shard cap: pages per directory
//! templates = ["test.html", "test1.html", "test2.html"]
//! emojis = ["🔥", "🎥", "🔞", "😱", "✅", "🌟", "📺", "🎬", "✨", "💎", "⚡"]
//! links_per_page = 5          # Internal links sampled per page
//! timestamp_window_secs = 86400
//!
//! [keywords]
//! primary = "keywords_ar.txt"
//! secondary = "keywords_en.txt"
//!
//! [text]                      # [min, max] words
//! title = [5, 10]
//! description = [100, 250]
//! keywords = [3, 8]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = "page-forge.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Pages per generation cycle.
    pub count: usize,
    /// Maximum number of pages written into one shard directory.
    pub max_files_per_folder: usize,
    /// Template file names, relative to the source directory. Each page picks one.
    pub templates: Vec<String>,
    /// Decorations placed before and after each title.
    pub emojis: Vec<String>,
    /// Internal links sampled per page (fewer when the batch is smaller).
    pub links_per_page: usize,
    /// Timestamps fall within this many seconds before batch start.
    pub timestamp_window_secs: u32,
    pub keywords: KeywordFiles,
    pub text: TextConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 200,
            max_files_per_folder: 500,
            templates: ["test.html", "test1.html", "test2.html"]
                .map(String::from)
                .to_vec(),
            emojis: [
                "🔥", "🎥", "🔞", "😱", "✅", "🌟", "📺", "🎬", "✨", "💎", "⚡",
            ]
            .map(String::from)
            .to_vec(),
            links_per_page: 5,
            timestamp_window_secs: 86_400,
            keywords: KeywordFiles::default(),
            text: TextConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_files_per_folder == 0 {
            return Err(ConfigError::Validation(
                "max_files_per_folder must be at least 1".into(),
            ));
        }
        if self.templates.is_empty() {
            return Err(ConfigError::Validation(
                "templates must not be empty".into(),
            ));
        }
        if self.emojis.is_empty() {
            return Err(ConfigError::Validation("emojis must not be empty".into()));
        }
        for (name, range) in [
            ("title", self.text.title),
            ("description", self.text.description),
            ("keywords", self.text.keywords),
        ] {
            if range.0 > range.1 {
                return Err(ConfigError::Validation(format!(
                    "text.{name} minimum must not exceed maximum"
                )));
            }
        }
        Ok(())
    }
}

/// Keyword list file names per locale, relative to the source directory.
/// One entry per non-empty line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeywordFiles {
    pub primary: String,
    pub secondary: String,
}

impl Default for KeywordFiles {
    fn default() -> Self {
        Self {
            primary: "keywords_ar.txt".to_string(),
            secondary: "keywords_en.txt".to_string(),
        }
    }
}

/// Inclusive `[min, max]` word count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRange(pub usize, pub usize);

/// Word-count ranges for each synthesized field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextConfig {
    pub title: WordRange,
    pub description: WordRange,
    pub keywords: WordRange,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            title: WordRange(5, 10),
            description: WordRange(100, 250),
            keywords: WordRange(3, 8),
        }
    }
}

/// Load config from `page-forge.toml` in the given directory.
///
/// Returns stock defaults when no file exists. Rejects unknown keys and
/// validates the result.
pub fn load_config(dir: &Path) -> Result<GeneratorConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(GeneratorConfig::default());
    }
    let content = fs::read_to_string(&path)?;
    let config: GeneratorConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `page-forge.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# page-forge configuration
# ========================
# Place this file as `page-forge.toml` in the source directory (next to the
# templates and keyword files). All options are optional; the values below
# are the defaults.

# Pages produced per generation cycle. `generate --count` overrides it.
count = 200

# Pages written into one shard directory before a new one is started.
# Shard directories are two random three-letter levels, e.g. `kqz/abt/`.
max_files_per_folder = 500

# Template files, relative to the source directory. Each page picks one at
# random. Recognized placeholders: {{TITLE}}, {{DESCRIPTION}}, {{KEYWORDS}},
# {{DATE}}, {{DATE_SQL}}, {{INTERNAL_LINKS}}. A missing file is replaced by a
# minimal built-in layout.
templates = ["test.html", "test1.html", "test2.html"]

# One emoji is placed before and one after every title.
emojis = ["🔥", "🎥", "🔞", "😱", "✅", "🌟", "📺", "🎬", "✨", "💎", "⚡"]

# Internal links sampled from the same batch for each page.
links_per_page = 5

# Page timestamps fall within this many seconds before the run started.
timestamp_window_secs = 86400

# ---------------------------------------------------------------------------
# Keyword lists: one entry per non-empty line. A missing or empty list is
# replaced by a small built-in word list.
# ---------------------------------------------------------------------------
[keywords]
primary = "keywords_ar.txt"
secondary = "keywords_en.txt"

# ---------------------------------------------------------------------------
# Word-count ranges, [min, max] inclusive.
# ---------------------------------------------------------------------------
[text]
title = [5, 10]
description = [100, 250]
keywords = [3, 8]
"##
}
