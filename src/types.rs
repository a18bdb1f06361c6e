//! Shared types used across the generation pipeline.
//!
//! A [`PageRecord`] is built once by [`crate::batch`], then only read by the
//! link sampler, the renderer and the writer.

use chrono::{DateTime, Utc};

/// Which keyword pool backs a record's synthesized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    Primary,
    Secondary,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Primary, Locale::Secondary];

    pub fn label(self) -> &'static str {
        match self {
            Locale::Primary => "primary",
            Locale::Secondary => "secondary",
        }
    }
}

/// Where a collaborator resource (template or keyword list) came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Read from a file in the source directory.
    Disk,
    /// Built-in default substituted because the file was missing, unreadable or empty.
    Fallback,
}

/// One page to be generated.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRecord {
    /// Synthesized title wrapped with one emoji on each side.
    pub display_title: String,
    /// `<slug>.html`, slug derived from the unwrapped title.
    pub filename: String,
    /// Synthesized body text.
    pub description: String,
    /// Synthesized keyword text.
    pub keywords_text: String,
    pub locale: Locale,
    /// A point within the trailing window before batch start.
    pub timestamp: DateTime<Utc>,
    /// Shard directory relative to the output root, e.g. `abc/xyz`.
    pub folder: String,
    /// Configured template identifier chosen for this page.
    pub template_name: String,
}

impl PageRecord {
    /// ISO-8601 with explicit UTC offset: `2026-01-02T03:04:05+00:00`.
    pub fn date_iso(&self) -> String {
        self.timestamp.format("%Y-%m-%dT%H:%M:%S+00:00").to_string()
    }

    /// SQL-style: `2026-01-02 03:04:05`.
    pub fn date_sql(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// Root-relative link to this page.
    pub fn href(&self) -> String {
        format!("/{}/{}", self.folder, self.filename)
    }
}
