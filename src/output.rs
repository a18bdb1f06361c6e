//! CLI output formatting.
//!
//! Each report has a `format_*` function returning lines (pure, testable) and
//! a `print_*` wrapper that writes them to stdout. Diagnostics go through
//! `tracing` on stderr; this module is only the end-of-run summary.
//!
//! ## Sources
//!
//! ```text
//! Templates
//! 001 test.html
//! 002 test1.html (fallback layout)
//!
//! Keywords
//! 001 primary: 120 entries
//!     Source: keywords_ar.txt
//! 002 secondary: 3 entries (built-in)
//! ```
//!
//! ## Generate
//!
//! ```text
//! Folders
//! 001 kqz/abt (500 pages)
//! 002 mwe/uro (200 pages)
//!
//! Generated 700 pages in 2 folders
//! ```

use crate::config::GeneratorConfig;
use crate::generate::GenerateReport;
use crate::sources::Sources;
use crate::types::{Locale, Origin};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

pub fn format_sources_output(sources: &Sources, config: &GeneratorConfig) -> Vec<String> {
    let mut lines = vec!["Templates".to_string()];
    for (i, (name, template)) in sources.templates.iter().enumerate() {
        match template.origin {
            Origin::Disk => lines.push(format!("{} {}", format_index(i + 1), name)),
            Origin::Fallback => lines.push(format!(
                "{} {} (fallback layout)",
                format_index(i + 1),
                name
            )),
        }
    }

    lines.push(String::new());
    lines.push("Keywords".to_string());
    for (i, locale) in Locale::ALL.into_iter().enumerate() {
        let count = plural(sources.pools.pool(locale).len(), "entry", "entries");
        match sources.pools.origin(locale) {
            Origin::Disk => {
                let file = match locale {
                    Locale::Primary => &config.keywords.primary,
                    Locale::Secondary => &config.keywords.secondary,
                };
                lines.push(format!(
                    "{} {}: {}",
                    format_index(i + 1),
                    locale.label(),
                    count
                ));
                lines.push(format!("    Source: {}", file));
            }
            Origin::Fallback => lines.push(format!(
                "{} {}: {} (built-in)",
                format_index(i + 1),
                locale.label(),
                count
            )),
        }
    }
    lines
}

pub fn print_sources_output(sources: &Sources, config: &GeneratorConfig) {
    for line in format_sources_output(sources, config) {
        println!("{}", line);
    }
}

pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();

    if !report.folders.is_empty() {
        lines.push("Folders".to_string());
        for (i, folder) in report.folders.iter().enumerate() {
            lines.push(format!(
                "{} {} ({})",
                format_index(i + 1),
                folder.folder,
                plural(folder.pages, "page", "pages")
            ));
        }
        lines.push(String::new());
    }

    if !report.failed.is_empty() {
        lines.push("Failed".to_string());
        for err in &report.failed {
            lines.push(format!("    {}: {}", err.path.display(), err.source));
        }
        lines.push(String::new());
    }

    let mut summary = format!(
        "Generated {} in {}",
        plural(report.written, "page", "pages"),
        plural(report.folders.len(), "folder", "folders")
    );
    if !report.failed.is_empty() {
        summary.push_str(&format!(", {} failed", report.failed.len()));
    }
    lines.push(summary);
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}
