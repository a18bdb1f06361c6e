//! Shared test utilities for the page-forge test suite.
//!
//! ```text
//! use crate::test_helpers::*;
//!
//! let pools = keyword_pools(&["alpha beta"], &["gamma"]);
//! let mut rng = seeded(1);
//! let text = pools.synthesize(&mut rng, 3, 3, Locale::Primary);
//! ```

use chrono::{DateTime, TimeZone, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GeneratorConfig, TextConfig, WordRange};
use crate::text::KeywordPools;
use crate::types::{Locale, PageRecord};

/// Deterministic random source.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// 2026-03-14 15:09:26 UTC.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26)
        .single()
        .unwrap()
}

pub fn keyword_pools(primary: &[&str], secondary: &[&str]) -> KeywordPools {
    KeywordPools::new(
        primary.iter().map(|s| s.to_string()).collect(),
        secondary.iter().map(|s| s.to_string()).collect(),
    )
}

/// Default config with the given folder cap and short text ranges.
pub fn small_config(max_files_per_folder: usize) -> GeneratorConfig {
    GeneratorConfig {
        max_files_per_folder,
        text: TextConfig {
            title: WordRange(2, 4),
            description: WordRange(5, 12),
            keywords: WordRange(1, 3),
        },
        ..GeneratorConfig::default()
    }
}

/// A record with the given title, folder and filename; other fields fixed.
pub fn record(display_title: &str, folder: &str, filename: &str) -> PageRecord {
    PageRecord {
        display_title: display_title.to_string(),
        filename: filename.to_string(),
        description: "description".to_string(),
        keywords_text: "keywords".to_string(),
        locale: Locale::Secondary,
        timestamp: fixed_time(),
        folder: folder.to_string(),
        template_name: "test.html".to_string(),
    }
}
