//! Word-salad text synthesis from keyword pools.
//!
//! Each locale has a pool of keyword entries (one entry per line of the
//! source file, possibly several words each). [`KeywordPools::synthesize`]
//! draws random entries, splits them into words and accumulates until the
//! randomly chosen target length is reached or the attempt budget runs out.
//!
//! The attempt budget matters: a pool of short entries can never be forced to
//! reach a large target, and the loop must still terminate. When the budget is
//! exhausted the shorter text is returned as-is.

use crate::types::{Locale, Origin};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Upper bound on entry draws per call to [`KeywordPools::synthesize`].
pub const MAX_APPEND_ATTEMPTS: usize = 1000;

/// Built-in pool used when a locale's keyword list is missing or empty.
pub fn default_pool(locale: Locale) -> Vec<String> {
    let words: &[&str] = match locale {
        Locale::Primary => &["محتوى", "تقني", "تحديث"],
        Locale::Secondary => &["tech", "update", "news"],
    };
    words.iter().map(|w| w.to_string()).collect()
}

/// Keyword pools for both locales. Never empty: an empty input list is
/// replaced by [`default_pool`] at construction.
#[derive(Debug, Clone)]
pub struct KeywordPools {
    primary: Vec<String>,
    secondary: Vec<String>,
    primary_origin: Origin,
    secondary_origin: Origin,
}

impl KeywordPools {
    pub fn new(primary: Vec<String>, secondary: Vec<String>) -> Self {
        let (primary, primary_origin) = or_default(primary, Locale::Primary);
        let (secondary, secondary_origin) = or_default(secondary, Locale::Secondary);
        Self {
            primary,
            secondary,
            primary_origin,
            secondary_origin,
        }
    }

    pub fn pool(&self, locale: Locale) -> &[String] {
        match locale {
            Locale::Primary => &self.primary,
            Locale::Secondary => &self.secondary,
        }
    }

    pub fn origin(&self, locale: Locale) -> Origin {
        match locale {
            Locale::Primary => self.primary_origin,
            Locale::Secondary => self.secondary_origin,
        }
    }

    /// Produce between `min_words` and `max_words` words drawn from the
    /// locale's pool. Fewer words come back only when the pool cannot supply
    /// the target within [`MAX_APPEND_ATTEMPTS`] draws.
    ///
    /// `min_words > max_words` is treated as the fixed length `min_words`.
    pub fn synthesize<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        min_words: usize,
        max_words: usize,
        locale: Locale,
    ) -> String {
        let target = rng.random_range(min_words..=max_words.max(min_words));
        let pool = self.pool(locale);
        let mut words: Vec<&str> = Vec::with_capacity(target.min(MAX_APPEND_ATTEMPTS));

        let mut attempts = 0;
        while words.len() < target && attempts < MAX_APPEND_ATTEMPTS {
            if let Some(entry) = pool.choose(rng) {
                words.extend(entry.split_whitespace());
            }
            attempts += 1;
        }

        words.truncate(target);
        words.join(" ")
    }
}

fn or_default(entries: Vec<String>, locale: Locale) -> (Vec<String>, Origin) {
    if entries.is_empty() {
        (default_pool(locale), Origin::Fallback)
    } else {
        (entries, Origin::Disk)
    }
}
