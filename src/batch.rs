//! Batch assembly: builds every [`PageRecord`] for one generation cycle.
//!
//! The shard plan comes first so each record can be given its folder. Locales
//! are split evenly (`count / 2` primary, the rest secondary) and shuffled
//! independently of the folder plan, so neither generation order nor folder
//! says anything about a page's locale.

use crate::config::GeneratorConfig;
use crate::naming::{html_filename, slugify};
use crate::shard::{self, ShardError};
use crate::text::KeywordPools;
use crate::types::{Locale, PageRecord};
use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::path::Path;

/// The records of one cycle plus the folder plan they were assigned from.
#[derive(Debug)]
pub struct Batch {
    pub folders: Vec<String>,
    pub records: Vec<PageRecord>,
}

/// Even primary/secondary split of length `count`, shuffled.
pub fn locale_plan<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Locale> {
    let half = count / 2;
    let mut plan = vec![Locale::Primary; half];
    plan.resize(count, Locale::Secondary);
    plan.shuffle(rng);
    plan
}

pub struct PageFactory<'a> {
    config: &'a GeneratorConfig,
    pools: &'a KeywordPools,
}

impl<'a> PageFactory<'a> {
    pub fn new(config: &'a GeneratorConfig, pools: &'a KeywordPools) -> Self {
        Self { config, pools }
    }

    /// Build exactly `count` records, creating their shard directories under
    /// `root`. Timestamps fall within the configured window before `base_time`.
    pub fn build_batch<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        root: &Path,
        count: usize,
        base_time: DateTime<Utc>,
    ) -> Result<Batch, ShardError> {
        let cap = self.config.max_files_per_folder;
        let folders = shard::plan_directories(rng, root, count, cap)?;
        let mut slots = locale_plan(rng, count).into_iter();

        let mut records = Vec::with_capacity(count);
        for folder in &folders {
            for locale in slots.by_ref().take(cap) {
                records.push(self.build_record(rng, folder, locale, base_time));
            }
        }

        Ok(Batch { folders, records })
    }

    fn build_record<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        folder: &str,
        locale: Locale,
        base_time: DateTime<Utc>,
    ) -> PageRecord {
        let text = &self.config.text;
        let offset = rng.random_range(0..=self.config.timestamp_window_secs);
        let timestamp = base_time - TimeDelta::seconds(i64::from(offset));

        let title = self.pools.synthesize(rng, text.title.0, text.title.1, locale);
        let prefix = self.pick_emoji(rng);
        let suffix = self.pick_emoji(rng);
        let display_title = format!("{prefix} {title} {suffix}");
        let filename = html_filename(&slugify(rng, &title));

        let description =
            self.pools
                .synthesize(rng, text.description.0, text.description.1, locale);
        let keywords_text = self
            .pools
            .synthesize(rng, text.keywords.0, text.keywords.1, locale);

        let template_name = self
            .config
            .templates
            .choose(rng)
            .cloned()
            .unwrap_or_default();

        PageRecord {
            display_title,
            filename,
            description,
            keywords_text,
            locale,
            timestamp,
            folder: folder.to_string(),
            template_name,
        }
    }

    fn pick_emoji<R: Rng + ?Sized>(&self, rng: &mut R) -> &'a str {
        self.config
            .emojis
            .choose(rng)
            .map(String::as_str)
            .unwrap_or_default()
    }
}
