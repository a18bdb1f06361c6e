//! Loading of templates and keyword lists from the source directory.
//!
//! Neither is ever fatal. A missing or unreadable template is replaced by the
//! fallback layout, and a missing or empty keyword list by the built-in word
//! list for its locale. Each substitution is logged as a warning.

use crate::config::{GeneratorConfig, KeywordFiles};
use crate::render::TemplateSet;
use crate::text::KeywordPools;
use crate::types::Locale;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Everything a generation cycle reads from the source directory.
#[derive(Debug, Clone)]
pub struct Sources {
    pub templates: TemplateSet,
    pub pools: KeywordPools,
}

pub fn load_sources(dir: &Path, config: &GeneratorConfig) -> Sources {
    Sources {
        templates: load_templates(dir, &config.templates),
        pools: load_keywords(dir, &config.keywords),
    }
}

pub fn load_templates(dir: &Path, names: &[String]) -> TemplateSet {
    let mut set = TemplateSet::default();
    for name in names {
        let path = dir.join(name);
        match fs::read_to_string(&path) {
            Ok(text) => {
                debug!(template = %name, "loaded template");
                set.insert(name.as_str(), text);
            }
            Err(err) => {
                warn!(
                    template = %name,
                    path = %path.display(),
                    error = %err,
                    "template unavailable, using fallback layout"
                );
                set.insert_fallback(name.as_str());
            }
        }
    }
    set
}

pub fn load_keywords(dir: &Path, files: &KeywordFiles) -> KeywordPools {
    let primary = read_keyword_file(dir, &files.primary, Locale::Primary);
    let secondary = read_keyword_file(dir, &files.secondary, Locale::Secondary);
    KeywordPools::new(primary, secondary)
}

/// One entry per trimmed, non-empty line.
pub fn parse_keyword_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn read_keyword_file(dir: &Path, name: &str, locale: Locale) -> Vec<String> {
    let path = dir.join(name);
    let entries = match fs::read_to_string(&path) {
        Ok(content) => parse_keyword_lines(&content),
        Err(err) => {
            warn!(
                locale = locale.label(),
                path = %path.display(),
                error = %err,
                "keyword list unavailable, using built-in words"
            );
            return Vec::new();
        }
    };
    if entries.is_empty() {
        warn!(
            locale = locale.label(),
            path = %path.display(),
            "keyword list is empty, using built-in words"
        );
    } else {
        debug!(locale = locale.label(), entries = entries.len(), "loaded keywords");
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fallback_template;
    use crate::types::Origin;
    use tempfile::TempDir;

    #[test]
    fn parse_keyword_lines_skips_blank_lines_and_trims() {
        let entries = parse_keyword_lines("  alpha beta \n\n\t\ngamma\r\n   \n");
        assert_eq!(entries, ["alpha beta", "gamma"]);
    }

    #[test]
    fn templates_are_read_from_disk() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.html"), "<p>{{TITLE}}</p>").unwrap();
        let set = load_templates(tmp.path(), &["a.html".to_string()]);
        assert_eq!(set.get("a.html"), "<p>{{TITLE}}</p>");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn missing_template_uses_fallback() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.html"), "A").unwrap();
        let names = ["a.html".to_string(), "b.html".to_string()];
        let set = load_templates(tmp.path(), &names);
        assert_eq!(set.get("b.html"), fallback_template());
        let origins: Vec<Origin> = set.iter().map(|(_, t)| t.origin).collect();
        assert_eq!(origins, [Origin::Disk, Origin::Fallback]);
    }

    #[test]
    fn keywords_are_read_per_locale() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("ar.txt"), "كلمة\nعبارة طويلة\n").unwrap();
        fs::write(tmp.path().join("en.txt"), "one\ntwo words\n\n").unwrap();
        let files = KeywordFiles {
            primary: "ar.txt".into(),
            secondary: "en.txt".into(),
        };
        let pools = load_keywords(tmp.path(), &files);
        assert_eq!(pools.pool(Locale::Primary), ["كلمة", "عبارة طويلة"]);
        assert_eq!(pools.pool(Locale::Secondary), ["one", "two words"]);
        assert_eq!(pools.origin(Locale::Secondary), Origin::Disk);
    }

    #[test]
    fn missing_keyword_files_use_defaults() {
        let tmp = TempDir::new().unwrap();
        let pools = load_keywords(tmp.path(), &KeywordFiles::default());
        assert_eq!(pools.pool(Locale::Secondary), ["tech", "update", "news"]);
        assert_eq!(pools.origin(Locale::Primary), Origin::Fallback);
    }

    #[test]
    fn blank_keyword_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("keywords_en.txt"), "\n   \n").unwrap();
        let pools = load_keywords(tmp.path(), &KeywordFiles::default());
        assert_eq!(pools.origin(Locale::Secondary), Origin::Fallback);
        assert_eq!(pools.pool(Locale::Secondary).len(), 3);
    }

    #[test]
    fn load_sources_covers_every_configured_template() {
        let tmp = TempDir::new().unwrap();
        let config = GeneratorConfig::default();
        let sources = load_sources(tmp.path(), &config);
        assert_eq!(sources.templates.len(), config.templates.len());
    }
}
