//! End-to-end generation: source directory on disk → shard directories of
//! rendered pages whose internal links all resolve within the batch.

use chrono::{TimeZone, Utc};
use page_forge::config::{self, CONFIG_FILE};
use page_forge::generate::run_cycle;
use page_forge::sources::load_sources;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const TEMPLATE: &str = "<!DOCTYPE html><html><head><title>{{TITLE}}</title>\
<meta name=\"keywords\" content=\"{{KEYWORDS}}\">\
<meta property=\"article:published_time\" content=\"{{DATE}}\"></head>\
<body><h1>{{TITLE}}</h1><time>{{DATE_SQL}}</time><p>{{DESCRIPTION}}</p>\
<nav>{{INTERNAL_LINKS}}</nav></body></html>";

fn source_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(CONFIG_FILE),
        r#"
max_files_per_folder = 4
templates = ["page.html", "missing.html"]

[text]
title = [3, 6]
description = [10, 20]
keywords = [2, 4]
"#,
    )
    .unwrap();
    fs::write(tmp.path().join("page.html"), TEMPLATE).unwrap();
    fs::write(
        tmp.path().join("keywords_ar.txt"),
        "أخبار اليوم\nتقنية حديثة\n\nمقالات\n",
    )
    .unwrap();
    fs::write(
        tmp.path().join("keywords_en.txt"),
        "breaking news\nlatest tech review\nguide\n",
    )
    .unwrap();
    tmp
}

fn html_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for outer in fs::read_dir(root).unwrap() {
        let outer = outer.unwrap().path();
        for inner in fs::read_dir(&outer).unwrap() {
            for file in fs::read_dir(inner.unwrap().path()).unwrap() {
                files.push(file.unwrap().path());
            }
        }
    }
    files
}

fn hrefs(html: &str) -> Vec<String> {
    html.split("href=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(String::from)
        .collect()
}

#[test]
fn full_cycle_writes_linked_pages() {
    let source = source_dir();
    let out = TempDir::new().unwrap();
    let config = config::load_config(source.path()).unwrap();
    let sources = load_sources(source.path(), &config);
    let base = Utc.with_ymd_and_hms(2026, 10, 1, 12, 0, 0).single().unwrap();

    let report = run_cycle(
        &mut StdRng::seed_from_u64(2026),
        &config,
        &sources,
        out.path(),
        10,
        base,
    )
    .unwrap();

    assert_eq!(report.pages, 10);
    assert_eq!(report.folders.len(), 3);
    assert!(report.folders.iter().all(|f| f.pages <= 4));
    assert!(report.failed.is_empty());

    let files = html_files(out.path());
    // Slugs are not deduplicated, so a rare collision overwrites a page.
    assert!(!files.is_empty() && files.len() <= 10);
    assert_eq!(report.written, 10);

    let existing: HashSet<String> = files
        .iter()
        .map(|p| {
            let rel = p.strip_prefix(out.path()).unwrap();
            format!("/{}", rel.to_string_lossy().replace('\\', "/"))
        })
        .collect();

    for file in &files {
        let name = file.file_name().unwrap().to_string_lossy().into_owned();
        let stem = name.strip_suffix(".html").unwrap();
        assert!(
            !stem.is_empty()
                && stem
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "bad filename {name}"
        );

        let html = fs::read_to_string(file).unwrap();
        assert!(!html.contains("{{"), "placeholder leaked in {name}");
        assert!(html.contains("<ul>"));

        let links = hrefs(&html);
        assert_eq!(links.len(), 5);
        for link in links {
            assert!(existing.contains(&link), "dangling link {link}");
        }
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let source = source_dir();
    let config = config::load_config(source.path()).unwrap();
    let sources = load_sources(source.path(), &config);
    let base = Utc.with_ymd_and_hms(2026, 10, 1, 12, 0, 0).single().unwrap();

    let render = |seed: u64| {
        let out = TempDir::new().unwrap();
        run_cycle(
            &mut StdRng::seed_from_u64(seed),
            &config,
            &sources,
            out.path(),
            6,
            base,
        )
        .unwrap();
        let mut pages: Vec<(String, String)> = html_files(out.path())
            .into_iter()
            .map(|p| {
                let rel = p.strip_prefix(out.path()).unwrap().to_string_lossy().into_owned();
                (rel, fs::read_to_string(&p).unwrap())
            })
            .collect();
        pages.sort();
        pages
    };

    assert_eq!(render(7), render(7));
}

#[test]
fn empty_source_directory_still_generates() {
    let source = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let config = config::load_config(source.path()).unwrap();
    let sources = load_sources(source.path(), &config);

    let report = run_cycle(
        &mut StdRng::seed_from_u64(1),
        &config,
        &sources,
        out.path(),
        3,
        Utc::now(),
    )
    .unwrap();

    assert_eq!(report.written, 3);
    for file in html_files(out.path()) {
        let html = fs::read_to_string(file).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>"));
    }
}
