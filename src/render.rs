//! Internal-link sampling and template rendering.
//!
//! Each page links to a handful of pages sampled from the whole batch (itself
//! included; self-links are not filtered). The link list is built with maud,
//! then substituted into the page's template together with the record fields.
//!
//! ## Placeholders
//!
//! | Token | Value |
//! |-------|-------|
//! | `{{TITLE}}` | display title (with emoji) |
//! | `{{DESCRIPTION}}` | body text |
//! | `{{KEYWORDS}}` | keyword text |
//! | `{{DATE}}` | `2026-01-02T03:04:05+00:00` |
//! | `{{DATE_SQL}}` | `2026-01-02 03:04:05` |
//! | `{{INTERNAL_LINKS}}` | `<ul><li><a href="/abc/xyz/slug.html">…</a></li>…</ul>` |
//!
//! Substitution is a single left-to-right pass over the template: inserted
//! values are never rescanned, and unknown `{{…}}` tokens are left verbatim.

use crate::types::{Origin, PageRecord};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;

pub const TITLE: &str = "{{TITLE}}";
pub const DESCRIPTION: &str = "{{DESCRIPTION}}";
pub const KEYWORDS: &str = "{{KEYWORDS}}";
pub const DATE: &str = "{{DATE}}";
pub const DATE_SQL: &str = "{{DATE_SQL}}";
pub const INTERNAL_LINKS: &str = "{{INTERNAL_LINKS}}";

/// Minimal layout used when a template file is missing or a record names an
/// unknown template.
pub fn fallback_template() -> String {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (TITLE) }
            }
            body {
                h1 { (TITLE) }
                p { (DESCRIPTION) }
                (PreEscaped(INTERNAL_LINKS))
            }
        }
    }
    .into_string()
}

/// A template's text and where it came from.
#[derive(Debug, Clone)]
pub struct Template {
    pub text: String,
    pub origin: Origin,
}

/// Template texts by configured name. Lookups of unknown names resolve to the
/// fallback layout.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    templates: BTreeMap<String, Template>,
    fallback: String,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self {
            templates: BTreeMap::new(),
            fallback: fallback_template(),
        }
    }
}

impl TemplateSet {
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.templates.insert(
            name.into(),
            Template {
                text: text.into(),
                origin: Origin::Disk,
            },
        );
    }

    /// Register `name` as served by the fallback layout.
    pub fn insert_fallback(&mut self, name: impl Into<String>) {
        self.templates.insert(
            name.into(),
            Template {
                text: self.fallback.clone(),
                origin: Origin::Fallback,
            },
        );
    }

    pub fn get(&self, name: &str) -> &str {
        self.templates
            .get(name)
            .map(|t| t.text.as_str())
            .unwrap_or(&self.fallback)
    }

    /// Registered templates in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Template)> {
        self.templates.iter().map(|(name, t)| (name.as_str(), t))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Sample `min(all.len(), n)` distinct records from the batch.
pub fn sample_links<'a, R: Rng + ?Sized>(
    rng: &mut R,
    all: &'a [PageRecord],
    n: usize,
) -> Vec<&'a PageRecord> {
    all.choose_multiple(rng, n.min(all.len())).collect()
}

/// `<ul>` of anchors to the given pages.
pub fn render_links(links: &[&PageRecord]) -> Markup {
    html! {
        ul {
            @for link in links {
                li { a href=(link.href()) { (link.display_title) } }
            }
        }
    }
}

/// Fill `template` with the record's fields and the given links.
///
/// Pure: the same record, links and template always produce the same output.
pub fn render_page(record: &PageRecord, links: &[&PageRecord], template: &str) -> String {
    let date_iso = record.date_iso();
    let date_sql = record.date_sql();
    let links_html = render_links(links).into_string();
    substitute(
        template,
        &[
            (TITLE, record.display_title.as_str()),
            (DESCRIPTION, record.description.as_str()),
            (KEYWORDS, record.keywords_text.as_str()),
            (DATE, date_iso.as_str()),
            (DATE_SQL, date_sql.as_str()),
            (INTERNAL_LINKS, links_html.as_str()),
        ],
    )
}

/// Replace every occurrence of each token with its value in one pass.
pub fn substitute(template: &str, replacements: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match replacements.iter().find(|(token, _)| tail.starts_with(token)) {
            Some((token, value)) => {
                out.push_str(value);
                rest = &tail[token.len()..];
            }
            None => {
                // Step past one brace so `{{{TITLE}}` still matches at the next position.
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Samples links and renders pages against a template set.
pub struct Renderer<'a> {
    templates: &'a TemplateSet,
    links_per_page: usize,
}

impl<'a> Renderer<'a> {
    pub fn new(templates: &'a TemplateSet, links_per_page: usize) -> Self {
        Self {
            templates,
            links_per_page,
        }
    }

    pub fn render<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        record: &PageRecord,
        all: &[PageRecord],
    ) -> String {
        let links = sample_links(rng, all, self.links_per_page);
        render_page(record, &links, self.templates.get(&record.template_name))
    }
}
