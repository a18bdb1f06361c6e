//! Filename stems derived from generated titles.
//!
//! ## Rules
//!
//! - Non-ASCII text is transliterated, then lowercased.
//! - Punctuation and symbols are dropped outright (`don't` → `dont`).
//! - Whitespace, `-` and `_` are separators; runs of them collapse to a
//!   single `-`, with none leading or trailing.
//! - At most [`MAX_SLUG_LEN`] characters.
//! - An empty result is replaced with [`FALLBACK_SLUG_LEN`] random lowercase
//!   letters, so a stem is never empty.
//!
//! ```text
//! "  Hello, World!! "  →  "hello-world"
//! "e-mail@home"        →  "e-mailhome"
//! "!!!"                →  "qhzkwmbexa"   (random)
//! ```

use rand::Rng;

pub const MAX_SLUG_LEN: usize = 80;
pub const FALLBACK_SLUG_LEN: usize = 10;

/// Slug for `title`, with the random fallback applied when nothing usable remains.
pub fn slugify<R: Rng + ?Sized>(rng: &mut R, title: &str) -> String {
    let slug = clean_slug(title);
    if slug.is_empty() {
        random_lowercase(rng, FALLBACK_SLUG_LEN)
    } else {
        slug
    }
}

/// Deterministic part of [`slugify`]. May return an empty string.
pub fn clean_slug(title: &str) -> String {
    let ascii = deunicode::deunicode(title).to_lowercase();
    let mut full = String::with_capacity(ascii.len());
    let mut pending_sep = false;
    for c in ascii.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_sep && !full.is_empty() {
                full.push('-');
            }
            pending_sep = false;
            full.push(c);
        } else if is_separator(c) {
            pending_sep = true;
        }
    }
    let truncated: String = full.chars().take(MAX_SLUG_LEN).collect();
    truncated.trim_end_matches('-').to_string()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-' || c == '_'
}

/// `len` letters drawn uniformly from `a..=z`.
pub fn random_lowercase<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(rng.random_range(b'a'..=b'z')))
        .collect()
}

/// `<stem>.html`
pub fn html_filename(stem: &str) -> String {
    format!("{stem}.html")
}
