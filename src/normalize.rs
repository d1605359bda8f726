//! Heading name canonicalization and shape classification.
//!
//! Division headings start with at least two consecutive uppercase letters
//! (`CODE OF CRIMINAL PROCEDURE`); subdivision headings start with one
//! capitalized word (`Robbery`). Subdivision detection is only meaningful
//! for names that already failed the division test, which keeps the two
//! shapes unambiguous.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

use crate::xml::{collapse_whitespace, flattened_text};

/// Division shape: begins with two or more consecutive uppercase letters.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DIVISION_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2,}").expect("valid regex"));

/// Subdivision shape: one capitalized word followed by lowercase letters.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SUBDIVISION_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+").expect("valid regex"));

/// Words kept lowercase when title-casing, unless they lead the name.
const SMALL_WORDS: [&str; 12] = [
    "a", "an", "and", "at", "by", "for", "in", "of", "on", "or", "the", "to",
];

/// Whether a cleaned heading is division-shaped.
///
/// # Examples
/// ```
/// use crs_parser::normalize::is_division_name;
///
/// assert!(is_division_name("CODE OF CRIMINAL PROCEDURE"));
/// assert!(!is_division_name("Robbery"));
/// ```
#[must_use]
pub fn is_division_name(raw: &str) -> bool {
    DIVISION_SHAPE.is_match(raw)
}

/// Whether a cleaned heading is subdivision-shaped.
///
/// A name that passes the division test is rejected here: subdivision
/// detection only runs on candidates that already failed it.
///
/// # Examples
/// ```
/// use crs_parser::normalize::is_subdivision_name;
///
/// assert!(is_subdivision_name("Robbery"));
/// assert!(!is_subdivision_name("CODE OF CRIMINAL PROCEDURE"));
/// ```
#[must_use]
pub fn is_subdivision_name(raw: &str) -> bool {
    !is_division_name(raw) && SUBDIVISION_SHAPE.is_match(raw)
}

/// Canonicalize one raw heading fragment: NFC-normalize, strip any inline
/// markup by re-parsing the fragment as a tiny XML snippet, collapse
/// whitespace, trim.
///
/// Fragments that fail to re-parse (stray `&`, unbalanced brackets) fall
/// back to whitespace collapse on the raw string.
#[must_use]
pub fn clean_heading(raw: &str) -> String {
    let normalized: String = raw.nfc().collect();
    let wrapped = format!("<fragment>{normalized}</fragment>");

    match roxmltree::Document::parse(&wrapped) {
        Ok(doc) => flattened_text(doc.root_element()),
        Err(_) => collapse_whitespace(&normalized),
    }
}

/// Canonical display name for a heading: cleaned, trailing period stripped,
/// title-cased with small words kept lowercase.
///
/// # Examples
/// ```
/// use crs_parser::normalize::normalize_name;
///
/// assert_eq!(
///     normalize_name("CODE OF CRIMINAL PROCEDURE."),
///     "Code of Criminal Procedure"
/// );
/// ```
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    let cleaned = clean_heading(raw);
    let trimmed = cleaned.trim_end_matches('.').trim();
    title_case(trimmed)
}

/// Title-case a name, keeping small connective words lowercase except in
/// leading position.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if i > 0 && SMALL_WORDS.contains(&lower.as_str()) {
                lower
            } else {
                capitalize(&lower)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
