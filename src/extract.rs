//! Article and section extraction from classified nodes.
//!
//! Article entries decompose into a number sub-field (`DT`) and a name
//! sub-field (`DD`, whose final comma-separated segment is the citation
//! range). Section bodies decompose into document-order text fragments:
//! number, catchline, source credit, then body paragraphs.

use roxmltree::Node;

use crate::config::{REPEALED_MARKERS, TAG_ARTICLE_NAME, TAG_ARTICLE_NUM};
use crate::error::{ParseWarning, WarningKind};
use crate::types::{Article, Section};
use crate::xml::{find_child, flattened_text, text_fragments};

/// Running article-number counter for the annotation-merge rule.
///
/// Some article numbers appear in the source with a footnote-annotation
/// digit string concatenated without a separator (raw `12410` meaning
/// article 124, annotation 10). The rule is stateful and left-to-right:
/// when the raw number starts with `current + 1` and trailing digits
/// remain, the prefix is the real number and the rest is the annotation.
/// A cleanly numeric raw number resets the counter, so numbering may
/// restart at 1 inside a later division.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArticleNumberState {
    current: Option<u32>,
}

impl ArticleNumberState {
    /// Create a fresh counter. One counter spans one title parse, fed the
    /// articles in document order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a raw article number against the running counter.
    ///
    /// Returns the resolved number and, when the merge rule fired, the
    /// annotation digits that were stripped.
    pub fn resolve(&mut self, raw: &str) -> (String, Option<String>) {
        let trimmed = raw.trim().trim_end_matches('.');
        let (head, suffix) = match trimmed.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, Some(rest.trim())),
            None => (trimmed, None),
        };

        // Merge rule: only once a previous number has been seen
        if let Some(current) = self.current {
            let next = current + 1;
            let next_str = next.to_string();
            if head.len() > next_str.len()
                && head.starts_with(&next_str)
                && head[next_str.len()..].chars().all(|c| c.is_ascii_digit())
            {
                let annotation = head[next_str.len()..].to_string();
                tracing::debug!(
                    raw = %head,
                    number = %next_str,
                    annotation = %annotation,
                    "merged annotation digits out of article number"
                );
                self.current = Some(next);
                return (join_number(&next_str, suffix), Some(annotation));
            }
        }

        if let Ok(value) = head.parse::<u32>() {
            self.current = Some(value);
        }
        (join_number(head, suffix), None)
    }
}

fn join_number(head: &str, suffix: Option<&str>) -> String {
    match suffix {
        Some(suffix) if !suffix.is_empty() => format!("{head} {suffix}"),
        _ => head.to_string(),
    }
}

/// Owning context threaded into article extraction.
#[derive(Debug, Clone, Default)]
pub struct ArticleContext {
    pub title_number: String,
    pub division_name: Option<String>,
    pub subdivision_name: Option<String>,
}

/// Extract an article from a `TA-LIST` entry node.
///
/// The name is the `DD` text preceding the final comma-separated segment
/// (the citation range); the number is the `DT` text resolved through the
/// annotation counter. A missing sub-field drops the article with a
/// warning, never failing the title.
pub fn parse_article(
    node: Node<'_, '_>,
    context: &ArticleContext,
    state: &mut ArticleNumberState,
    warnings: &mut Vec<ParseWarning>,
) -> Option<Article> {
    let raw_number = find_child(node, TAG_ARTICLE_NUM).map(flattened_text);
    let raw_name = find_child(node, TAG_ARTICLE_NAME).map(flattened_text);

    let (Some(raw_number), Some(raw_name)) = (raw_number, raw_name) else {
        tracing::warn!("article entry missing number or name sub-field, dropping");
        warnings.push(ParseWarning::warn(
            WarningKind::MalformedHeading,
            "article entry missing number or name sub-field",
        ));
        return None;
    };
    if raw_number.is_empty() || raw_name.is_empty() {
        tracing::warn!("article entry with empty number or name, dropping");
        warnings.push(ParseWarning::warn(
            WarningKind::MalformedHeading,
            "article entry with empty number or name",
        ));
        return None;
    }

    let (number, _annotation) = state.resolve(&raw_number);
    let name = article_name(&raw_name);

    Some(Article {
        name,
        number,
        title_number: context.title_number.clone(),
        division_name: context.division_name.clone(),
        subdivision_name: context.subdivision_name.clone(),
        sections: Vec::new(),
    })
}

/// Strip the trailing citation-range segment and trailing period from a
/// raw article name.
fn article_name(raw: &str) -> String {
    let before_range = match raw.rsplit_once(',') {
        Some((name, _citation_range)) => name,
        None => raw,
    };
    before_range.trim().trim_end_matches('.').to_string()
}

/// Extract a section from a `SECTION-TEXT` body node.
///
/// Returns `None` for repealed/deleted/reserved sections (an intentional
/// skip, no warning) and for sections missing number, name, or body text
/// (dropped with a warning).
pub fn parse_section(node: Node<'_, '_>, warnings: &mut Vec<ParseWarning>) -> Option<Section> {
    let fragments = text_fragments(node);

    let number = fragments
        .first()
        .map(|f| f.trim_end_matches('.').to_string())
        .filter(|n| is_section_number(n));
    let name = fragments
        .get(1)
        .map(|f| f.trim().trim_end_matches('.').to_string())
        .filter(|n| !n.is_empty());

    // Repealed sections are recognized, not malformed
    if let Some(catchline) = fragments.get(1) {
        if REPEALED_MARKERS.iter().any(|m| catchline.contains(m)) {
            tracing::debug!(catchline = %catchline, "skipping repealed section");
            return None;
        }
    }

    let (Some(number), Some(name)) = (number, name) else {
        tracing::warn!("section body missing number or catchline, dropping");
        warnings.push(ParseWarning::warn(
            WarningKind::MalformedHeading,
            "section body missing number or catchline",
        ));
        return None;
    };

    // First three fragments are heading boilerplate (number, catchline,
    // source credit); the rest are body paragraphs
    let paragraphs: Vec<String> = fragments
        .iter()
        .skip(3)
        .map(|p| format!("<p>{p}</p>"))
        .collect();
    if paragraphs.is_empty() {
        tracing::warn!(number = %number, "section with empty body text, dropping");
        warnings.push(ParseWarning::warn(
            WarningKind::MalformedHeading,
            format!("section {number} has no body text"),
        ));
        return None;
    }

    Some(Section {
        name,
        number,
        text: paragraphs.join("\n"),
        part_number: None,
    })
}

/// A section number has at least three dash segments (title-article-section).
fn is_section_number(candidate: &str) -> bool {
    candidate.split('-').count() >= 3 && candidate.split('-').all(|s| !s.is_empty())
}
