//! Windowed boundary scan over the structural-analysis listing.
//!
//! The source markup lists division headings and article entries in
//! document order with no parent/child pointers; hierarchy is encoded
//! purely by adjacency and naming convention. Reconstruction is therefore
//! "find my name, then own everything until the next reset point": locate
//! the boundary heading in the flat list, then take the contiguous run of
//! article entries that follows it.
//!
//! All scans are plain index arithmetic over a materialized slice, so
//! re-scanning the same boundary from the same list always returns the
//! same run. The assembler relies on that: it scans once per division and
//! once per subdivision with overlapping windows.

use roxmltree::Node;

use crate::classify::{classify, NodeKind};
use crate::error::{ParseWarning, WarningKind};
use crate::normalize::{clean_heading, is_division_name, is_subdivision_name};
use crate::xml::{element_children, flattened_text};

/// One classified entry of the analysis listing.
#[derive(Debug, Clone)]
pub struct ScanItem<'a, 'input> {
    /// Classification of the underlying node.
    pub kind: NodeKind,

    /// Cleaned flattened heading text (used for boundary matching).
    pub text: String,

    /// The underlying node, for later sub-field extraction.
    pub node: Node<'a, 'input>,
}

/// Materialize the ordered, classified items of one analysis listing.
///
/// Unclassified nodes are dropped here (with their warnings already
/// recorded by the classifier); the scanner only reasons about division
/// and article candidates.
pub fn collect_items<'a, 'input>(
    anal: Node<'a, 'input>,
    warnings: &mut Vec<ParseWarning>,
) -> Vec<ScanItem<'a, 'input>> {
    element_children(anal)
        .filter_map(|node| {
            let kind = classify(node, warnings);
            match kind {
                NodeKind::DivisionCandidate | NodeKind::ArticleCandidate => Some(ScanItem {
                    kind,
                    text: clean_heading(&flattened_text(node)),
                    node,
                }),
                NodeKind::SectionCandidate | NodeKind::Unclassified => None,
            }
        })
        .collect()
}

/// Find the contiguous run of article entries owned by `boundary`.
///
/// Scans forward for the first item whose cleaned text equals the boundary
/// name byte-for-byte, then takes article candidates from the position
/// immediately after it, stopping at the first non-article item (a later
/// division or subdivision heading) or the end of the list.
///
/// Returns `None` when the boundary name never appears — the caller treats
/// that as "division present but empty", not an error. An empty run means
/// the boundary was found but owns no articles directly.
#[must_use]
pub fn article_run<'s, 'a, 'input>(
    items: &'s [ScanItem<'a, 'input>],
    boundary: &str,
) -> Option<&'s [ScanItem<'a, 'input>]> {
    let match_index = items.iter().position(|item| item.text == boundary)?;
    let start = match_index + 1;
    let run_len = items[start..]
        .iter()
        .position(|item| item.kind != NodeKind::ArticleCandidate)
        .unwrap_or(items.len() - start);
    Some(&items[start..start + run_len])
}

/// Division-shaped heading names in listing order, first occurrence only.
///
/// A division name appearing twice is malformed source; the scan binds to
/// the first occurrence and the duplicate is reported.
pub fn division_names(items: &[ScanItem<'_, '_>], warnings: &mut Vec<ParseWarning>) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for item in items {
        if item.kind != NodeKind::DivisionCandidate || !is_division_name(&item.text) {
            continue;
        }
        if names.iter().any(|seen| seen == &item.text) {
            tracing::warn!(name = %item.text, "duplicate division heading, binding to first occurrence");
            warnings.push(ParseWarning::warn(
                WarningKind::StructuralAmbiguity,
                format!("duplicate division heading '{}', bound to first occurrence", item.text),
            ));
            continue;
        }
        names.push(item.text.clone());
    }

    names
}

/// Subdivision-shaped heading names between a division heading and the
/// next division-shaped heading (or end of list), in order.
///
/// Used for the retry pass when a division's direct article scan comes up
/// empty: each of these names becomes its own boundary one level down.
#[must_use]
pub fn subdivision_names_between(items: &[ScanItem<'_, '_>], division: &str) -> Vec<String> {
    let Some(match_index) = items.iter().position(|item| item.text == division) else {
        return Vec::new();
    };

    items[match_index + 1..]
        .iter()
        .take_while(|item| {
            item.kind != NodeKind::DivisionCandidate || !is_division_name(&item.text)
        })
        .filter(|item| {
            item.kind == NodeKind::DivisionCandidate && is_subdivision_name(&item.text)
        })
        .map(|item| item.text.clone())
        .collect()
}
