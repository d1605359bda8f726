//! Node classification.
//!
//! Assigns each raw document node one of the candidate tags the scanner
//! understands, based on its element type and the shape of its text.

use roxmltree::Node;

use crate::config::{TAG_ARTICLE_ENTRY, TAG_DIVISION, TAG_SECTION};
use crate::error::{ParseWarning, WarningKind};
use crate::xml::{flattened_text, get_tag_name};

/// Classification of one raw document node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A `T-DIV` heading with non-empty text (division or subdivision).
    DivisionCandidate,

    /// A `TA-LIST` article entry.
    ArticleCandidate,

    /// A `SECTION-TEXT` body.
    SectionCandidate,

    /// Anything else, including empty division headings.
    Unclassified,
}

/// Classify a node by element type and text shape.
///
/// A division heading whose flattened text is empty cannot serve as a
/// boundary; it is demoted to `Unclassified` with a warning rather than
/// failing the parse.
pub fn classify(node: Node<'_, '_>, warnings: &mut Vec<ParseWarning>) -> NodeKind {
    match get_tag_name(node) {
        tag if tag == TAG_ARTICLE_ENTRY => NodeKind::ArticleCandidate,
        tag if tag == TAG_SECTION => NodeKind::SectionCandidate,
        tag if tag == TAG_DIVISION => {
            if flattened_text(node).is_empty() {
                tracing::warn!("division heading with empty text, skipping");
                warnings.push(ParseWarning::warn(
                    WarningKind::UnclassifiedNode,
                    "division heading with empty text",
                ));
                NodeKind::Unclassified
            } else {
                NodeKind::DivisionCandidate
            }
        }
        _ => NodeKind::Unclassified,
    }
}
