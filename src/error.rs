//! Error and warning types for the CRS parser.
//!
//! Hard failures (`CrsError`) abandon the whole title parse. Everything
//! below title level degrades instead: the condition is recorded as a
//! `ParseWarning` and the parse continues with a partial result.

use serde::Serialize;
use thiserror::Error;

/// Main error type for the parser library.
#[derive(Debug, Error)]
pub enum CrsError {
    /// Title-level name or number missing, or no structure found at all.
    #[error("Unresolvable title: {0}")]
    UnresolvableTitle(String),

    /// Invalid title number format.
    #[error("Invalid title number: '{0}'. Expected digits with optional dotted suffix (e.g., 16 or 25.5)")]
    InvalidTitleNumber(String),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, CrsError>;

/// Severity of an accumulated parse warning.
///
/// `Fatal` means the title result must be treated as absent by the caller;
/// `Warn` accompanies a partial but usable tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Warn,
    Fatal,
}

/// Classification of a degraded-parse condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningKind {
    /// A boundary name could not be located in the node list.
    StructuralAmbiguity,

    /// A heading failed to decompose into its name and number sub-fields.
    MalformedHeading,

    /// Title-level structure missing; the whole title parse is abandoned.
    UnresolvableTitle,

    /// A node could not be classified (e.g. a division heading with no text).
    UnclassifiedNode,
}

/// One accumulated warning from a title parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseWarning {
    pub severity: Severity,
    pub kind: WarningKind,
    pub message: String,
}

impl ParseWarning {
    /// Create a non-fatal warning.
    #[must_use]
    pub fn warn(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warn,
            kind,
            message: message.into(),
        }
    }

    /// Create a fatal warning.
    #[must_use]
    pub fn fatal(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Fatal,
            kind,
            message: message.into(),
        }
    }

    /// Whether this warning invalidates the title result.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Fatal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CrsError::InvalidTitleNumber("TITLE 16".to_string());
        assert!(err.to_string().contains("TITLE 16"));
        assert!(err.to_string().contains("25.5"));
    }

    #[test]
    fn test_unresolvable_title_display() {
        let err = CrsError::UnresolvableTitle("no TITLE-NUM element".to_string());
        assert_eq!(err.to_string(), "Unresolvable title: no TITLE-NUM element");
    }

    #[test]
    fn test_warning_constructors() {
        let w = ParseWarning::warn(WarningKind::StructuralAmbiguity, "division not found");
        assert_eq!(w.severity, Severity::Warn);
        assert!(!w.is_fatal());

        let f = ParseWarning::fatal(WarningKind::UnresolvableTitle, "no name");
        assert!(f.is_fatal());
    }

    #[test]
    fn test_warning_serialization() {
        let w = ParseWarning::warn(WarningKind::MalformedHeading, "missing DT");
        let json = serde_json::to_string(&w).unwrap();
        assert!(json.contains("\"WARN\""));
        assert!(json.contains("\"MALFORMED_HEADING\""));
    }
}
