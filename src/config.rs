//! Configuration constants and validation for the CRS parser.
//!
//! The element vocabulary below is the flat SGML-derived markup used by the
//! published Colorado Revised Statutes titles. The structural-analysis
//! listing (`TITLE-ANAL`) carries division and article headings in document
//! order with no nesting; section bodies follow as siblings.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{CrsError, Result};

/// Title number element, e.g. `TITLE 16`.
pub const TAG_TITLE_NUM: &str = "TITLE-NUM";

/// Title name element (ALL-CAPS raw text).
pub const TAG_TITLE_TEXT: &str = "TITLE-TEXT";

/// Structural-analysis listing for one title.
pub const TAG_TITLE_ANAL: &str = "TITLE-ANAL";

/// Division or subdivision heading. The two are distinguished only by the
/// shape of their text (ALL-CAPS vs. Title-Case).
pub const TAG_DIVISION: &str = "T-DIV";

/// One article entry in the analysis listing.
pub const TAG_ARTICLE_ENTRY: &str = "TA-LIST";

/// Article number sub-field of an entry, e.g. `1.` or `124 bis.`.
pub const TAG_ARTICLE_NUM: &str = "DT";

/// Article name sub-field of an entry. The final comma-separated segment is
/// the citation range and is not part of the name.
pub const TAG_ARTICLE_NAME: &str = "DD";

/// One section body.
pub const TAG_SECTION: &str = "SECTION-TEXT";

/// Catchline markers for sections that carry no live text.
pub const REPEALED_MARKERS: [&str; 3] = ["(Repealed", "(Deleted", "(Reserved"];

/// Title number pattern: 1-3 digits with an optional dotted suffix
/// (Title 25.5 is real).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TITLE_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}(\.\d)?$").expect("valid regex"));

/// Validate a title number.
///
/// # Arguments
/// * `number` - The title number to validate
///
/// # Returns
/// * `Ok(())` if valid
/// * `Err(CrsError::InvalidTitleNumber)` if invalid
///
/// # Examples
/// ```
/// use crs_parser::config::validate_title_number;
///
/// assert!(validate_title_number("16").is_ok());
/// assert!(validate_title_number("25.5").is_ok());
/// assert!(validate_title_number("TITLE 16").is_err());
/// ```
pub fn validate_title_number(number: &str) -> Result<()> {
    if TITLE_NUMBER_PATTERN.is_match(number) {
        Ok(())
    } else {
        Err(CrsError::InvalidTitleNumber(number.to_string()))
    }
}

/// Build the canonical leg.colorado.gov URL for a title.
///
/// Used by callers that do not thread a `source_url` of their own.
///
/// # Examples
/// ```
/// use crs_parser::config::title_source_url;
///
/// assert_eq!(
///     title_source_url("16"),
///     "https://leg.colorado.gov/colorado-revised-statutes/title-16"
/// );
/// ```
#[must_use]
pub fn title_source_url(number: &str) -> String {
    format!("https://leg.colorado.gov/colorado-revised-statutes/title-{number}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title_number_valid() {
        assert!(validate_title_number("1").is_ok());
        assert!(validate_title_number("16").is_ok());
        assert!(validate_title_number("44").is_ok());
        assert!(validate_title_number("25.5").is_ok());
    }

    #[test]
    fn test_validate_title_number_invalid() {
        assert!(validate_title_number("").is_err());
        assert!(validate_title_number("TITLE 16").is_err());
        assert!(validate_title_number("16-1").is_err());
        assert!(validate_title_number("25.55").is_err());
        assert!(validate_title_number("1234").is_err());
    }

    #[test]
    fn test_title_source_url() {
        assert_eq!(
            title_source_url("25.5"),
            "https://leg.colorado.gov/colorado-revised-statutes/title-25.5"
        );
    }
}
