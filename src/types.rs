//! Core data types for the parsed statute tree.
//!
//! All entities are constructed once during a single parse pass and never
//! mutated afterwards. Ownership is strictly hierarchical: a `Title` owns
//! its divisions or articles, a `Division` owns its subdivisions or
//! articles, and nothing is shared across branches.

use serde::Serialize;

/// Top-level legal code division, e.g. "Title 16 — Criminal Proceedings".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    /// Normalized display name (e.g. "Criminal Proceedings").
    pub name: String,

    /// Title number as printed (e.g. "16", "25.5").
    pub number: String,

    /// Either divisions or bare articles, never both.
    pub children: TitleChildren,

    /// URL of the source document this title was parsed from.
    pub source_url: String,
}

/// Children of a title: a title has either divisions or bare articles.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleChildren {
    Divisions(Vec<Division>),
    Articles(Vec<Article>),
}

impl Title {
    /// Number of divisions (zero in article mode).
    #[must_use]
    pub fn division_count(&self) -> usize {
        match &self.children {
            TitleChildren::Divisions(divisions) => divisions.len(),
            TitleChildren::Articles(_) => 0,
        }
    }

    /// Total number of articles across all branches.
    #[must_use]
    pub fn article_count(&self) -> usize {
        match &self.children {
            TitleChildren::Divisions(divisions) => {
                divisions.iter().map(Division::article_count).sum()
            }
            TitleChildren::Articles(articles) => articles.len(),
        }
    }
}

/// A non-structural grouping of articles within a title, identified by an
/// ALL-CAPS heading in the analysis listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Division {
    /// Heading text as it appeared in the source (cleaned, not re-cased).
    pub raw_name: String,

    /// Normalized display name.
    pub name: String,

    /// Either subdivisions or direct articles, never both.
    pub children: DivisionChildren,

    /// Number of the owning title.
    pub title_number: String,
}

/// Children of a division: subdivisions or direct articles, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisionChildren {
    Subdivisions(Vec<Subdivision>),
    Articles(Vec<Article>),
}

impl Division {
    /// Total number of articles in this division.
    #[must_use]
    pub fn article_count(&self) -> usize {
        match &self.children {
            DivisionChildren::Subdivisions(subdivisions) => {
                subdivisions.iter().map(|s| s.articles.len()).sum()
            }
            DivisionChildren::Articles(articles) => articles.len(),
        }
    }
}

/// An optional intermediate grouping within a division, identified by a
/// Title-Case heading. Subdivision detection only runs on headings that
/// already failed the division shape test.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subdivision {
    /// Heading text as it appeared in the source.
    pub raw_name: String,

    /// Normalized display name.
    pub name: String,

    /// Articles owned by this subdivision.
    pub articles: Vec<Article>,

    /// Display name of the owning division.
    pub division_name: String,

    /// Number of the owning title.
    pub title_number: String,
}

/// A named, numbered grouping of sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    /// Article name with the trailing citation range removed.
    pub name: String,

    /// Article number; may carry a `bis`/`ter` suffix (e.g. "124 bis").
    pub number: String,

    /// Number of the owning title.
    pub title_number: String,

    /// Display name of the owning division, if any.
    pub division_name: Option<String>,

    /// Display name of the owning subdivision, if any.
    pub subdivision_name: Option<String>,

    /// Sections attached by matching the article segment of their number.
    pub sections: Vec<Section>,
}

impl Article {
    /// Numeric head of the article number, with any `bis`/`ter` suffix
    /// removed. Section numbers reference articles by this value.
    #[must_use]
    pub fn number_head(&self) -> &str {
        self.number.split_whitespace().next().unwrap_or("")
    }
}

/// The atomic statutory provision with citation number and body text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    /// Catchline name (e.g. "Short title").
    pub name: String,

    /// Dotted citation number (e.g. "16-1-101").
    pub number: String,

    /// Body text, one `<p>…</p>` per paragraph, newline-joined.
    pub text: String,

    /// Part number within the article, when known.
    pub part_number: Option<String>,
}

impl Section {
    /// Title segment of the citation number (first dash segment).
    #[must_use]
    pub fn title_number(&self) -> &str {
        self.number.split('-').next().unwrap_or("")
    }

    /// Article segment of the citation number (second dash segment).
    #[must_use]
    pub fn article_number(&self) -> &str {
        self.number.split('-').nth(1).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn article(number: &str) -> Article {
        Article {
            name: "General Provisions".to_string(),
            number: number.to_string(),
            title_number: "16".to_string(),
            division_name: None,
            subdivision_name: None,
            sections: Vec::new(),
        }
    }

    #[test]
    fn test_section_derived_segments() {
        let section = Section {
            name: "Short title".to_string(),
            number: "16-1-101".to_string(),
            text: "<p>text</p>".to_string(),
            part_number: None,
        };

        assert_eq!(section.title_number(), "16");
        assert_eq!(section.article_number(), "1");
    }

    #[test]
    fn test_article_number_head() {
        assert_eq!(article("124").number_head(), "124");
        assert_eq!(article("124 bis").number_head(), "124");
    }

    #[test]
    fn test_title_counts_article_mode() {
        let title = Title {
            name: "Criminal Proceedings".to_string(),
            number: "16".to_string(),
            children: TitleChildren::Articles(vec![article("1"), article("2")]),
            source_url: "https://example.com".to_string(),
        };

        assert_eq!(title.division_count(), 0);
        assert_eq!(title.article_count(), 2);
    }

    #[test]
    fn test_title_counts_division_mode() {
        let division = Division {
            raw_name: "CODE OF CRIMINAL PROCEDURE".to_string(),
            name: "Code of Criminal Procedure".to_string(),
            children: DivisionChildren::Articles(vec![article("1"), article("2"), article("3")]),
            title_number: "16".to_string(),
        };
        let title = Title {
            name: "Criminal Proceedings".to_string(),
            number: "16".to_string(),
            children: TitleChildren::Divisions(vec![division]),
            source_url: "https://example.com".to_string(),
        };

        assert_eq!(title.division_count(), 1);
        assert_eq!(title.article_count(), 3);
    }

    #[test]
    fn test_division_count_with_subdivisions() {
        let subdivision = Subdivision {
            raw_name: "Robbery".to_string(),
            name: "Robbery".to_string(),
            articles: vec![article("301")],
            division_name: "Offenses Against Property".to_string(),
            title_number: "18".to_string(),
        };
        let division = Division {
            raw_name: "OFFENSES AGAINST PROPERTY".to_string(),
            name: "Offenses Against Property".to_string(),
            children: DivisionChildren::Subdivisions(vec![subdivision]),
            title_number: "18".to_string(),
        };

        assert_eq!(division.article_count(), 1);
    }

    #[test]
    fn test_children_serialization() {
        let title = Title {
            name: "Criminal Proceedings".to_string(),
            number: "16".to_string(),
            children: TitleChildren::Articles(vec![article("1")]),
            source_url: "https://example.com".to_string(),
        };

        let json = serde_json::to_string(&title).unwrap();
        assert!(json.contains("\"articles\""));
        assert!(!json.contains("\"divisions\""));
    }
}
