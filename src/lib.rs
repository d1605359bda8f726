//! CRS Parser - Structural parser for the Colorado Revised Statutes.
//!
//! This crate converts the flat, weakly-typed markup of one published CRS
//! title (division headings, article entries, section bodies in document
//! order, with no parent/child pointers) into a nested legal-document tree:
//! Title → Division → Subdivision → Article → Section.
//!
//! It is a pure transform library: no I/O, no network, no shared mutable
//! state. The crawling layer hands it one materialized document and gets
//! back a [`Title`] plus an ordered list of warnings; a `Fatal` warning
//! means the title result is absent.
//!
//! # Example
//!
//! ```
//! use crs_parser::parse_title_str;
//!
//! let xml = r#"<TITLE>
//!     <TITLE-NUM>TITLE 4</TITLE-NUM>
//!     <TITLE-TEXT>UNIFORM COMMERCIAL CODE</TITLE-TEXT>
//!     <TITLE-ANAL>
//!         <TA-LIST><DT>1.</DT><DD>General Provisions, 4-1-101 to 4-1-110.</DD></TA-LIST>
//!     </TITLE-ANAL>
//! </TITLE>"#;
//!
//! let outcome = parse_title_str(xml, "https://example.com/title-4").unwrap();
//! let title = outcome.title.unwrap();
//! assert_eq!(title.name, "Uniform Commercial Code");
//! assert_eq!(title.article_count(), 1);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Element vocabulary and validation
//! - [`types`]: The parsed tree (Title, Division, Subdivision, Article, Section)
//! - [`error`]: Hard errors and accumulated warnings
//! - [`xml`]: Node-query façade over the XML tree
//! - [`normalize`]: Heading cleanup and Division/Subdivision shape tests
//! - [`classify`]: Node classification
//! - [`scan`]: Windowed boundary scan over the analysis listing
//! - [`extract`]: Article/section extraction and the annotation-merge rule
//! - [`assemble`]: The `parse_title` driver

pub mod assemble;
pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod scan;
pub mod types;
pub mod xml;

// Re-export main entry points
pub use assemble::{parse_title, parse_title_str, ParseOutcome};

// Re-export commonly used items
pub use error::{CrsError, ParseWarning, Result, Severity, WarningKind};
pub use types::{Article, Division, DivisionChildren, Section, Subdivision, Title, TitleChildren};
