//! End-to-end integration tests for the CRS structural parser.
//!
//! Drives the full parse pipeline over a Title 16 fixture: two divisions
//! (22 and 1 articles), section bodies including a repealed one, and an
//! article number carrying merged annotation digits.

use std::fs;
use std::path::Path;

use crs_parser::xml::{element_children, flattened_text, get_tag_name};
use crs_parser::{parse_title_str, DivisionChildren, ParseOutcome, Title, TitleChildren};

const SOURCE_URL: &str = "https://leg.colorado.gov/colorado-revised-statutes/title-16";

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("title16")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

/// Parse the Title 16 fixture.
fn parse_fixture() -> ParseOutcome {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let xml = load_fixture("content.xml");
    parse_title_str(&xml, SOURCE_URL).expect("well-formed fixture XML")
}

fn title_of(outcome: ParseOutcome) -> Title {
    assert!(!outcome.is_fatal(), "unexpected fatal warnings: {:?}", outcome.warnings);
    outcome.title.expect("title present")
}

#[test]
fn parses_title_heading() {
    let title = title_of(parse_fixture());

    assert_eq!(title.name, "Criminal Proceedings");
    assert_eq!(title.number, "16");
    assert_eq!(title.source_url, SOURCE_URL);
}

#[test]
fn splits_divisions_with_their_article_runs() {
    let title = title_of(parse_fixture());

    assert_eq!(title.division_count(), 2);
    let TitleChildren::Divisions(divisions) = &title.children else {
        panic!("expected division mode");
    };

    assert_eq!(divisions[0].raw_name, "CODE OF CRIMINAL PROCEDURE");
    assert_eq!(divisions[0].name, "Code of Criminal Procedure");
    assert_eq!(divisions[0].article_count(), 22);

    assert_eq!(
        divisions[1].name,
        "Uniform Mandatory Disposition of Detainers Act"
    );
    assert_eq!(divisions[1].article_count(), 1);
}

#[test]
fn merges_annotation_digits_out_of_article_numbers() {
    let title = title_of(parse_fixture());
    let TitleChildren::Divisions(divisions) = &title.children else {
        panic!("expected division mode");
    };
    let DivisionChildren::Articles(articles) = &divisions[0].children else {
        panic!("expected direct articles");
    };

    // Raw DT was "1110."; the running counter resolves it to article 11
    let numbers: Vec<&str> = articles.iter().map(|a| a.number.as_str()).collect();
    assert_eq!(numbers[9], "10");
    assert_eq!(numbers[10], "11");
    assert_eq!(numbers[11], "12");
    assert_eq!(articles[10].name, "Imposition of Sentence");
}

#[test]
fn attaches_sections_and_filters_repealed() {
    let title = title_of(parse_fixture());
    let TitleChildren::Divisions(divisions) = &title.children else {
        panic!("expected division mode");
    };
    let DivisionChildren::Articles(articles) = &divisions[0].children else {
        panic!("expected direct articles");
    };

    let article_1 = &articles[0];
    assert_eq!(article_1.number, "1");
    // 16-1-109 is "(Repealed 1998)" and must not appear
    let numbers: Vec<&str> = article_1.sections.iter().map(|s| s.number.as_str()).collect();
    assert_eq!(numbers, vec!["16-1-101", "16-1-102"]);

    let short_title = &article_1.sections[0];
    assert_eq!(short_title.name, "Short title");
    assert_eq!(short_title.article_number(), "1");
    assert_eq!(short_title.title_number(), "16");
    assert!(short_title.text.starts_with("<p>Articles 1 to 13"));
    assert_eq!(short_title.text.matches("<p>").count(), 2);

    let article_2 = &articles[1];
    assert_eq!(article_2.sections.len(), 1);
    assert_eq!(article_2.sections[0].number, "16-2-101");
}

#[test]
fn fixture_parse_emits_no_warnings() {
    let outcome = parse_fixture();
    assert!(outcome.warnings.is_empty(), "warnings: {:?}", outcome.warnings);
}

#[test]
fn parse_is_idempotent() {
    let first = parse_fixture();
    let second = parse_fixture();

    assert_eq!(first.title, second.title);
    assert_eq!(first.warnings, second.warnings);
}

/// Ground-truth round trip: division/article counts from the parsed tree
/// must equal counts obtained by naively filtering the flat listing by
/// element type within each division's span.
#[test]
fn division_counts_match_flat_listing() {
    let xml = load_fixture("content.xml");
    let doc = roxmltree::Document::parse(&xml).expect("well-formed fixture XML");
    let anal = doc
        .descendants()
        .find(|n| n.is_element() && get_tag_name(*n) == "TITLE-ANAL")
        .expect("TITLE-ANAL present");

    // Naive span walk over the flat children
    let mut expected: Vec<(String, usize)> = Vec::new();
    for child in element_children(anal) {
        match get_tag_name(child) {
            "T-DIV" => expected.push((flattened_text(child), 0)),
            "TA-LIST" => {
                if let Some(last) = expected.last_mut() {
                    last.1 += 1;
                }
            }
            _ => {}
        }
    }

    let title = title_of(parse_fixture());
    let TitleChildren::Divisions(divisions) = &title.children else {
        panic!("expected division mode");
    };
    let parsed: Vec<(String, usize)> = divisions
        .iter()
        .map(|d| (d.raw_name.clone(), d.article_count()))
        .collect();

    assert_eq!(parsed, expected);
}

#[test]
fn serializes_to_json() {
    let title = title_of(parse_fixture());
    let json = serde_json::to_value(&title).expect("serializable");

    assert_eq!(json["number"], "16");
    assert_eq!(json["children"]["divisions"][0]["name"], "Code of Criminal Procedure");
}
