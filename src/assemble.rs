//! Tree assembly: drives classification, scanning, and extraction to turn
//! one title document into an immutable `Title`.
//!
//! Failure semantics: a malformed title name/number, or a document with
//! neither divisions nor articles, abandons the whole title (a `Fatal`
//! warning and no tree). Everything below title level degrades to an
//! empty/omitted result plus a `Warn` entry; one bad article or section
//! never aborts the title.

use std::collections::BTreeMap;

use roxmltree::Document;

use crate::classify::NodeKind;
use crate::config::{
    validate_title_number, TAG_SECTION, TAG_TITLE_ANAL, TAG_TITLE_NUM, TAG_TITLE_TEXT,
};
use crate::error::{ParseWarning, Result, WarningKind};
use crate::extract::{parse_article, parse_section, ArticleContext, ArticleNumberState};
use crate::normalize::normalize_name;
use crate::scan::{
    article_run, collect_items, division_names, subdivision_names_between, ScanItem,
};
use crate::types::{
    Article, Division, DivisionChildren, Section, Subdivision, Title, TitleChildren,
};
use crate::xml::{find_descendants, flattened_text};

/// Result of one title parse: the tree (absent when a `Fatal` warning was
/// recorded) plus all accumulated warnings, in emission order.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub title: Option<Title>,
    pub warnings: Vec<ParseWarning>,
}

impl ParseOutcome {
    /// Whether the parse was abandoned at title level.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.warnings.iter().any(ParseWarning::is_fatal)
    }

    fn fatal(mut warnings: Vec<ParseWarning>, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::error!(message = %message, "abandoning title parse");
        warnings.push(ParseWarning::fatal(WarningKind::UnresolvableTitle, message));
        Self {
            title: None,
            warnings,
        }
    }
}

/// Parse one title document into a `Title` tree.
///
/// # Arguments
/// * `doc` - Parsed title XML document
/// * `source_url` - URL recorded on the resulting title
pub fn parse_title(doc: &Document<'_>, source_url: &str) -> ParseOutcome {
    let mut warnings = Vec::new();
    let root = doc.root_element();

    // Title heading: both fields are required, and failure is fatal
    let name = find_descendants(root, TAG_TITLE_TEXT)
        .next()
        .map(flattened_text)
        .filter(|t| !t.is_empty());
    let Some(name) = name else {
        return ParseOutcome::fatal(warnings, "missing or empty TITLE-TEXT element");
    };

    let number = find_descendants(root, TAG_TITLE_NUM)
        .next()
        .map(flattened_text)
        .and_then(|t| t.split_whitespace().nth(1).map(str::to_string));
    let Some(number) = number else {
        return ParseOutcome::fatal(warnings, "missing or malformed TITLE-NUM element");
    };
    if let Err(e) = validate_title_number(&number) {
        return ParseOutcome::fatal(warnings, e.to_string());
    }

    let Some(anal) = find_descendants(root, TAG_TITLE_ANAL).next() else {
        return ParseOutcome::fatal(warnings, format!("title {number} has no TITLE-ANAL listing"));
    };

    let items = collect_items(anal, &mut warnings);
    let divisions = division_names(&items, &mut warnings);
    let mut sections_by_article = collect_sections(doc, &mut warnings);
    let mut state = ArticleNumberState::new();

    // Mode: divisions when any division-shaped heading exists, else bare
    // articles as direct title children
    let children = if divisions.is_empty() {
        let run: Vec<&ScanItem<'_, '_>> = items
            .iter()
            .filter(|i| i.kind == NodeKind::ArticleCandidate)
            .collect();
        if run.is_empty() {
            return ParseOutcome::fatal(
                warnings,
                format!("title {number} has neither divisions nor articles"),
            );
        }

        let context = ArticleContext {
            title_number: number.clone(),
            division_name: None,
            subdivision_name: None,
        };
        let articles = run
            .into_iter()
            .filter_map(|item| {
                parse_article(item.node, &context, &mut state, &mut warnings)
            })
            .map(|article| attach_sections(article, &mut sections_by_article))
            .collect();
        TitleChildren::Articles(articles)
    } else {
        let built = divisions
            .iter()
            .map(|raw_name| {
                build_division(
                    raw_name,
                    &number,
                    &items,
                    &mut state,
                    &mut sections_by_article,
                    &mut warnings,
                )
            })
            .collect();
        TitleChildren::Divisions(built)
    };

    // Sections whose article segment matched nothing are reported, never
    // silently dropped
    for (article_number, group) in &sections_by_article {
        tracing::warn!(
            article = %article_number,
            count = group.len(),
            "sections have no owning article"
        );
        warnings.push(ParseWarning::warn(
            WarningKind::StructuralAmbiguity,
            format!(
                "{} section(s) reference article {article_number}, which does not exist",
                group.len()
            ),
        ));
    }

    ParseOutcome {
        title: Some(Title {
            name: normalize_name(&name),
            number,
            children,
            source_url: source_url.to_string(),
        }),
        warnings,
    }
}

/// Parse a title from raw XML text.
///
/// Convenience wrapper over [`parse_title`] for callers holding the
/// document as a string.
pub fn parse_title_str(xml: &str, source_url: &str) -> Result<ParseOutcome> {
    let doc = Document::parse(xml)?;
    Ok(parse_title(&doc, source_url))
}

/// Build one division: direct article run first, subdivision retry when the
/// run is empty, empty children plus a warning as the last resort.
fn build_division(
    raw_name: &str,
    title_number: &str,
    items: &[ScanItem<'_, '_>],
    state: &mut ArticleNumberState,
    sections_by_article: &mut BTreeMap<String, Vec<Section>>,
    warnings: &mut Vec<ParseWarning>,
) -> Division {
    let display_name = normalize_name(raw_name);

    let children = match article_run(items, raw_name) {
        Some(run) if !run.is_empty() => {
            let context = ArticleContext {
                title_number: title_number.to_string(),
                division_name: Some(display_name.clone()),
                subdivision_name: None,
            };
            let articles = run
                .iter()
                .filter_map(|item| parse_article(item.node, &context, state, warnings))
                .map(|article| attach_sections(article, sections_by_article))
                .collect();
            DivisionChildren::Articles(articles)
        }
        Some(_) => {
            // Direct run empty: retry one level down with every
            // subdivision-shaped heading up to the next division
            let subdivision_names = subdivision_names_between(items, raw_name);
            if subdivision_names.is_empty() {
                tracing::warn!(division = %raw_name, "division has no articles");
                warnings.push(ParseWarning::warn(
                    WarningKind::StructuralAmbiguity,
                    format!("division '{raw_name}' has no articles"),
                ));
                DivisionChildren::Articles(Vec::new())
            } else {
                let subdivisions = subdivision_names
                    .iter()
                    .map(|sub_name| {
                        build_subdivision(
                            sub_name,
                            &display_name,
                            title_number,
                            items,
                            state,
                            sections_by_article,
                            warnings,
                        )
                    })
                    .collect();
                DivisionChildren::Subdivisions(subdivisions)
            }
        }
        None => {
            tracing::warn!(division = %raw_name, "division heading not found in listing");
            warnings.push(ParseWarning::warn(
                WarningKind::StructuralAmbiguity,
                format!("division '{raw_name}' not found in the analysis listing"),
            ));
            DivisionChildren::Articles(Vec::new())
        }
    };

    Division {
        raw_name: raw_name.to_string(),
        name: display_name,
        children,
        title_number: title_number.to_string(),
    }
}

fn build_subdivision(
    raw_name: &str,
    division_name: &str,
    title_number: &str,
    items: &[ScanItem<'_, '_>],
    state: &mut ArticleNumberState,
    sections_by_article: &mut BTreeMap<String, Vec<Section>>,
    warnings: &mut Vec<ParseWarning>,
) -> Subdivision {
    let display_name = normalize_name(raw_name);
    let context = ArticleContext {
        title_number: title_number.to_string(),
        division_name: Some(division_name.to_string()),
        subdivision_name: Some(display_name.clone()),
    };

    let articles = match article_run(items, raw_name) {
        Some(run) if !run.is_empty() => run
            .iter()
            .filter_map(|item| parse_article(item.node, &context, state, warnings))
            .map(|article| attach_sections(article, sections_by_article))
            .collect(),
        _ => {
            tracing::warn!(subdivision = %raw_name, "subdivision has no articles");
            warnings.push(ParseWarning::warn(
                WarningKind::StructuralAmbiguity,
                format!("subdivision '{raw_name}' has no articles"),
            ));
            Vec::new()
        }
    };

    Subdivision {
        raw_name: raw_name.to_string(),
        name: display_name,
        articles,
        division_name: division_name.to_string(),
        title_number: title_number.to_string(),
    }
}

/// Parse every section body in the document and group by article segment.
fn collect_sections(
    doc: &Document<'_>,
    warnings: &mut Vec<ParseWarning>,
) -> BTreeMap<String, Vec<Section>> {
    let mut by_article: BTreeMap<String, Vec<Section>> = BTreeMap::new();

    for node in find_descendants(doc.root_element(), TAG_SECTION) {
        if let Some(section) = parse_section(node, warnings) {
            by_article
                .entry(section.article_number().to_string())
                .or_default()
                .push(section);
        }
    }

    by_article
}

/// Hand an article its sections. First article with a matching numeric
/// head wins; attachment order is document order within the group.
fn attach_sections(
    mut article: Article,
    sections_by_article: &mut BTreeMap<String, Vec<Section>>,
) -> Article {
    if let Some(sections) = sections_by_article.remove(article.number_head()) {
        article.sections = sections;
    }
    article
}
