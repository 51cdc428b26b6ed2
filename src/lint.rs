//! Lint pass for template headers.
//!
//! The parser ignores anything it does not understand. This pass reports
//! those lines so template authors can spot typos: unknown keys, list items
//! with no section above them, values written after a section key, and
//! templates that end up without an id.

use std::fmt;

use ariadne::{Color, ReportKind};

use crate::error::{format_report, Span};
use crate::parser::{split_template, strip_bom, HeaderLine, ScalarKey, Section};

/// A lint warning about an ignored or suspicious header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
    /// Byte range of the offending line in the raw template
    pub span: Span,
}

/// Category of lint finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    MissingSeparator,
    UnrecognizedKey,
    OrphanItem,
    IgnoredLine,
    SectionValue,
    MissingIdentifier,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::MissingSeparator => write!(f, "separator"),
            LintCategory::UnrecognizedKey => write!(f, "unrecognized-key"),
            LintCategory::OrphanItem => write!(f, "orphan-item"),
            LintCategory::IgnoredLine => write!(f, "ignored-line"),
            LintCategory::SectionValue => write!(f, "section-value"),
            LintCategory::MissingIdentifier => write!(f, "missing-id"),
        }
    }
}

impl LintWarning {
    fn new(category: LintCategory, message: impl Into<String>, span: Span) -> Self {
        Self {
            category,
            message: message.into(),
            span,
        }
    }

    /// Format the warning with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        format_report(
            ReportKind::Warning,
            source,
            filename,
            self.span.clone(),
            &self.message,
            &self.category.to_string(),
            Color::Yellow,
        )
        .unwrap_or_else(|| format!("{}: {}: {}", filename, self.category, self.message))
    }
}

/// Run all lint checks on one raw template.
///
/// Spans index into `raw`, including any leading byte-order mark.
pub fn check(raw: &str) -> Vec<LintWarning> {
    let text = strip_bom(raw);
    let start = raw.len() - text.len();
    let Some((header, _)) = split_template(text) else {
        return vec![LintWarning::new(
            LintCategory::MissingSeparator,
            "no line containing only '---'; the template will be skipped",
            0..raw.len(),
        )];
    };

    let mut warnings = Vec::new();
    let mut current: Option<Section> = None;
    let mut has_id = false;
    let mut offset = start;

    for line in header.split_inclusive('\n') {
        let content = line.trim_end_matches(['\n', '\r']);
        let span = offset..offset + content.len();
        offset += line.len();

        match HeaderLine::classify(content) {
            HeaderLine::Blank => {}
            HeaderLine::Item(text) => {
                if current.is_none() {
                    warnings.push(LintWarning::new(
                        LintCategory::OrphanItem,
                        format!("list item '{}' is not under Permissions, Conditions or Limitations", text),
                        span,
                    ));
                }
            }
            HeaderLine::Other => {
                warnings.push(LintWarning::new(
                    LintCategory::IgnoredLine,
                    "line is neither 'key: value' nor '- item' and is ignored",
                    span,
                ));
            }
            HeaderLine::Entry { key, value } => {
                if let Some(section) = Section::from_key(key) {
                    current = Some(section);
                    if !value.is_empty() {
                        warnings.push(LintWarning::new(
                            LintCategory::SectionValue,
                            format!("value after '{}:' is discarded; list items go on '- ' lines", key),
                            span,
                        ));
                    }
                    continue;
                }
                current = None;
                match ScalarKey::from_key(key) {
                    Some(ScalarKey::Id) => has_id = !value.is_empty(),
                    Some(_) => {}
                    None => warnings.push(LintWarning::new(
                        LintCategory::UnrecognizedKey,
                        format!("unrecognized key '{}' is ignored", key),
                        span,
                    )),
                }
            }
        }
    }

    if !has_id {
        warnings.push(LintWarning::new(
            LintCategory::MissingIdentifier,
            "header has no 'ID:' value; the template cannot be looked up",
            start..start + header.len(),
        ));
    }
    warnings
}
