//! Error types for template parsing

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No line consisting solely of `---` separates the header from the body
    #[error("malformed template: {message}")]
    MalformedTemplate { span: Span, message: String },
}

impl ParseError {
    /// Create a malformed template error covering `span`
    pub fn malformed(span: Span, message: impl Into<String>) -> Self {
        Self::MalformedTemplate {
            span,
            message: message.into(),
        }
    }

    /// Byte range in the raw template the error refers to
    pub fn span(&self) -> &Span {
        match self {
            Self::MalformedTemplate { span, .. } => span,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        match self {
            ParseError::MalformedTemplate { span, message } => format_report(
                ReportKind::Error,
                source,
                filename,
                span.clone(),
                message,
                "expected a line containing only '---' to separate header and body",
                Color::Red,
            )
            .unwrap_or_else(|| self.to_string()),
        }
    }
}

/// Build an ariadne report for a single labelled span.
///
/// Returns `None` when the report cannot be written, leaving the caller to
/// fall back to the plain `Display` form.
pub(crate) fn format_report(
    kind: ReportKind<'_>,
    source: &str,
    filename: &str,
    span: Span,
    message: &str,
    label: &str,
    color: Color,
) -> Option<String> {
    let end = span.end.min(source.len());
    let span = span.start.min(end)..end;

    let mut buf = Vec::new();
    Report::build(kind, filename, span.start)
        .with_message(message)
        .with_label(
            Label::new((filename, span))
                .with_message(label)
                .with_color(color),
        )
        .finish()
        .write((filename, Source::from(source)), &mut buf)
        .ok()?;
    String::from_utf8(buf).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let err = ParseError::malformed(0..5, "missing separator");
        assert_eq!(err.to_string(), "malformed template: missing separator");
        assert_eq!(err.span(), &(0..5));
    }

    #[test]
    fn test_format_includes_filename_and_message() {
        let source = "id: mit\nMIT License text";
        let err = ParseError::malformed(0..source.len(), "missing separator");
        let report = err.format(source, "mit.template");
        assert!(report.contains("mit.template"));
        assert!(report.contains("missing separator"));
    }

    #[test]
    fn test_format_clamps_out_of_range_span() {
        let err = ParseError::malformed(3..100, "missing separator");
        let report = err.format("abc", "short.template");
        assert!(report.contains("missing separator"));
    }
}
