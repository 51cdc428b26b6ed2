//! Placeholder substitution for license bodies

use crate::parser::LicenseRecord;

pub const NAME_PLACEHOLDER: &str = "{{name}}";
pub const YEAR_PLACEHOLDER: &str = "{{year}}";

/// Text substituted for `{{name}}` when no name is supplied
pub const FALLBACK_NAME: &str = "[fullname]";

/// Values supplied by the user for one render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderInput {
    pub name: Option<String>,
    pub year: Option<String>,
}

impl RenderInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the copyright holder name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the copyright year; accepts strings and integers alike
    pub fn with_year(mut self, year: impl ToString) -> Self {
        self.year = Some(year.to_string());
        self
    }

    /// The supplied name, treating an empty string as absent
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// The supplied year, treating an empty string as absent
    pub fn year(&self) -> Option<&str> {
        self.year.as_deref().filter(|year| !year.is_empty())
    }
}

/// Output of a single render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    pub rendered_text: String,
    /// The body contains `{{name}}`
    pub show_name_field: bool,
    /// The body contains `{{year}}`
    pub show_year_field: bool,
}

/// Substitute placeholders in the record's body.
///
/// `current_year` is used when the input carries no year. User values are
/// inserted verbatim.
///
/// # Example
///
/// ```rust
/// use licgen::{parse, render, RenderInput};
///
/// let record = parse("ID: mit\n---\nCopyright {{year}} {{name}}").unwrap();
/// let result = render(&record, &RenderInput::new().with_year("2030"), 2024);
/// assert_eq!(result.rendered_text, "Copyright 2030 [fullname]");
/// assert!(result.show_name_field);
/// ```
pub fn render(record: &LicenseRecord, input: &RenderInput, current_year: i32) -> RenderResult {
    let body = &record.body;
    let year = match input.year() {
        Some(year) => year.to_string(),
        None => current_year.to_string(),
    };
    let name = input.name().unwrap_or(FALLBACK_NAME);

    let rendered_text = body
        .replace(YEAR_PLACEHOLDER, &year)
        .replace(NAME_PLACEHOLDER, name);

    RenderResult {
        rendered_text,
        show_name_field: body.contains(NAME_PLACEHOLDER),
        show_year_field: body.contains(YEAR_PLACEHOLDER),
    }
}
