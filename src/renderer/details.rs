//! Plain-text summary of a license's metadata

use colored::{ColoredString, Colorize};

use crate::parser::{LicenseRecord, Section};

/// Shown when a record has no description
pub const NO_DESCRIPTION: &str = "No description available.";

/// Options for the details summary
#[derive(Debug, Clone)]
pub struct DetailsConfig {
    /// Colorize section titles and item markers
    pub color: bool,
    /// Indentation before each item
    pub indent: usize,
}

impl Default for DetailsConfig {
    fn default() -> Self {
        Self {
            color: true,
            indent: 2,
        }
    }
}

impl DetailsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable color output
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Set the item indentation
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// Marker printed before each item of a section
pub fn section_marker(section: Section) -> &'static str {
    match section {
        Section::Permissions => "✓",
        Section::Conditions => "ⓘ",
        Section::Limitations => "✗",
    }
}

fn styled_marker(section: Section) -> ColoredString {
    let marker = section_marker(section);
    match section {
        Section::Permissions => marker.green().bold(),
        Section::Conditions => marker.blue().bold(),
        Section::Limitations => marker.red().bold(),
    }
}

/// Summarize a record: its description, then each non-empty section.
pub fn render_details(record: &LicenseRecord, config: &DetailsConfig) -> String {
    let mut out = String::new();
    if record.description.is_empty() {
        out.push_str(NO_DESCRIPTION);
    } else {
        out.push_str(&record.description);
    }
    out.push('\n');

    let pad = " ".repeat(config.indent);
    for section in Section::ALL {
        let items = record.items(section);
        if items.is_empty() {
            continue;
        }

        out.push('\n');
        if config.color {
            out.push_str(&section.title().bold().to_string());
        } else {
            out.push_str(section.title());
        }
        out.push('\n');

        for item in items {
            let marker = if config.color {
                styled_marker(section).to_string()
            } else {
                section_marker(section).to_string()
            };
            out.push_str(&format!("{}{} {}\n", pad, marker, item));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn sample() -> LicenseRecord {
        LicenseRecord {
            id: "mit".to_string(),
            name: "MIT License".to_string(),
            description: "A short and simple permissive license.".to_string(),
            permissions: vec!["commercial-use".to_string(), "modify".to_string()],
            conditions: vec!["include-copyright".to_string()],
            limitations: vec!["liability".to_string(), "warranty".to_string()],
            body: String::new(),
        }
    }

    #[test]
    fn test_details_plain() {
        let text = render_details(&sample(), &DetailsConfig::new().with_color(false));
        assert_snapshot!(text.trim_end(), @r"
        A short and simple permissive license.

        Permissions
          ✓ commercial-use
          ✓ modify

        Conditions
          ⓘ include-copyright

        Limitations
          ✗ liability
          ✗ warranty
        ");
    }

    #[test]
    fn test_details_colored_markers() {
        colored::control::set_override(true);
        let text = render_details(&sample(), &DetailsConfig::new().with_color(true));
        colored::control::unset_override();

        assert!(text.contains("\x1b[1;32m✓\x1b[0m"), "{text:?}");
        assert!(text.contains("\x1b[1;34mⓘ\x1b[0m"), "{text:?}");
        assert!(text.contains("\x1b[1;31m✗\x1b[0m"), "{text:?}");
        assert!(text.contains("\x1b[1mPermissions\x1b[0m"), "{text:?}");
        assert!(text.contains("commercial-use"));
    }

    #[test]
    fn test_details_omit_empty_sections() {
        let mut record = sample();
        record.description.clear();
        record.conditions.clear();
        record.limitations.clear();
        let text = render_details(&record, &DetailsConfig::new().with_color(false).with_indent(0));
        assert_eq!(
            text,
            "No description available.\n\nPermissions\n✓ commercial-use\n✓ modify\n"
        );
    }
}
