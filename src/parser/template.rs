//! Single-pass parser for license template documents

use crate::error::ParseError;

use super::record::{LicenseRecord, ScalarKey, Section};

/// Line separating the metadata header from the license body
pub const SEPARATOR: &str = "---";

/// Drop one leading UTF-8 byte-order mark
pub(crate) fn strip_bom(raw: &str) -> &str {
    raw.strip_prefix('\u{FEFF}').unwrap_or(raw)
}

/// A header line after trimming, classified by shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeaderLine<'a> {
    Blank,
    /// `- text`, carrying the trimmed text
    Item(&'a str),
    /// `key: value`, split at the first colon
    Entry { key: &'a str, value: &'a str },
    /// Neither an item nor a key/value pair
    Other,
}

impl<'a> HeaderLine<'a> {
    pub(crate) fn classify(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return HeaderLine::Blank;
        }
        if let Some(rest) = line.strip_prefix("- ") {
            return HeaderLine::Item(rest.trim());
        }
        match line.split_once(':') {
            Some((key, value)) => HeaderLine::Entry {
                key: key.trim(),
                value: value.trim(),
            },
            None => HeaderLine::Other,
        }
    }
}

/// Split a template at its first standalone separator line.
///
/// Returns the header (everything before the separator line) and the raw
/// remainder after the separator's three characters. A line counts as a
/// separator only when it holds exactly `---`, optionally followed by `\r`.
pub fn split_template(raw: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in raw.split_inclusive('\n') {
        let content = line.strip_suffix('\n').unwrap_or(line);
        let content = content.strip_suffix('\r').unwrap_or(content);
        if content == SEPARATOR {
            return Some((&raw[..offset], &raw[offset + SEPARATOR.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Parse one raw template into a [`LicenseRecord`].
///
/// Fails only when no separator line exists. Unknown keys, stray list items
/// and lines without a colon are ignored. An empty `id` is not an error.
/// A leading byte-order mark is skipped.
///
/// # Example
///
/// ```rust
/// use licgen::parse;
///
/// let record = parse("ID: mit\nPermissions:\n- modify\n---\nCopyright {{year}}").unwrap();
/// assert_eq!(record.id, "mit");
/// assert_eq!(record.permissions, vec!["modify"]);
/// assert_eq!(record.body, "Copyright {{year}}");
/// ```
pub fn parse(raw: &str) -> Result<LicenseRecord, ParseError> {
    let (header, rest) = split_template(strip_bom(raw)).ok_or_else(|| {
        ParseError::malformed(0..raw.len(), "missing '---' separator line")
    })?;

    let mut state = HeaderState::default();
    for line in header.lines() {
        state.feed(HeaderLine::classify(line));
    }
    Ok(state.finish(rest.trim()))
}

/// Accumulated header fields plus the active list section
#[derive(Debug, Default)]
struct HeaderState {
    current: Option<Section>,
    id: String,
    name: String,
    description: String,
    permissions: Vec<String>,
    conditions: Vec<String>,
    limitations: Vec<String>,
}

impl HeaderState {
    fn feed(&mut self, line: HeaderLine<'_>) {
        match line {
            HeaderLine::Blank | HeaderLine::Other => {}
            HeaderLine::Item(text) => {
                if let Some(section) = self.current {
                    self.items_mut(section).push(text.to_string());
                }
            }
            HeaderLine::Entry { key, value } => {
                if let Some(section) = Section::from_key(key) {
                    self.current = Some(section);
                    return;
                }
                self.current = None;
                match ScalarKey::from_key(key) {
                    Some(ScalarKey::Id) => self.id = value.to_string(),
                    Some(ScalarKey::Name) => self.name = value.to_string(),
                    Some(ScalarKey::Description) => self.description = value.to_string(),
                    None => {}
                }
            }
        }
    }

    fn items_mut(&mut self, section: Section) -> &mut Vec<String> {
        match section {
            Section::Permissions => &mut self.permissions,
            Section::Conditions => &mut self.conditions,
            Section::Limitations => &mut self.limitations,
        }
    }

    fn finish(self, body: &str) -> LicenseRecord {
        let name = if self.name.is_empty() {
            self.id.clone()
        } else {
            self.name
        };
        LicenseRecord {
            id: self.id,
            name,
            description: self.description,
            permissions: self.permissions,
            conditions: self.conditions,
            limitations: self.limitations,
            body: body.to_string(),
        }
    }
}
