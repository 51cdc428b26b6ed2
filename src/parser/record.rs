//! Structured form of a parsed license template

use std::fmt;

/// One of the list-valued header sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Permissions,
    Conditions,
    Limitations,
}

impl Section {
    /// All sections in display order
    pub const ALL: [Section; 3] = [
        Section::Permissions,
        Section::Conditions,
        Section::Limitations,
    ];

    /// Match a header key against the section names, ignoring case
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| key.eq_ignore_ascii_case(section.as_str()))
    }

    /// Lower-case section name
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Permissions => "permissions",
            Section::Conditions => "conditions",
            Section::Limitations => "limitations",
        }
    }

    /// Capitalized title, as written in template headers
    pub fn title(&self) -> &'static str {
        match self {
            Section::Permissions => "Permissions",
            Section::Conditions => "Conditions",
            Section::Limitations => "Limitations",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scalar header keys that populate a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKey {
    Id,
    Name,
    Description,
}

impl ScalarKey {
    pub fn from_key(key: &str) -> Option<Self> {
        if key.eq_ignore_ascii_case("id") {
            Some(ScalarKey::Id)
        } else if key.eq_ignore_ascii_case("name") {
            Some(ScalarKey::Name)
        } else if key.eq_ignore_ascii_case("description") {
            Some(ScalarKey::Description)
        } else {
            None
        }
    }
}

/// A parsed license template
///
/// Records are immutable once built; the parser is the only producer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseRecord {
    /// Lookup key, case as written in the source. May be empty.
    pub id: String,
    /// Display name, falling back to `id` when the header omits it
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
    pub conditions: Vec<String>,
    pub limitations: Vec<String>,
    /// License text following the separator, trimmed
    pub body: String,
}

impl LicenseRecord {
    /// Items of `section` in declared order
    pub fn items(&self, section: Section) -> &[String] {
        match section {
            Section::Permissions => &self.permissions,
            Section::Conditions => &self.conditions,
            Section::Limitations => &self.limitations,
        }
    }

    /// Whether the record carries a usable lookup key
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// Re-emit a canonical header for this record.
    ///
    /// `header_text() + "---\n" + body` parses back to an equal record.
    pub fn header_text(&self) -> String {
        let mut out = String::new();
        if !self.id.is_empty() {
            out.push_str(&format!("ID: {}\n", self.id));
        }
        if !self.name.is_empty() && self.name != self.id {
            out.push_str(&format!("Name: {}\n", self.name));
        }
        if !self.description.is_empty() {
            out.push_str(&format!("Description: {}\n", self.description));
        }
        for section in Section::ALL {
            let items = self.items(section);
            if items.is_empty() {
                continue;
            }
            out.push_str(section.title());
            out.push_str(":\n");
            for item in items {
                out.push_str(&format!("- {}\n", item));
            }
        }
        out
    }
}
