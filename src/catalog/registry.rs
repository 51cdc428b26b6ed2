//! Catalog storage and template loading

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::ParseError;
use crate::parser::{parse, LicenseRecord};

/// File extension of template documents
pub const TEMPLATE_EXTENSION: &str = "template";

/// Errors that can occur during catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Template directory could not be read
    #[error("error reading templates from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parsed record has an empty id and cannot be looked up
    #[error("template '{name}' has no id")]
    MissingIdentifier { name: String },

    /// No record with the requested id
    #[error("license not found: {id}{}", format_suggestions(.suggestions))]
    NotFound { id: String, suggestions: Vec<String> },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

/// Why a template was left out of the catalog
#[derive(Debug)]
pub enum SkipReason {
    Malformed(ParseError),
    MissingIdentifier,
    Unreadable(String),
    /// Refused by the catalog for any other reason
    Rejected(CatalogError),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Malformed(err) => write!(f, "{}", err),
            SkipReason::MissingIdentifier => write!(f, "template has no id"),
            SkipReason::Unreadable(message) => write!(f, "unreadable: {}", message),
            SkipReason::Rejected(err) => write!(f, "{}", err),
        }
    }
}

/// A template that did not make it into the catalog
#[derive(Debug)]
pub struct SkippedTemplate {
    /// Where the template came from (file name or caller-supplied label)
    pub origin: String,
    pub reason: SkipReason,
}

/// Outcome of loading a batch of templates
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Ids inserted, in load order
    pub loaded: Vec<String>,
    /// Ids that displaced an earlier record with the same id
    pub replaced: Vec<String>,
    pub skipped: Vec<SkippedTemplate>,
}

impl LoadReport {
    fn skip(&mut self, origin: &str, reason: SkipReason) {
        tracing::warn!("skipping template {}: {}", origin, reason);
        self.skipped.push(SkippedTemplate {
            origin: origin.to_string(),
            reason,
        });
    }
}

/// In-memory mapping of license id to parsed record
#[derive(Debug, Default, Clone)]
pub struct LicenseCatalog {
    records: HashMap<String, LicenseRecord>,
}

impl LicenseCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every template file in `dir`
    pub fn from_dir(dir: &Path) -> Result<(Self, LoadReport), CatalogError> {
        let mut catalog = Self::new();
        let report = catalog.load_dir(dir)?;
        Ok((catalog, report))
    }

    /// Insert a record, replacing any record with the same id.
    ///
    /// Returns the displaced record. Records without an id are refused.
    pub fn insert(&mut self, record: LicenseRecord) -> Result<Option<LicenseRecord>, CatalogError> {
        if !record.has_id() {
            return Err(CatalogError::MissingIdentifier { name: record.name });
        }
        let previous = self.records.insert(record.id.clone(), record);
        if let Some(prev) = &previous {
            tracing::warn!("duplicate license id '{}': later template replaces earlier one", prev.id);
        }
        Ok(previous)
    }

    /// Parse and insert each `(origin, raw)` pair in order.
    ///
    /// Failures are collected in the report; they never stop the batch.
    pub fn load_sources<I, O, S>(&mut self, sources: I) -> LoadReport
    where
        I: IntoIterator<Item = (O, S)>,
        O: AsRef<str>,
        S: AsRef<str>,
    {
        let mut report = LoadReport::default();
        for (origin, raw) in sources {
            self.load_one(origin.as_ref(), raw.as_ref(), &mut report);
        }
        report
    }

    fn load_one(&mut self, origin: &str, raw: &str, report: &mut LoadReport) {
        let record = match parse(raw) {
            Ok(record) => record,
            Err(err) => {
                report.skip(origin, SkipReason::Malformed(err));
                return;
            }
        };

        let id = record.id.clone();
        match self.insert(record) {
            Ok(previous) => {
                tracing::debug!("loaded license '{}' from {}", id, origin);
                if previous.is_some() {
                    report.replaced.push(id.clone());
                }
                report.loaded.push(id);
            }
            Err(CatalogError::MissingIdentifier { .. }) => {
                report.skip(origin, SkipReason::MissingIdentifier)
            }
            Err(err) => report.skip(origin, SkipReason::Rejected(err)),
        }
    }

    /// Load every `*.template` file in `dir`, in file-name order
    pub fn load_dir(&mut self, dir: &Path) -> Result<LoadReport, CatalogError> {
        let mut report = LoadReport::default();
        for path in template_files(dir)? {
            let origin = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            match fs::read_to_string(&path) {
                Ok(raw) => self.load_one(&origin, &raw, &mut report),
                Err(e) => report.skip(&origin, SkipReason::Unreadable(e.to_string())),
            }
        }
        Ok(report)
    }

    /// Get a record by id
    pub fn get(&self, id: &str) -> Option<&LicenseRecord> {
        self.records.get(id)
    }

    /// Get a record by id, with near-miss suggestions on failure
    pub fn lookup(&self, id: &str) -> Result<&LicenseRecord, CatalogError> {
        self.get(id).ok_or_else(|| CatalogError::NotFound {
            id: id.to_string(),
            suggestions: self.suggestions(id),
        })
    }

    /// Ids that differ from `id` only by case or share a prefix with it
    pub fn suggestions(&self, id: &str) -> Vec<String> {
        let wanted = id.to_lowercase();
        if wanted.is_empty() {
            return Vec::new();
        }
        self.ids()
            .into_iter()
            .filter(|candidate| {
                let candidate = candidate.to_lowercase();
                candidate.starts_with(&wanted) || wanted.starts_with(&candidate)
            })
            .map(str::to_string)
            .collect()
    }

    /// Check if a record exists
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// All ids, sorted ascending
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.records.keys().map(|s| s.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    /// Records in id order
    pub fn iter(&self) -> impl Iterator<Item = &LicenseRecord> {
        self.ids()
            .into_iter()
            .filter_map(move |id| self.records.get(id))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Template files in `dir`, sorted by path
pub fn template_files(dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let io_err = |source| CatalogError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == TEMPLATE_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(id: &str, body: &str) -> LicenseRecord {
        parse(&format!("ID: {}\n---\n{}", id, body)).unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let mut catalog = LicenseCatalog::new();
        assert!(catalog.insert(record("mit", "text")).unwrap().is_none());
        assert!(catalog.contains("mit"));
        assert_eq!(catalog.get("mit").map(|r| r.body.as_str()), Some("text"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_duplicate_id_last_write_wins() {
        let mut catalog = LicenseCatalog::new();
        catalog.insert(record("mit", "first")).unwrap();
        let displaced = catalog.insert(record("mit", "second")).unwrap();
        assert_eq!(displaced.map(|r| r.body), Some("first".to_string()));
        assert_eq!(catalog.get("mit").unwrap().body, "second");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_ids_are_case_sensitive_keys() {
        let mut catalog = LicenseCatalog::new();
        catalog.insert(record("MIT", "upper")).unwrap();
        catalog.insert(record("mit", "lower")).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_missing_id_refused() {
        let mut catalog = LicenseCatalog::new();
        let nameless = parse("Name: Nameless\n---\ntext").unwrap();
        let result = catalog.insert(nameless);
        assert!(matches!(result, Err(CatalogError::MissingIdentifier { .. })));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_sources_continues_past_failures() {
        let mut catalog = LicenseCatalog::new();
        let report = catalog.load_sources([
            ("a", "ID: isc\n---\nISC"),
            ("b", "no separator here"),
            ("c", "Name: no id\n---\ntext"),
            ("d", "ID: mit\n---\nMIT"),
            ("e", "ID: isc\n---\nISC again"),
        ]);
        assert_eq!(report.loaded, vec!["isc", "mit", "isc"]);
        assert_eq!(report.replaced, vec!["isc"]);
        let skipped: Vec<&str> = report.skipped.iter().map(|s| s.origin.as_str()).collect();
        assert_eq!(skipped, vec!["b", "c"]);
        assert!(matches!(report.skipped[0].reason, SkipReason::Malformed(_)));
        assert!(matches!(report.skipped[1].reason, SkipReason::MissingIdentifier));
        assert_eq!(catalog.ids(), vec!["isc", "mit"]);
        assert_eq!(catalog.get("isc").unwrap().body, "ISC again");
    }

    #[test]
    fn test_lookup_suggests_near_misses() {
        let mut catalog = LicenseCatalog::new();
        catalog.insert(record("bsd-2-clause", "")).unwrap();
        catalog.insert(record("bsd-3-clause", "")).unwrap();
        catalog.insert(record("mit", "")).unwrap();

        let err = catalog.lookup("bsd").unwrap_err();
        match &err {
            CatalogError::NotFound { suggestions, .. } => {
                assert_eq!(suggestions, &vec!["bsd-2-clause", "bsd-3-clause"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("did you mean"));

        assert_eq!(catalog.suggestions("MIT"), vec!["mit"]);
        assert!(catalog.suggestions("gpl").is_empty());
    }

    #[test]
    fn test_iter_in_id_order() {
        let mut catalog = LicenseCatalog::new();
        catalog.insert(record("zlib", "")).unwrap();
        catalog.insert(record("apache", "")).unwrap();
        let ids: Vec<&str> = catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["apache", "zlib"]);
    }
}
