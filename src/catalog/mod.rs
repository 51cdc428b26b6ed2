//! License catalog: the id-keyed collection of parsed templates
//!
//! Templates come from any string source. Each is parsed on its own, so a
//! malformed document is reported and skipped without affecting the rest.
//!
//! # Example
//!
//! ```rust
//! use licgen::LicenseCatalog;
//!
//! let mut catalog = LicenseCatalog::new();
//! let report = catalog.load_sources([
//!     ("mit.template", "ID: mit\n---\nMIT text"),
//!     ("broken.template", "ID: broken\nno separator"),
//! ]);
//! assert_eq!(report.loaded, vec!["mit".to_string()]);
//! assert_eq!(report.skipped.len(), 1);
//! assert!(catalog.get("mit").is_some());
//! ```

mod registry;

pub use registry::{
    template_files, CatalogError, LicenseCatalog, LoadReport, SkipReason, SkippedTemplate,
    TEMPLATE_EXTENSION,
};
