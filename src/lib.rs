//! licgen - license templates with substitution placeholders
//!
//! This library parses license templates (a metadata header, a `---` line,
//! then the license body) and renders the body with a name and a year.
//!
//! # Example
//!
//! ```rust
//! use licgen::{generate, RenderInput};
//!
//! let template = "ID: mit\nName: MIT License\n---\nCopyright (c) {{year}} {{name}}";
//! let result = generate(template, &RenderInput::new().with_name("Ada"), 2030).unwrap();
//! assert_eq!(result.rendered_text, "Copyright (c) 2030 Ada");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod lint;
pub mod parser;
pub mod renderer;

pub use catalog::{CatalogError, LicenseCatalog, LoadReport};
pub use config::{Config, ConfigError};
pub use error::ParseError;
pub use lint::{LintCategory, LintWarning};
pub use parser::{parse, LicenseRecord, Section};
pub use renderer::{
    command_preview, render, render_details, DetailsConfig, RenderInput, RenderResult,
};

use chrono::Datelike;
use thiserror::Error;

/// Errors surfaced by the library's entry points
#[derive(Debug, Error)]
pub enum LicgenError {
    /// Template could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Catalog lookup or loading failed
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Configuration could not be loaded
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Parse a single template and render it in one step
pub fn generate(
    raw: &str,
    input: &RenderInput,
    current_year: i32,
) -> Result<RenderResult, LicgenError> {
    let record = parse(raw)?;
    Ok(render(&record, input, current_year))
}

/// Look up `id` in `catalog` and render it
pub fn generate_from_catalog(
    catalog: &LicenseCatalog,
    id: &str,
    input: &RenderInput,
    current_year: i32,
) -> Result<RenderResult, LicgenError> {
    let record = catalog.lookup(id)?;
    Ok(render(record, input, current_year))
}

/// Calendar year from the local clock, the fallback for `{{year}}`
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
