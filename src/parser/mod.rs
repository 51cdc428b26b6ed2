//! Parser for license template documents
//!
//! A template is a metadata header and a license body separated by a line
//! holding only `---`:
//!
//! ```text
//! ID: mit
//! Name: MIT License
//! Permissions:
//! - commercial-use
//! - modify
//! ---
//! Copyright (c) {{year}} {{name}}
//! ```

pub mod record;
mod template;

pub use record::{LicenseRecord, ScalarKey, Section};
pub(crate) use template::{strip_bom, HeaderLine};
pub use template::{parse, split_template, SEPARATOR};
