//! Renderer for parsed license records
//!
//! Substitutes `{{name}}` and `{{year}}` in a record's body and derives
//! which inputs the body actually uses. Also produces the metadata summary
//! and the equivalent command line for a render.

pub mod command;
pub mod details;
pub mod text;

pub use command::command_preview;
pub use details::{render_details, DetailsConfig};
pub use text::{
    render, RenderInput, RenderResult, FALLBACK_NAME, NAME_PLACEHOLDER, YEAR_PLACEHOLDER,
};
