//! Equivalent command-line invocation for a render

use super::text::RenderInput;

/// Name of the command-line binary
pub const BINARY_NAME: &str = "licgen";

/// Build the `licgen` invocation that reproduces a render.
///
/// Flags appear only for values the user actually supplied.
pub fn command_preview(id: &str, input: &RenderInput) -> String {
    let mut cmd = format!("{} {}", BINARY_NAME, id);
    if let Some(name) = input.name() {
        cmd.push_str(&format!(" --name \"{}\"", name));
    }
    if let Some(year) = input.year() {
        cmd.push_str(&format!(" --year {}", year));
    }
    cmd
}
