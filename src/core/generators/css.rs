//! CSS custom properties on `:root`

use std::fmt::Write;

use super::{GenerateContext, GenerationError, CSS_VARIABLES_PREFIX};
use crate::core::palette::Palette;

pub(super) fn generate(
    palette: &Palette,
    _ctx: &GenerateContext,
) -> Result<String, GenerationError> {
    let mut out = String::new();
    writeln!(out, ":root {{")?;
    for (name, color) in palette.css_variables() {
        writeln!(out, "  --{}{}: {};", CSS_VARIABLES_PREFIX, name, color.css_hex())?;
    }
    writeln!(out, "}}")?;
    Ok(out)
}
