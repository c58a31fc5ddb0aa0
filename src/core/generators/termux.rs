//! Termux `colors.properties`

use std::fmt::Write;

use super::{GenerateContext, GenerationError};
use crate::core::palette::Palette;

pub(super) fn generate(
    palette: &Palette,
    _ctx: &GenerateContext,
) -> Result<String, GenerationError> {
    let mut out = String::new();
    writeln!(out, "background={}", palette.bg().css_hex())?;
    writeln!(out, "foreground={}", palette.fg().css_hex())?;
    writeln!(out, "cursor={}", palette.cursor_bg().css_hex())?;
    for (index, color) in palette.ansi_colors().iter().enumerate() {
        writeln!(out, "color{}={}", index, color.css_hex())?;
    }
    Ok(out)
}
