//! mintty `.minttyrc` (`Name=R,G,B`)

use std::fmt::Write;

use super::{GenerateContext, GenerationError};
use crate::core::color::Color;
use crate::core::palette::{Palette, ANSI_COLOR_NAMES};

pub(super) fn generate(
    palette: &Palette,
    _ctx: &GenerateContext,
) -> Result<String, GenerationError> {
    let mut out = String::new();
    let mut color = |name: &str, c: Color| writeln!(out, "{}={},{},{}", name, c.r, c.g, c.b);

    color("BackgroundColour", palette.bg())?;
    color("ForegroundColour", palette.fg())?;
    color("CursorColour", palette.cursor_bg())?;
    let ansi = palette.ansi_colors();
    for (index, &name) in ANSI_COLOR_NAMES.iter().enumerate() {
        color(name, ansi[index])?;
        color(&format!("Bold{}", name), ansi[index + 8])?;
    }
    Ok(out)
}
