//! SCSS partial with palette variables and lists

use std::fmt::Write;

use super::{GenerateContext, GenerationError};
use crate::core::color::Color;
use crate::core::palette::Palette;

fn scss_list<'a>(colors: impl IntoIterator<Item = &'a Color>) -> String {
    colors
        .into_iter()
        .map(Color::css_hex)
        .collect::<Vec<_>>()
        .join(", ")
}

pub(super) fn generate(
    palette: &Palette,
    _ctx: &GenerateContext,
) -> Result<String, GenerationError> {
    let mut out = String::new();
    writeln!(out, "$is-dark: {};", palette.is_dark)?;
    for (name, color) in palette.css_variables() {
        writeln!(out, "${}: {};", name, color.css_hex())?;
    }
    writeln!(out, "$base: ({});", scss_list(&palette.base16_colors))?;
    writeln!(out, "$ansi: ({});", scss_list(&palette.ansi_colors()))?;
    Ok(out)
}
