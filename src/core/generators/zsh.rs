//! Shell variables sourced by the zsh config

use std::fmt::Write;

use super::{GenerateContext, GenerationError};
use crate::core::palette::Palette;

pub(super) fn generate(
    palette: &Palette,
    _ctx: &GenerateContext,
) -> Result<String, GenerationError> {
    let mut out = String::new();
    let named = [
        ("bg", palette.bg()),
        ("fg", palette.fg()),
        ("cursor_bg", palette.cursor_bg()),
        ("cursor_fg", palette.cursor_fg()),
        ("selection_bg", palette.selection_bg()),
        ("selection_fg", palette.selection_fg()),
        ("link_color", palette.link_color()),
    ];
    for (name, color) in named {
        writeln!(out, "colorscheme_{}={}", name, color.hex())?;
    }

    writeln!(out, "colorscheme_ansi_colors=(")?;
    for color in palette.ansi_colors() {
        writeln!(out, "  {}", color.hex())?;
    }
    writeln!(out, ")")?;
    Ok(out)
}
