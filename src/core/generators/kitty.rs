//! kitty terminal config (`key value` lines)

use std::fmt::Write;

use super::{GenerateContext, GenerationError};
use crate::core::color::Color;
use crate::core::palette::Palette;

pub(super) fn generate(
    palette: &Palette,
    _ctx: &GenerateContext,
) -> Result<String, GenerationError> {
    let mut out = String::new();
    let mut color = |key: &str, color: Color| writeln!(out, "{} {}", key, color.css_hex());

    let ansi = palette.ansi_colors();
    color("background", palette.bg())?;
    color("foreground", palette.fg())?;
    color("cursor", palette.cursor_bg())?;
    color("cursor_text_color", palette.cursor_fg())?;
    color("selection_background", palette.selection_bg())?;
    color("selection_foreground", palette.selection_fg())?;
    for (index, &c) in ansi.iter().enumerate() {
        color(&format!("color{}", index), c)?;
    }
    color("url_color", palette.link_color())?;

    color("active_border_color", ansi[2])?;
    color("inactive_border_color", ansi[8])?;
    color("bell_border_color", ansi[1])?;

    // tab bar reads base16 slots directly
    color("active_tab_foreground", palette.base(0x1))?;
    color("active_tab_background", palette.base(0xB))?;
    color("inactive_tab_foreground", palette.base(0x4))?;
    color("inactive_tab_background", palette.base(0x1))?;
    color("tab_bar_background", palette.base(0x1))?;

    Ok(out)
}
