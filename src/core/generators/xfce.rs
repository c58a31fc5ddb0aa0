//! XFCE Terminal color scheme (`.theme` key file)

use std::fmt::Write;

use super::{GenerateContext, GenerationError};
use crate::core::palette::Palette;

const SCHEME_NAME: &str = "dotfiles colorscheme";

pub(super) fn generate(
    palette: &Palette,
    _ctx: &GenerateContext,
) -> Result<String, GenerationError> {
    let mut out = String::new();
    writeln!(out, "[Scheme]")?;
    writeln!(out, "Name={}", SCHEME_NAME)?;
    writeln!(out, "ColorForeground={}", palette.fg().css_hex())?;
    writeln!(out, "ColorBackground={}", palette.bg().css_hex())?;
    writeln!(out, "ColorCursorUseDefault=FALSE")?;
    writeln!(out, "ColorCursorForeground={}", palette.cursor_fg().css_hex())?;
    writeln!(out, "ColorCursor={}", palette.cursor_bg().css_hex())?;
    writeln!(out, "ColorSelectionUseDefault=FALSE")?;
    writeln!(out, "ColorSelection={}", palette.selection_fg().css_hex())?;
    writeln!(out, "ColorSelectionBackground={}", palette.selection_bg().css_hex())?;
    writeln!(out, "TabActivityColor={}", palette.base(0x8).css_hex())?;
    writeln!(out, "ColorBoldUseDefault=TRUE")?;
    writeln!(out, "ColorBold={}", palette.fg().css_hex())?;

    let colors: Vec<String> = palette.ansi_colors().iter().map(|c| c.css_hex()).collect();
    writeln!(out, "ColorPalette={}", colors.join(";"))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generators::tests::traced_palette;

    #[test]
    fn test_scheme_keys() {
        let out = generate(&Palette::eighties(), &GenerateContext::default()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "[Scheme]");
        assert_eq!(lines[2], "ColorForeground=#d3d0c8");
        assert_eq!(lines[5], "ColorCursorForeground=#2d2d2d");
        assert_eq!(lines[8], "ColorSelection=#d3d0c8");
        assert_eq!(lines[9], "ColorSelectionBackground=#515151");
    }

    #[test]
    fn test_palette_line() {
        let out = generate(&traced_palette(), &GenerateContext::default()).unwrap();
        assert!(out.contains("TabActivityColor=#888888\n"));
        let palette = out.lines().last().unwrap();
        let entries: Vec<&str> = palette.trim_start_matches("ColorPalette=").split(';').collect();
        assert_eq!(entries.len(), 16);
        assert_eq!(entries[..3], ["#000000", "#888888", "#bbbbbb"]);
    }
}
