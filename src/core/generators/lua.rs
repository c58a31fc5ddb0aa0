//! Lua module returning the palette as a table, for the Neovim config

use std::fmt::Write;

use super::{GenerateContext, GenerationError};
use crate::core::palette::{
    Palette, ANSI_LINK_COLOR_IDX, ANSI_TO_BASE16, BASE16_BG_COLOR_IDX, BASE16_FG_COLOR_IDX,
    BASE16_SELECTION_BG_COLOR_IDX, BASE16_TO_ANSI, EXTENDED_ANSI_TO_BASE16,
};

pub(super) fn generate(
    palette: &Palette,
    _ctx: &GenerateContext,
) -> Result<String, GenerationError> {
    let mut out = String::new();
    writeln!(out, "local theme = {{}}")?;
    writeln!(out, "theme.base16_name = {}", serde_json::to_string(&palette.base16_name)?)?;
    writeln!(out, "theme.is_dark = {}", palette.is_dark)?;

    writeln!(
        out,
        "---@type table<integer, {{ gui: integer, cterm: integer, r: integer, g: integer, b: integer }}>"
    )?;
    writeln!(out, "local colors = {{")?;
    for (index, (gui, cterm)) in palette.base16_colors.iter().zip(BASE16_TO_ANSI).enumerate() {
        writeln!(
            out,
            "  [{:2}] = {{ gui = 0x{:06x}, cterm = {:2}, r = 0x{:02x}, g = 0x{:02x}, b = 0x{:02x} }},",
            index,
            gui.rgb888(),
            cterm,
            gui.r,
            gui.g,
            gui.b
        )?;
    }
    writeln!(out, "}}")?;
    writeln!(out, "theme.base16_colors = colors")?;

    writeln!(out, "theme.ansi_colors = {{")?;
    for index in EXTENDED_ANSI_TO_BASE16 {
        writeln!(out, "  colors[{}],", index)?;
    }
    writeln!(out, "}}")?;

    let roles = [
        ("bg", BASE16_BG_COLOR_IDX),
        ("fg", BASE16_FG_COLOR_IDX),
        ("cursor_bg", BASE16_FG_COLOR_IDX),
        ("cursor_fg", BASE16_BG_COLOR_IDX),
        ("selection_bg", BASE16_SELECTION_BG_COLOR_IDX),
        ("selection_fg", BASE16_FG_COLOR_IDX),
        ("link_color", ANSI_TO_BASE16[ANSI_LINK_COLOR_IDX]),
    ];
    for (name, index) in roles {
        writeln!(out, "theme.{} = colors[{}]", name, index)?;
    }

    let forward: Vec<String> = EXTENDED_ANSI_TO_BASE16
        .iter()
        .map(|i| format!("0x{:X}", i))
        .collect();
    writeln!(out, "---@type table<integer, integer>")?;
    writeln!(out, "theme.ansi_to_base16_mapping = {{{}}}", forward.join(", "))?;

    let inverse: Vec<String> = BASE16_TO_ANSI.iter().map(|i| format!("0x{:02X}", i)).collect();
    writeln!(out, "---@type table<integer, integer>")?;
    writeln!(out, "theme.base16_to_ansi_mapping = {{{}}}", inverse.join(", "))?;

    writeln!(out, "return theme")?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render() -> String {
        generate(&Palette::eighties(), &GenerateContext::default()).unwrap()
    }

    #[test]
    fn test_colors_table() {
        let out = render();
        assert!(out.starts_with(
            "local theme = {}\ntheme.base16_name = \"eighties\"\ntheme.is_dark = true\n"
        ));
        assert!(out.contains(
            "  [ 0] = { gui = 0x2d2d2d, cterm =  0, r = 0x2d, g = 0x2d, b = 0x2d },\n"
        ));
        assert!(out.contains(
            "  [15] = { gui = 0xd27b53, cterm = 17, r = 0xd2, g = 0x7b, b = 0x53 },\n"
        ));
    }

    #[test]
    fn test_ansi_colors_index_colors_table() {
        let out = render();
        let block = out.split("theme.ansi_colors = {\n").nth(1).unwrap();
        let entries: Vec<&str> = block.lines().take_while(|l| *l != "}").collect();
        assert_eq!(entries.len(), EXTENDED_ANSI_TO_BASE16.len());
        assert_eq!(entries[1], "  colors[8],");
        assert_eq!(entries[21], "  colors[6],");
    }

    #[test]
    fn test_roles_and_mappings() {
        let out = render();
        assert!(out.contains("theme.selection_bg = colors[2]\n"));
        assert!(out.contains("theme.link_color = colors[13]\n"));
        assert!(out.contains("theme.ansi_to_base16_mapping = {0x0, 0x8, 0xB, 0xA, "));
        assert!(out.contains("theme.base16_to_ansi_mapping = {0x00, 0x12, 0x13, 0x08, "));
        assert!(out.ends_with("return theme\n"));
    }
}
