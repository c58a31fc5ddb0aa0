//! Vimscript variables under the `dotfiles#colorscheme#` autoload namespace

use std::fmt::Write;

use super::{GenerateContext, GenerationError};
use crate::core::palette::{Palette, EXTENDED_ANSI_TO_BASE16};

const NAMESPACE: &str = "dotfiles#colorscheme#";

pub(super) fn generate(
    palette: &Palette,
    _ctx: &GenerateContext,
) -> Result<String, GenerationError> {
    let mut out = String::new();
    writeln!(out, "let {}name = {}", NAMESPACE, serde_json::to_string(&palette.name())?)?;
    writeln!(
        out,
        "let {}base16_name = {}",
        NAMESPACE,
        serde_json::to_string(&palette.base16_name)?
    )?;
    writeln!(out, "let {}is_dark = {}", NAMESPACE, u8::from(palette.is_dark))?;

    writeln!(out, "let {}base16_colors = [", NAMESPACE)?;
    for (gui, cterm) in palette.base16_colors.iter().zip(palette.base_to_ansi()) {
        writeln!(
            out,
            "\\ {{'gui': '{}', 'cterm': {:2}, 'r': 0x{:02x}, 'g': 0x{:02x}, 'b': 0x{:02x}}},",
            gui.css_hex(),
            cterm,
            gui.r,
            gui.g,
            gui.b
        )?;
    }
    writeln!(out, "\\ ]")?;

    let mapping: Vec<String> = EXTENDED_ANSI_TO_BASE16
        .iter()
        .map(|i| format!("0x{:X}", i))
        .collect();
    writeln!(out, "let {}ansi_colors_mapping = [{}]", NAMESPACE, mapping.join(", "))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_variables() {
        let out = generate(&Palette::eighties(), &GenerateContext::default()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "let dotfiles#colorscheme#name = \"base16-eighties\"");
        assert_eq!(lines[1], "let dotfiles#colorscheme#base16_name = \"eighties\"");
        assert_eq!(lines[2], "let dotfiles#colorscheme#is_dark = 1");
        assert_eq!(lines[3], "let dotfiles#colorscheme#base16_colors = [");
    }

    #[test]
    fn test_colors_carry_terminal_slot() {
        let out = generate(&Palette::eighties(), &GenerateContext::default()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[4],
            "\\ {'gui': '#2d2d2d', 'cterm':  0, 'r': 0x2d, 'g': 0x2d, 'b': 0x2d},"
        );
        assert_eq!(
            lines[5],
            "\\ {'gui': '#393939', 'cterm': 18, 'r': 0x39, 'g': 0x39, 'b': 0x39},"
        );
        assert_eq!(lines[20], "\\ ]");
    }

    #[test]
    fn test_forward_mapping() {
        let out = generate(&Palette::eighties(), &GenerateContext::default()).unwrap();
        assert!(out.ends_with(
            "let dotfiles#colorscheme#ansi_colors_mapping = [0x0, 0x8, 0xB, 0xA, 0xD, 0xE, 0xC, 0x5, \
             0x3, 0x8, 0xB, 0xA, 0xD, 0xE, 0xC, 0x7, 0x9, 0xF, 0x1, 0x2, 0x4, 0x6]\n"
        ));
    }
}
