//! Command output rendering
//!
//! Commands print either human-readable text or pretty JSON for scripting.

use std::fmt::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use crate::core::color::Color;
use crate::core::palette::Palette;

/// CLI output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON format for scripting
    Json,
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Named role colors
#[derive(Debug, Clone, Serialize)]
pub struct RoleColors {
    /// Background
    pub bg: Color,
    /// Foreground
    pub fg: Color,
    /// Cursor block
    pub cursor_bg: Color,
    /// Text under the cursor
    pub cursor_fg: Color,
    /// Selection background
    pub selection_bg: Color,
    /// Selection foreground
    pub selection_fg: Color,
    /// Hyperlinks
    pub link_color: Color,
}

/// A palette together with its derived views
#[derive(Debug, Clone, Serialize)]
pub struct PaletteView {
    /// `base16-<name>`
    pub name: String,
    /// Bare scheme name
    pub base16_name: String,
    /// Dark theme flag
    pub is_dark: bool,
    /// The sixteen base16 slots
    pub base16_colors: Vec<Color>,
    /// The sixteen ANSI colors
    pub ansi_colors: Vec<Color>,
    /// Role colors
    pub roles: RoleColors,
    /// CSS variables in output order
    pub css_variables: serde_json::Map<String, serde_json::Value>,
}

impl From<&Palette> for PaletteView {
    fn from(palette: &Palette) -> Self {
        Self {
            name: palette.name(),
            base16_name: palette.base16_name.clone(),
            is_dark: palette.is_dark,
            base16_colors: palette.base16_colors.to_vec(),
            ansi_colors: palette.ansi_colors().to_vec(),
            roles: RoleColors {
                bg: palette.bg(),
                fg: palette.fg(),
                cursor_bg: palette.cursor_bg(),
                cursor_fg: palette.cursor_fg(),
                selection_bg: palette.selection_bg(),
                selection_fg: palette.selection_fg(),
                link_color: palette.link_color(),
            },
            css_variables: palette
                .css_variables()
                .into_iter()
                .map(|(name, color)| (name, serde_json::Value::String(color.css_hex())))
                .collect(),
        }
    }
}

fn swatch(color: Color) -> String {
    format!("\x1b[48;2;{};{};{}m    \x1b[0m ", color.r, color.g, color.b)
}

/// Text listing of a palette; `swatches` adds true-color blocks
pub fn render_palette(palette: &Palette, swatches: bool) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let line = |out: &mut String, label: &str, color: Color| {
        let block = if swatches { swatch(color) } else { String::new() };
        writeln!(out, "  {}{:<14} {}", block, label, color)
    };

    writeln!(
        out,
        "{} ({})",
        palette.name(),
        if palette.is_dark { "dark" } else { "light" }
    )?;
    writeln!(out, "{:-<40}", "")?;
    for (index, &color) in palette.base16_colors.iter().enumerate() {
        line(&mut out, &format!("base{:02X}", index), color)?;
    }

    writeln!(out)?;
    writeln!(out, "Roles:")?;
    for (label, color) in [
        ("bg", palette.bg()),
        ("fg", palette.fg()),
        ("cursor_bg", palette.cursor_bg()),
        ("cursor_fg", palette.cursor_fg()),
        ("selection_bg", palette.selection_bg()),
        ("selection_fg", palette.selection_fg()),
        ("link_color", palette.link_color()),
    ] {
        line(&mut out, label, color)?;
    }

    writeln!(out)?;
    writeln!(out, "ANSI:")?;
    for (index, &color) in palette.ansi_colors().iter().enumerate() {
        line(&mut out, &format!("color{}", index), color)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_view_json() {
        let view = PaletteView::from(&Palette::eighties());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["name"], "base16-eighties");
        assert_eq!(json["is_dark"], true);
        assert_eq!(json["base16_colors"][8], "#f2777a");
        assert_eq!(json["ansi_colors"][1], "#f2777a");
        assert_eq!(json["roles"]["link_color"], "#6699cc");
        assert_eq!(json["css_variables"]["selection-bg"], "#515151");

        let keys: Vec<&String> = view.css_variables.keys().collect();
        assert_eq!(keys[0], "bg");
        assert_eq!(keys[21], "base-0F");
    }

    #[test]
    fn test_render_palette_text() {
        let text = render_palette(&Palette::eighties(), false).unwrap();
        assert!(text.starts_with("base16-eighties (dark)\n"));
        assert!(text.contains("  base0A         #ffcc66\n"));
        assert!(text.contains("  link_color     #6699cc\n"));
        assert!(text.contains("  color15        #f2f0ec\n"));
        assert!(!text.contains('\x1b'));

        let colored = render_palette(&Palette::eighties(), true).unwrap();
        assert!(colored.contains("\x1b[48;2;45;45;45m"));
    }
}
