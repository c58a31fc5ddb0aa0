//! VS Code `workbench.colorCustomizations` terminal colors

use serde_json::{Map, Value};

use super::{GenerateContext, GenerationError};
use crate::core::palette::{Palette, ANSI_COLOR_NAMES};

pub(super) fn generate(
    palette: &Palette,
    _ctx: &GenerateContext,
) -> Result<String, GenerationError> {
    let mut colors = Map::new();
    let mut put = |key: String, hex: String| {
        colors.insert(key, Value::String(hex));
    };

    put("terminal.background".into(), palette.bg().css_hex());
    put("terminal.foreground".into(), palette.fg().css_hex());
    put("terminal.selectionBackground".into(), palette.selection_bg().css_hex());
    put("terminalCursor.background".into(), palette.cursor_fg().css_hex());
    put("terminalCursor.foreground".into(), palette.cursor_bg().css_hex());

    let ansi = palette.ansi_colors();
    for (offset, prefix) in [(0, ""), (ANSI_COLOR_NAMES.len(), "Bright")] {
        for (index, name) in ANSI_COLOR_NAMES.iter().enumerate() {
            put(
                format!("terminal.ansi{}{}", prefix, name),
                ansi[offset + index].css_hex(),
            );
        }
    }

    let mut out = serde_json::to_string_pretty(&Value::Object(colors))?;
    out.push('\n');
    Ok(out)
}
