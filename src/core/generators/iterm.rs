//! iTerm2 `.itermcolors` preset (XML plist)

use super::{GenerateContext, GenerationError};
use crate::core::color::Color;
use crate::core::palette::Palette;
use crate::core::plist::{self, Dictionary, Value};

fn color_dict(color: Color) -> Dictionary {
    let (r, g, b) = color.float_rgb();
    Dictionary::new()
        .with("Color Space", "sRGB")
        .with("Red Component", r)
        .with("Green Component", g)
        .with("Blue Component", b)
}

pub(super) fn generate(
    palette: &Palette,
    _ctx: &GenerateContext,
) -> Result<Vec<u8>, GenerationError> {
    let mut colors = Dictionary::new();
    let mut put = |key: &str, color: Color| colors.insert(key, color_dict(color));

    put("Background Color", palette.bg());
    put("Foreground Color", palette.fg());
    put("Bold Color", palette.fg());
    put("Cursor Color", palette.cursor_bg());
    put("Cursor Text Color", palette.cursor_fg());
    put("Selection Color", palette.selection_bg());
    put("Selected Text Color", palette.selection_fg());
    for (index, &color) in palette.ansi_colors().iter().enumerate() {
        put(&format!("Ansi {} Color", index), color);
    }
    put("Link Color", palette.link_color());

    let xml = plist::xml::to_string(&Value::Dictionary(colors), false)?;
    Ok(xml.into_bytes())
}
