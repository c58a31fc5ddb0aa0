//! Linux console palette for `setvtrgb`
//!
//! Three lines of 16 decimal values: all reds, then greens, then blues.
//! The kernel default, for reference:
//! ```text
//! 0,170,0,170,0,170,0,170,85,255,85,255,85,255,85,255
//! 0,0,170,85,0,0,170,170,85,85,255,255,85,85,255,255
//! 0,0,0,0,170,170,170,170,85,85,85,85,255,255,255,255
//! ```

use super::{GenerateContext, GenerationError};
use crate::core::palette::Palette;

pub(super) fn generate(
    palette: &Palette,
    _ctx: &GenerateContext,
) -> Result<String, GenerationError> {
    let ansi = palette.ansi_colors();
    let mut out = String::new();
    for channel in 0..3 {
        let line: Vec<String> = ansi
            .iter()
            .map(|color| color.components()[channel].to_string())
            .collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    Ok(out)
}
