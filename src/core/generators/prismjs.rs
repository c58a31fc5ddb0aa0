//! Prism.js theme rendered from a CSS template
//!
//! The template refers to palette colors as
//! `var(--dotfiles-colorscheme-<name>)`; every such token is replaced
//! textually with the resolved hex color.

use std::fs;

use super::{GenerateContext, GenerationError, CSS_VARIABLES_PREFIX};
use crate::core::palette::Palette;

/// Template file name inside the template directory
pub const PRISMJS_TEMPLATE: &str = "prismjs-theme-src.css";

/// Replace every `var(--<prefix><name>)` token with its color
pub(super) fn render(source: &str, palette: &Palette) -> String {
    let mut css = source.to_string();
    for (name, color) in palette.css_variables() {
        let token = format!("var(--{}{})", CSS_VARIABLES_PREFIX, name);
        css = css.replace(&token, &color.css_hex());
    }
    css
}

pub(super) fn generate(
    palette: &Palette,
    ctx: &GenerateContext,
) -> Result<String, GenerationError> {
    let path = ctx.template_path(PRISMJS_TEMPLATE);
    let source =
        fs::read_to_string(&path).map_err(|source| GenerationError::Template { path, source })?;
    Ok(render(&source, palette))
}
