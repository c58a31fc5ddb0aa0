//! Colorscheme output generators
//!
//! Every generator maps a [`Palette`] to one output file in the format of a
//! specific tool. Generators are plain functions grouped into a static
//! registry; they do not share state and may run in any order.

mod apple_terminal;
mod css;
mod iterm;
mod kitty;
mod lua;
mod mintty;
mod prismjs;
mod scss;
mod setvtrgb;
mod termux;
mod vim;
mod vscode;
mod xfce;
mod zsh;

pub use prismjs::PRISMJS_TEMPLATE;

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::palette::Palette;
use super::plist::PlistError;

/// Prefix of every CSS custom property name
pub const CSS_VARIABLES_PREFIX: &str = "dotfiles-colorscheme-";

/// Errors raised by a single generator
#[derive(Error, Debug)]
pub enum GenerationError {
    /// A template file could not be read
    #[error("failed to read template {path}: {source}")]
    Template {
        /// Template path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Property list encoding failed
    #[error("plist encoding failed: {0}")]
    Plist(#[from] PlistError),

    /// JSON encoding failed
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing into the output buffer failed
    #[error("formatting failed")]
    Format(#[from] fmt::Error),
}

/// Read-only resources available to generators
#[derive(Debug, Clone)]
pub struct GenerateContext {
    /// Directory holding source templates
    pub template_dir: PathBuf,
}

impl GenerateContext {
    /// Create a context rooted at a template directory
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
        }
    }

    /// Path of a named template
    pub fn template_path(&self, name: &str) -> PathBuf {
        self.template_dir.join(name)
    }
}

impl Default for GenerateContext {
    fn default() -> Self {
        Self::new("templates")
    }
}

/// Text generator function
pub type TextFn = fn(&Palette, &GenerateContext) -> Result<String, GenerationError>;

/// Binary generator function
pub type BinaryFn = fn(&Palette, &GenerateContext) -> Result<Vec<u8>, GenerationError>;

/// How a generator produces its output
#[derive(Clone, Copy)]
pub enum GeneratorKind {
    /// UTF-8 text
    Text(TextFn),
    /// Raw bytes
    Binary(BinaryFn),
}

impl fmt::Debug for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(_) => write!(f, "Text"),
            Self::Binary(_) => write!(f, "Binary"),
        }
    }
}

/// Generated file content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// UTF-8 text
    Text(String),
    /// Raw bytes
    Binary(Vec<u8>),
}

impl Output {
    /// Content as bytes
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Binary(bytes) => bytes,
        }
    }

    /// Content length in bytes
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the output is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A registered generator
#[derive(Debug, Clone, Copy)]
pub struct Generator {
    /// Output file name, fixed by the consuming tool
    pub file_name: &'static str,
    /// Output kind and function
    pub kind: GeneratorKind,
}

impl Generator {
    /// Whether the output is written as raw bytes
    pub fn is_binary(&self) -> bool {
        matches!(self.kind, GeneratorKind::Binary(_))
    }

    /// Kind name for listings
    pub fn kind_name(&self) -> &'static str {
        if self.is_binary() {
            "binary"
        } else {
            "text"
        }
    }

    const fn text(file_name: &'static str, f: TextFn) -> Self {
        Self {
            file_name,
            kind: GeneratorKind::Text(f),
        }
    }

    const fn binary(file_name: &'static str, f: BinaryFn) -> Self {
        Self {
            file_name,
            kind: GeneratorKind::Binary(f),
        }
    }

    /// Run the generator
    pub fn generate(
        &self,
        palette: &Palette,
        ctx: &GenerateContext,
    ) -> Result<Output, GenerationError> {
        match self.kind {
            GeneratorKind::Text(f) => f(palette, ctx).map(Output::Text),
            GeneratorKind::Binary(f) => f(palette, ctx).map(Output::Binary),
        }
    }

    /// Output path inside a directory
    pub fn output_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name)
    }
}

/// All generators, in output order
pub const GENERATORS: &[Generator] = &[
    Generator::text("kitty.conf", kitty::generate),
    Generator::text("termux.properties", termux::generate),
    Generator::text("zsh.zsh", zsh::generate),
    Generator::text("vim.vim", vim::generate),
    Generator::text("setvtrgb.txt", setvtrgb::generate),
    Generator::text("xfce4-terminal.theme", xfce::generate),
    Generator::text("vscode-colorCustomizations.json", vscode::generate),
    Generator::binary("iterm.itermcolors", iterm::generate),
    Generator::text("variables.css", css::generate),
    Generator::text("_colorscheme.scss", scss::generate),
    Generator::text("prismjs-theme.css", prismjs::generate),
    Generator::text("colorscheme.lua", lua::generate),
    Generator::binary("apple-terminal.terminal", apple_terminal::generate),
    Generator::text(".minttyrc", mintty::generate),
];

/// Find a generator by output file name
pub fn find_generator(file_name: &str) -> Option<&'static Generator> {
    GENERATORS.iter().find(|g| g.file_name == file_name)
}

/// Output file names of all generators
pub fn generator_names() -> Vec<&'static str> {
    GENERATORS.iter().map(|g| g.file_name).collect()
}
