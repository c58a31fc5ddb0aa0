//! Generation driver
//!
//! Runs the selected generators against one palette and writes their
//! outputs into a directory. Every output is rendered in memory first, so a
//! failing generator leaves the directory untouched by this run.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use super::generators::{GenerateContext, GenerationError, Generator, Output, GENERATORS};
use super::palette::Palette;

/// Driver errors
#[derive(Error, Debug)]
pub enum OutputError {
    /// The output directory cannot be created
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        /// Directory path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An output file cannot be written
    #[error("failed to write {path}: {source}")]
    Write {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A generator failed
    #[error("failed to generate {file_name}: {source}")]
    Generator {
        /// Output file name of the failing generator
        file_name: &'static str,
        /// Generator error
        #[source]
        source: GenerationError,
    },
}

/// Which generators to run
#[derive(Debug, Clone, Copy, Default)]
pub enum Selection<'a> {
    /// Every registered generator
    #[default]
    All,
    /// Only the named output files, in registry order
    Only(&'a [&'a str]),
}

impl Selection<'_> {
    fn includes(&self, generator: &Generator) -> bool {
        match self {
            Self::All => true,
            Self::Only(names) => names.contains(&generator.file_name),
        }
    }
}

/// One written file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// Output file name
    pub file_name: &'static str,
    /// Full path written
    pub path: PathBuf,
    /// Bytes written
    pub bytes: usize,
}

/// Summary of a generation run
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    /// Written files, in registry order
    pub entries: Vec<ReportEntry>,
}

impl Report {
    /// Number of written files
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was written
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total bytes written
    pub fn total_bytes(&self) -> usize {
        self.entries.iter().map(|e| e.bytes).sum()
    }
}

/// Render the selected generators in memory
pub fn render_all(
    palette: &Palette,
    ctx: &GenerateContext,
    selection: Selection<'_>,
) -> Result<Vec<(&'static Generator, Output)>, OutputError> {
    GENERATORS
        .iter()
        .filter(|g| selection.includes(g))
        .map(|generator| {
            let output = generator
                .generate(palette, ctx)
                .map_err(|source| OutputError::Generator {
                    file_name: generator.file_name,
                    source,
                })?;
            tracing::debug!(
                "Generated {} ({}, {} bytes)",
                generator.file_name,
                generator.kind_name(),
                output.len()
            );
            Ok((generator, output))
        })
        .collect()
}

/// Generate and write the selected outputs into `out_dir`
pub fn generate_all(
    palette: &Palette,
    ctx: &GenerateContext,
    out_dir: &Path,
    selection: Selection<'_>,
) -> Result<Report, OutputError> {
    let rendered = render_all(palette, ctx, selection)?;

    std::fs::create_dir_all(out_dir).map_err(|source| OutputError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut report = Report::default();
    for (generator, output) in rendered {
        let path = generator.output_path(out_dir);
        std::fs::write(&path, output.as_bytes()).map_err(|source| OutputError::Write {
            path: path.clone(),
            source,
        })?;
        report.entries.push(ReportEntry {
            file_name: generator.file_name,
            path,
            bytes: output.len(),
        });
    }

    tracing::info!(
        "Wrote {} files ({} bytes) to {}",
        report.len(),
        report.total_bytes(),
        out_dir.display()
    );
    Ok(report)
}
