//! Colorschemes CLI
//!
//! Generates colorscheme files from a base16 palette and imports it into
//! GNOME Terminal.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use colorschemes_core::cli::{
    self, print_exit_codes, print_json, render_palette, CliResult, OutputFormat, PaletteView,
};
use colorschemes_core::config::{self, resolve_palette};
use colorschemes_core::core::gnome::{self, DconfStore};
use colorschemes_core::core::pipeline::{generate_all, Selection};
use colorschemes_core::{GenerateContext, Palette, GENERATORS};

/// Colorschemes CLI
#[derive(Parser, Debug)]
#[command(
    name = "colorschemes",
    version,
    about = "Generate terminal and editor colorschemes from a base16 palette",
    long_about = None
)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Quiet mode (warnings and errors only)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate colorscheme files
    Generate {
        /// Palette file (TOML with a [Theme] table)
        #[arg(short, long, env = "COLORSCHEMES_PALETTE")]
        palette: Option<PathBuf>,

        /// Output directory
        #[arg(short, long, default_value = config::DEFAULT_OUT_DIR)]
        out: PathBuf,

        /// Template directory
        #[arg(short, long, default_value = config::DEFAULT_TEMPLATE_DIR)]
        templates: PathBuf,

        /// Only generate these output files
        #[arg(long = "only", value_name = "FILE")]
        only: Vec<String>,
    },

    /// List the available generators
    List,

    /// Show a palette and its derived colors
    Show {
        /// Palette file (TOML with a [Theme] table)
        #[arg(short, long, env = "COLORSCHEMES_PALETTE")]
        palette: Option<PathBuf>,
    },

    /// Import the palette as a new GNOME Terminal profile
    GnomeImport {
        /// Palette file (TOML with a [Theme] table)
        #[arg(short, long, env = "COLORSCHEMES_PALETTE")]
        palette: Option<PathBuf>,

        /// Print the profile values without changing any settings
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the exit code table
    ExitCodes,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let result = match run(&cli) {
        Ok(()) => CliResult::success(),
        Err(err) => CliResult::from_error(&err),
    };
    if let CliResult::Error(_, message) = &result {
        eprintln!("error: {}", message);
    }
    result.to_exit_code()
}

fn init_tracing(cli: &Cli) {
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else if cli.quiet {
        tracing::Level::WARN
    } else {
        tracing::Level::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Generate {
            palette,
            out,
            templates,
            only,
        } => generate(cli, palette.as_deref(), out, templates, only),
        Commands::List => list(cli),
        Commands::Show { palette } => show(cli, palette.as_deref()),
        Commands::GnomeImport { palette, dry_run } => {
            gnome_import(cli, palette.as_deref(), *dry_run)
        }
        Commands::ExitCodes => {
            print_exit_codes();
            Ok(())
        }
    }
}

fn load(path: Option<&Path>) -> anyhow::Result<Palette> {
    let (palette, source) = resolve_palette(path).context("failed to load palette")?;
    tracing::info!("Using palette {} from {}", palette.name(), source);
    Ok(palette)
}

fn generate(
    cli: &Cli,
    palette: Option<&Path>,
    out: &Path,
    templates: &Path,
    only: &[String],
) -> anyhow::Result<()> {
    cli::validate_outputs(only)?;
    let palette = load(palette)?;
    let ctx = GenerateContext::new(templates);

    let names: Vec<&str> = only.iter().map(String::as_str).collect();
    let selection = if names.is_empty() {
        Selection::All
    } else {
        Selection::Only(&names)
    };
    let report = generate_all(&palette, &ctx, out, selection)?;

    match cli.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => {
            if !cli.quiet {
                for entry in &report.entries {
                    println!("{:<36} {:>7} bytes", entry.path.display(), entry.bytes);
                }
            }
        }
    }
    Ok(())
}

fn list(cli: &Cli) -> anyhow::Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let json: Vec<serde_json::Value> = GENERATORS
                .iter()
                .map(|g| {
                    serde_json::json!({
                        "file_name": g.file_name,
                        "kind": g.kind_name(),
                    })
                })
                .collect();
            print_json(&json)?;
        }
        OutputFormat::Text => {
            println!("{:<36} {}", "Output", "Kind");
            println!("{:-<44}", "");
            for generator in GENERATORS {
                println!("{:<36} {}", generator.file_name, generator.kind_name());
            }
        }
    }
    Ok(())
}

fn show(cli: &Cli, palette: Option<&Path>) -> anyhow::Result<()> {
    let palette = load(palette)?;
    match cli.format {
        OutputFormat::Json => print_json(&PaletteView::from(&palette))?,
        OutputFormat::Text => {
            let swatches = std::io::stdout().is_terminal();
            print!("{}", render_palette(&palette, swatches)?);
        }
    }
    Ok(())
}

fn gnome_import(cli: &Cli, palette: Option<&Path>, dry_run: bool) -> anyhow::Result<()> {
    let palette = load(palette)?;
    let mut store = DconfStore::default();

    if dry_run {
        let values = gnome::plan_profile(&store, &palette)?;
        match cli.format {
            OutputFormat::Json => print_json(&values)?,
            OutputFormat::Text => {
                for (key, value) in &values {
                    println!("{}={}", key, value);
                }
            }
        }
        return Ok(());
    }

    let imported = gnome::import_profile(&mut store, &palette)?;
    match cli.format {
        OutputFormat::Json => print_json(&imported)?,
        OutputFormat::Text => println!("Created profile {} ({})", gnome::PROFILE_NAME, imported.id),
    }
    Ok(())
}
