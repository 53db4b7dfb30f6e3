//! gridform CLI - lay out xlsx spreadsheets from JSON descriptors

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gridform::{
    default_style_from_json, workbook_from_descriptor, ConvertOptions, LayoutEngine,
    SheetDescriptor, Style, WorkbookExt,
};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gridform")]
#[command(
    author,
    version,
    about = "Lay out xlsx spreadsheets from JSON descriptors"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a JSON descriptor to an xlsx file
    Convert {
        /// Input JSON descriptor ("-" for stdin)
        input: PathBuf,

        /// Output xlsx file
        #[arg(short, long)]
        output: PathBuf,

        /// Name of the generated worksheet
        #[arg(long, default_value = "Sheet1")]
        sheet_name: String,

        /// JSON file with the style every cell override is resolved against
        #[arg(long)]
        default_style: Option<PathBuf>,

        /// Don't report progress on stderr
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print the computed cell placements as JSON
    Plan {
        /// Input JSON descriptor ("-" for stdin)
        input: PathBuf,

        /// JSON file with the style every cell override is resolved against
        #[arg(long)]
        default_style: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            sheet_name,
            default_style,
            quiet,
        } => convert(&input, &output, sheet_name, default_style.as_deref(), quiet),
        Commands::Plan {
            input,
            default_style,
            pretty,
        } => plan(&input, default_style.as_deref(), pretty),
    }
}

fn convert(
    input: &Path,
    output: &Path,
    sheet_name: String,
    default_style: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let descriptor = load_descriptor(input)?;
    let options = ConvertOptions::new()
        .with_sheet_name(sheet_name)
        .with_default_style(load_default_style(default_style)?);

    let workbook = workbook_from_descriptor(&descriptor, &options)
        .with_context(|| format!("Failed to lay out '{}'", input.display()))?;
    workbook
        .save(output)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;

    if !quiet {
        let sheet = workbook.worksheet();
        eprintln!(
            "Wrote {} cells ({} merged ranges) to '{}'",
            sheet.cell_count(),
            sheet.merged_regions().len(),
            output.display()
        );
    }
    Ok(())
}

fn plan(input: &Path, default_style: Option<&Path>, pretty: bool) -> Result<()> {
    let descriptor = load_descriptor(input)?;
    let style = load_default_style(default_style)?;

    let layout = LayoutEngine::layout(&descriptor, &style)
        .with_context(|| format!("Failed to lay out '{}'", input.display()))?;

    let json = if pretty {
        serde_json::to_string_pretty(&layout)
    } else {
        serde_json::to_string(&layout)
    }
    .context("Failed to serialize layout")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json).context("Failed to write to stdout")?;
    Ok(())
}

fn load_descriptor(input: &Path) -> Result<SheetDescriptor> {
    let json = read_input(input)?;
    SheetDescriptor::from_json(&json)
        .with_context(|| format!("Invalid descriptor in '{}'", input.display()))
}

fn load_default_style(path: Option<&Path>) -> Result<Style> {
    match path {
        Some(path) => {
            let json = read_input(path)?;
            default_style_from_json(&json)
                .with_context(|| format!("Invalid default style in '{}'", path.display()))
        }
        None => Ok(Style::default()),
    }
}

/// Read a file, or stdin when the path is "-"
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to open '{}'", path.display()))
}
