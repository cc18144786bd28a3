//! Recast: File Conversion CLI Tool
//!
//! Converts between plain-text, CSV, and JSON tabular files, and between
//! Windows image containers (ESD/WIM) by delegating to DISM with a
//! wimlib-imagex fallback.

mod cli;
mod image;
mod report;
mod tabular;
mod utils;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use cli::{confirm_overwrite, derive_output_path, Cli, Commands};
use image::{Conversion, ImageError, ToolChain};
use report::ConversionSummary;
use utils::{ensure_absolute, print_banner, print_info, print_success};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Normalize both paths once; everything below sees the absolute form.
    let (input, output) = resolve_paths(&cli);

    if output.exists() && !cli.no_confirm && !confirm_overwrite(&output)? {
        println!("Cancelled by user.");
        return Ok(());
    }

    match &cli.command {
        Commands::TxtToCsv { .. } => {
            run_tabular("TXT to CSV", tabular::txt_to_csv, &input, &output)
        }
        Commands::CsvToTxt { .. } => {
            run_tabular("CSV to TXT", tabular::csv_to_txt, &input, &output)
        }
        Commands::CsvToJson { .. } => {
            run_tabular("CSV to JSON", tabular::csv_to_json, &input, &output)
        }
        Commands::JsonToCsv { .. } => {
            run_tabular("JSON to CSV", tabular::json_to_csv, &input, &output)
        }
        Commands::EsdToWim { index, .. } => {
            run_image("ESD to WIM", image::esd_to_wim, &input, &output, *index)
        }
        Commands::WimToEsd { index, .. } => {
            run_image("WIM to ESD", image::wim_to_esd, &input, &output, *index)
        }
    }
}

/// Pull the input/output paths out of the subcommand and normalize them,
/// deriving the output from the input when none was given.
fn resolve_paths(cli: &Cli) -> (PathBuf, PathBuf) {
    let (input, output) = match &cli.command {
        Commands::TxtToCsv { input, output }
        | Commands::CsvToTxt { input, output }
        | Commands::CsvToJson { input, output }
        | Commands::JsonToCsv { input, output }
        | Commands::EsdToWim { input, output, .. }
        | Commands::WimToEsd { input, output, .. } => (input, output),
    };

    let input = ensure_absolute(input);
    let output = match output {
        Some(path) => ensure_absolute(path),
        None => derive_output_path(&input, cli.command.target_extension()),
    };
    (input, output)
}

fn run_tabular(
    label: &str,
    op: fn(&Path, &Path) -> Result<usize>,
    input: &Path,
    output: &Path,
) -> Result<()> {
    println!("\n {} Converting {}", style("◆").cyan().bold(), label);
    println!("   Input:  {}", style(input.display()).dim());
    println!("   Output: {}", style(output.display()).dim());
    println!();

    let start = Instant::now();
    let rows = op(input, output)?;

    print_success(&format!("Converted {}: {}", label, output.display()));
    ConversionSummary::new(label, input, output, rows, start.elapsed()).display();
    Ok(())
}

fn run_image(
    label: &str,
    op: fn(&ToolChain, &Path, &Path, u32) -> Result<Conversion, ImageError>,
    input: &Path,
    output: &Path,
    index: u32,
) -> Result<()> {
    print_banner(env!("CARGO_PKG_VERSION"));
    print_info(&format!("Exporting image {} of {}", index, input.display()));

    let chain = ToolChain::default();
    let conversion = op(&chain, input, output, index)?;

    print_success(&format!(
        "Converted {} via {}: {}",
        label,
        conversion.tool,
        output.display()
    ));
    Ok(())
}
