//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Recast - Convert tabular data files and Windows image containers
#[derive(Parser, Debug)]
#[command(name = "recast")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Skip interactive confirmation prompts
    #[arg(long, global = true, default_value = "false")]
    pub no_confirm: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a plain-text file with comma-delimited lines to CSV
    TxtToCsv {
        /// Input text file
        input: PathBuf,

        /// Output path (defaults to the input with a .csv extension)
        output: Option<PathBuf>,
    },

    /// Convert a CSV file to comma-joined plain text
    CsvToTxt {
        /// Input CSV file
        input: PathBuf,

        /// Output path (defaults to the input with a .txt extension)
        output: Option<PathBuf>,
    },

    /// Convert a CSV file with a header row to a JSON array of objects
    CsvToJson {
        /// Input CSV file
        input: PathBuf,

        /// Output path (defaults to the input with a .json extension)
        output: Option<PathBuf>,
    },

    /// Convert a JSON array of objects to CSV.
    /// Column order follows the first element's keys.
    JsonToCsv {
        /// Input JSON file
        input: PathBuf,

        /// Output path (defaults to the input with a .csv extension)
        output: Option<PathBuf>,
    },

    /// Export an image from an ESD container into a WIM using DISM,
    /// falling back to wimlib-imagex
    EsdToWim {
        /// Input ESD file
        input: PathBuf,

        /// Output path (defaults to the input with a .wim extension)
        output: Option<PathBuf>,

        /// Index of the image to export from the source container
        #[arg(long, default_value = "1")]
        index: u32,
    },

    /// Export an image from a WIM container into an ESD using DISM,
    /// falling back to wimlib-imagex
    WimToEsd {
        /// Input WIM file
        input: PathBuf,

        /// Output path (defaults to the input with a .esd extension)
        output: Option<PathBuf>,

        /// Index of the image to export from the source container
        #[arg(long, default_value = "1")]
        index: u32,
    },
}

impl Commands {
    /// Extension the output file gets when no explicit output path is given.
    pub fn target_extension(&self) -> &'static str {
        match self {
            Commands::TxtToCsv { .. } | Commands::JsonToCsv { .. } => "csv",
            Commands::CsvToTxt { .. } => "txt",
            Commands::CsvToJson { .. } => "json",
            Commands::EsdToWim { .. } => "wim",
            Commands::WimToEsd { .. } => "esd",
        }
    }
}

/// Derive the output path from the input when none was given,
/// swapping in the target extension.
pub fn derive_output_path(input: &Path, extension: &str) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    parent.join(format!("{}.{}", stem, extension))
}
