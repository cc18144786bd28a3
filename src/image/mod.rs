//! ESD/WIM image container conversion via external tools
//!
//! Both directions follow the same two-tier strategy: probe DISM with a
//! harmless query, export with DISM when it is available, and fall back to
//! wimlib-imagex when DISM is missing or its export fails. Exactly one
//! fallback hop, no retries, no timeouts; each invocation blocks until the
//! child exits with its stdout/stderr captured.

mod dism;
mod error;
mod wimlib;

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::Path;
use std::process::Command;

use console::style;

pub use error::{ImageError, ToolError};

use crate::utils::{create_spinner, finish_with_success, finish_with_warning, print_info};

/// External programs used for image export.
///
/// The defaults are the system `dism` and `wimlib-imagex`; tests and
/// embedders can point either at a different binary.
#[derive(Clone, Debug)]
pub struct ToolChain {
    pub dism: OsString,
    pub wimlib: OsString,
}

impl Default for ToolChain {
    fn default() -> Self {
        Self {
            dism: OsString::from("dism"),
            wimlib: OsString::from("wimlib-imagex"),
        }
    }
}

/// Which external tool produced the output file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    Dism,
    Wimlib,
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tool::Dism => write!(f, "DISM"),
            Tool::Wimlib => write!(f, "wimlib-imagex"),
        }
    }
}

/// A completed export, recording which tier did the work.
#[derive(Debug)]
pub struct Conversion {
    pub tool: Tool,
}

/// Result of the DISM availability probe.
#[derive(Debug)]
pub enum ToolAvailability {
    Available,
    Unavailable(ToolError),
}

/// Compression mode for the destination container.
#[derive(Clone, Copy, Debug)]
enum Compression {
    /// Maximum LZX compression (WIM destinations).
    Max,
    /// Space-optimized recovery compression (ESD destinations).
    Recovery,
}

impl Compression {
    fn dism_flag(self) -> &'static str {
        match self {
            Compression::Max => "max",
            Compression::Recovery => "recovery",
        }
    }

    fn wimlib_flag(self) -> &'static str {
        match self {
            Compression::Max => "--compress=max",
            Compression::Recovery => "--solid",
        }
    }
}

/// Captured output of a successful tool invocation.
struct ToolOutput {
    stdout: String,
}

/// Check whether the preferred tool can be launched at all.
pub fn dism_availability(chain: &ToolChain) -> ToolAvailability {
    match dism::probe(&chain.dism) {
        Ok(()) => ToolAvailability::Available,
        Err(err) => ToolAvailability::Unavailable(err),
    }
}

/// Convert an ESD container to a WIM, exporting the image at `index`.
pub fn esd_to_wim(
    chain: &ToolChain,
    esd: &Path,
    wim: &Path,
    index: u32,
) -> Result<Conversion, ImageError> {
    export(chain, esd, wim, index, Compression::Max)
}

/// Convert a WIM container to an ESD, exporting the image at `index`.
pub fn wim_to_esd(
    chain: &ToolChain,
    wim: &Path,
    esd: &Path,
    index: u32,
) -> Result<Conversion, ImageError> {
    export(chain, wim, esd, index, Compression::Recovery)
}

fn export(
    chain: &ToolChain,
    source: &Path,
    destination: &Path,
    index: u32,
    compress: Compression,
) -> Result<Conversion, ImageError> {
    let dism_error = match dism_availability(chain) {
        ToolAvailability::Available => {
            let spinner = create_spinner("Exporting with DISM...");
            match dism::export_image(&chain.dism, source, index, destination, compress) {
                Ok(output) => {
                    finish_with_success(
                        &spinner,
                        &format!("DISM export complete: {}", destination.display()),
                    );
                    let stdout = output.stdout.trim();
                    if !stdout.is_empty() {
                        println!("{}", style(stdout).dim());
                    }
                    return Ok(Conversion { tool: Tool::Dism });
                }
                Err(err) => {
                    finish_with_warning(&spinner, &format!("DISM failed: {}", err));
                    print_info("Switching to wimlib-imagex...");
                    err
                }
            }
        }
        ToolAvailability::Unavailable(err) => {
            println!(
                "    {} {}",
                style("!").yellow().bold(),
                style(format!("DISM is not available: {}", err)).yellow()
            );
            print_info("Trying alternative export with wimlib-imagex...");
            err
        }
    };

    let spinner = create_spinner("Exporting with wimlib-imagex...");
    match wimlib::export(&chain.wimlib, source, index, destination, compress) {
        Ok(_) => {
            finish_with_success(
                &spinner,
                &format!("wimlib-imagex export complete: {}", destination.display()),
            );
            Ok(Conversion { tool: Tool::Wimlib })
        }
        Err(wimlib_error) => {
            finish_with_warning(
                &spinner,
                &format!("wimlib-imagex failed: {}", wimlib_error),
            );
            Err(ImageError {
                dism: dism_error,
                wimlib: wimlib_error,
            })
        }
    }
}

/// Run a tool to completion, capturing its output.
///
/// Blocks until the child exits. A missing binary, a launch failure, and a
/// nonzero exit each map to their own [`ToolError`] variant.
fn run_tool(mut command: Command) -> Result<ToolOutput, ToolError> {
    let program = command.get_program().to_string_lossy().into_owned();
    match command.output() {
        Ok(output) if output.status.success() => Ok(ToolOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        }),
        Ok(output) => Err(ToolError::Failed {
            program,
            code: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            Err(ToolError::NotFound { program })
        }
        Err(source) => Err(ToolError::Launch { program, source }),
    }
}
