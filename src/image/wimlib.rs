//! wimlib-imagex invocations: the `export` fallback

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use super::{run_tool, Compression, ToolOutput};
use crate::image::error::ToolError;

/// Export one image from a container with `wimlib-imagex export`.
///
/// WIM destinations use `--compress=max`; ESD destinations use `--solid`
/// (solid-mode compression, the high-ratio packing ESD containers carry).
pub(super) fn export(
    program: &OsStr,
    source: &Path,
    index: u32,
    destination: &Path,
    compress: Compression,
) -> Result<ToolOutput, ToolError> {
    let mut command = Command::new(program);
    command
        .arg("export")
        .arg(source)
        .arg(index.to_string())
        .arg(destination)
        .arg(compress.wimlib_flag());
    run_tool(command)
}
