//! DISM invocations: availability probe and `/export-image`

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use super::{run_tool, Compression, ToolOutput};
use crate::image::error::ToolError;

/// Run `dism /?` to check whether DISM can be launched at all.
///
/// A missing binary and a nonzero exit both count as unavailability; the
/// returned error only describes why, it is never raised past the probe.
pub(super) fn probe(program: &OsStr) -> Result<(), ToolError> {
    let mut command = Command::new(program);
    command.arg("/?");
    run_tool(command).map(|_| ())
}

/// Export one image from a container with `dism /export-image`.
///
/// Integrity checking is always requested; the compression mode is `max`
/// for WIM destinations and `recovery` for ESD destinations.
pub(super) fn export_image(
    program: &OsStr,
    source: &Path,
    index: u32,
    destination: &Path,
    compress: Compression,
) -> Result<ToolOutput, ToolError> {
    let mut command = Command::new(program);
    command
        .arg("/export-image")
        .arg(format!("/sourceimagefile:{}", source.display()))
        .arg(format!("/sourceindex:{}", index))
        .arg(format!("/destinationimagefile:{}", destination.display()))
        .arg(format!("/compress:{}", compress.dism_flag()))
        .arg("/checkintegrity");
    run_tool(command)
}
