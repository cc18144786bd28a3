//! Conversions between comma-delimited plain text and CSV

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::utils::create_progress_bar;

/// Convert a plain-text file with comma-delimited lines to CSV.
///
/// Each input line becomes exactly one CSV row: the line is stripped of
/// trailing whitespace and split on `,`, and the resulting fields are
/// written with standard CSV quoting. A blank line yields a row with a
/// single empty field.
///
/// Returns the number of rows written.
pub fn txt_to_csv(input: &Path, output: &Path) -> Result<usize> {
    let contents = fs::read_to_string(input)
        .with_context(|| format!("Failed to read text file: {}", input.display()))?;
    let lines: Vec<&str> = contents.lines().collect();

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(output)
        .with_context(|| format!("Failed to create CSV file: {}", output.display()))?;

    let pb = create_progress_bar(lines.len() as u64, "Converting TXT to CSV");
    for line in &lines {
        let fields: Vec<&str> = line.trim_end().split(',').collect();
        writer
            .write_record(&fields)
            .with_context(|| format!("Failed to write CSV row to {}", output.display()))?;
        pb.inc(1);
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush CSV file: {}", output.display()))?;
    pb.finish_and_clear();

    Ok(lines.len())
}

/// Convert a CSV file to comma-joined plain text.
///
/// CSV quoting is respected on the way in but not reconstructed on the
/// way out: a field containing a comma is joined into the line as-is, so
/// this is a lossy round-trip partner of [`txt_to_csv`] for such fields.
///
/// Returns the number of lines written.
pub fn csv_to_txt(input: &Path, output: &Path) -> Result<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(input)
        .with_context(|| format!("Failed to open CSV file: {}", input.display()))?;
    let records: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .with_context(|| format!("Failed to read CSV records from {}", input.display()))?;

    let file = File::create(output)
        .with_context(|| format!("Failed to create text file: {}", output.display()))?;
    let mut writer = BufWriter::new(file);

    let pb = create_progress_bar(records.len() as u64, "Converting CSV to TXT");
    for record in &records {
        let line = record.iter().collect::<Vec<_>>().join(",");
        writeln!(writer, "{}", line)
            .with_context(|| format!("Failed to write line to {}", output.display()))?;
        pb.inc(1);
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush text file: {}", output.display()))?;
    pb.finish_and_clear();

    Ok(records.len())
}
