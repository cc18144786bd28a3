//! Conversions between CSV and JSON arrays of objects

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::utils::create_progress_bar;

/// Convert a CSV file with a header row to a JSON array of objects.
///
/// Every data row becomes one object mapping column name to field value,
/// keys in header order, values always strings. Rows shorter than the
/// header read the missing trailing fields as empty strings. The array is
/// written with 4-space indentation, row order preserved.
///
/// Returns the number of objects written.
pub fn csv_to_json(input: &Path, output: &Path) -> Result<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(input)
        .with_context(|| format!("Failed to open CSV file: {}", input.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read CSV header from {}", input.display()))?
        .clone();
    let records: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .with_context(|| format!("Failed to read CSV records from {}", input.display()))?;

    let pb = create_progress_bar(records.len() as u64, "Converting CSV to JSON");
    let mut rows: Vec<Value> = Vec::with_capacity(records.len());
    for record in &records {
        let mut object = Map::new();
        for (idx, header) in headers.iter().enumerate() {
            let value = record.get(idx).unwrap_or("");
            object.insert(header.to_string(), Value::String(value.to_string()));
        }
        rows.push(Value::Object(object));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let file = File::create(output)
        .with_context(|| format!("Failed to create JSON file: {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    rows.serialize(&mut serializer)
        .with_context(|| format!("Failed to write JSON file: {}", output.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush JSON file: {}", output.display()))?;

    Ok(rows.len())
}

/// Convert a JSON array of objects to CSV.
///
/// The CSV header is the key order of the first element; every later
/// element must carry all of those keys or the conversion fails. An empty
/// array fails because there is no first element to derive headers from.
/// Non-string values are rendered with their compact JSON encoding.
///
/// Returns the number of data rows written.
pub fn json_to_csv(input: &Path, output: &Path) -> Result<usize> {
    let file = File::open(input)
        .with_context(|| format!("Failed to open JSON file: {}", input.display()))?;
    let rows: Vec<Map<String, Value>> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse JSON array of objects: {}", input.display()))?;

    let first = rows.first().ok_or_else(|| {
        anyhow!(
            "JSON array in {} is empty: no first element to derive CSV headers from",
            input.display()
        )
    })?;
    let headers: Vec<String> = first.keys().cloned().collect();

    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("Failed to create CSV file: {}", output.display()))?;
    writer
        .write_record(&headers)
        .with_context(|| format!("Failed to write CSV header to {}", output.display()))?;

    let pb = create_progress_bar(rows.len() as u64, "Converting JSON to CSV");
    for (row_index, row) in rows.iter().enumerate() {
        let mut fields = Vec::with_capacity(headers.len());
        for header in &headers {
            let value = row.get(header).ok_or_else(|| {
                anyhow!(
                    "JSON element {} is missing key '{}' present in the first element",
                    row_index,
                    header
                )
            })?;
            fields.push(render_value(value));
        }
        writer
            .write_record(&fields)
            .with_context(|| format!("Failed to write CSV row to {}", output.display()))?;
        pb.inc(1);
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush CSV file: {}", output.display()))?;
    pb.finish_and_clear();

    Ok(rows.len())
}

/// String values pass through unchanged; everything else keeps its
/// compact JSON encoding.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
