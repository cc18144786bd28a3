//! Conversion summary report generation

use std::path::{Path, PathBuf};
use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

/// Summary of a completed tabular conversion
#[derive(Debug)]
pub struct ConversionSummary {
    operation: String,
    input: PathBuf,
    output: PathBuf,
    rows: usize,
    elapsed: Duration,
}

impl ConversionSummary {
    pub fn new(
        operation: &str,
        input: &Path,
        output: &Path,
        rows: usize,
        elapsed: Duration,
    ) -> Self {
        Self {
            operation: operation.to_string(),
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            rows,
            elapsed,
        }
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("CONVERSION SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("Operation"), Cell::new(&self.operation)]);

        table.add_row(vec![
            Cell::new("Rows written"),
            Cell::new(self.rows)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("Input size"),
            Cell::new(format!("{:.2} MB", file_size_mb(&self.input))),
        ]);

        table.add_row(vec![
            Cell::new("Output size"),
            Cell::new(format!("{:.2} MB", file_size_mb(&self.output))),
        ]);

        table.add_row(vec![
            Cell::new("Elapsed"),
            Cell::new(format!("{:.2?}", self.elapsed)),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }
        println!();
    }
}

fn file_size_mb(path: &Path) -> f64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0) as f64 / (1024.0 * 1024.0)
}
