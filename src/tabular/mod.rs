//! Tabular format conversions between plain text, CSV, and JSON
//!
//! All four operations read the whole input into memory, transform it
//! record by record, and write the whole output. Records are ordered
//! sequences of string fields; nothing is type-inferred or validated
//! beyond what the underlying formats require.

mod json;
mod text;

pub use json::{csv_to_json, json_to_csv};
pub use text::{csv_to_txt, txt_to_csv};
