//! Recast: File Conversion Library
//!
//! A library for converting between plain-text, CSV, and JSON tabular files,
//! and between Windows image containers (ESD/WIM) using DISM with a
//! wimlib-imagex fallback.

pub mod cli;
pub mod image;
pub mod report;
pub mod tabular;
pub mod utils;
