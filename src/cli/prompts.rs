//! Interactive prompts using dialoguer

use std::path::Path;

use anyhow::Result;
use dialoguer::Confirm;

/// Prompt the user before overwriting an existing output file
pub fn confirm_overwrite(path: &Path) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(format!(
            "Output file {} already exists. Overwrite?",
            path.display()
        ))
        .default(true)
        .interact()?;
    Ok(confirmed)
}
