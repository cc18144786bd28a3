//! Terminal styling utilities for a modern, visually appealing CLI

use console::{style, Emoji};

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");

/// Print the application banner with ASCII art
pub fn print_banner(version: &str) {
    let banner = r#"
    ██████╗ ███████╗ ██████╗ █████╗ ███████╗████████╗
    ██╔══██╗██╔════╝██╔════╝██╔══██╗██╔════╝╚══██╔══╝
    ██████╔╝█████╗  ██║     ███████║███████╗   ██║
    ██╔══██╗██╔══╝  ██║     ██╔══██║╚════██║   ██║
    ██║  ██║███████╗╚██████╗██║  ██║███████║   ██║
    ╚═╝  ╚═╝╚══════╝ ╚═════╝╚═╝  ╚═╝╚══════╝   ╚═╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {} {}",
        style("⇄").magenta().bold(),
        style("Tabular and image container conversion").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}
