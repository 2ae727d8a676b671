//! Welcome banner for the terminal chat.

use console::style;

/// Print a short header before the domain menu: model and provider in use.
pub fn print_welcome_banner(model: &str, provider: &str) {
    println!();
    println!("  {} {}", style("✈️🚗").bold(), style("Wingman").cyan().bold());
    println!(
        "  {}",
        style("Ask an aviation or automobile expert anything in their lane.").dim()
    );
    println!();
    println!(
        "  {}  {} {}",
        style("Model:").bold(),
        style(model).dim(),
        style(format!("(via {provider})")).dim()
    );
    println!();
}
