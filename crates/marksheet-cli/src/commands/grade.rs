//! Grade command implementation.

use anyhow::Result;
use marksheet_core::{DisplayConfig, export::format_colored_grade, grade_for};

/// Print the letter for a single percentage
pub fn run(percentage: f64, config: &DisplayConfig) -> Result<()> {
    let letter = grade_for(percentage);
    println!(
        "{:.prec$}% => {}",
        percentage,
        format_colored_grade(letter, config),
        prec = config.precision
    );
    Ok(())
}
