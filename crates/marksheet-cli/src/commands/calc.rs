//! Calc command: grade a whole sheet given on the command line or in a file.

use std::path::Path;

use anyhow::{Context, Result, bail};
use marksheet_core::{
    DisplayConfig, EntryStore, SubjectEntry, format_sheet_console, generate_report_json,
    generate_report_tsv,
};
use tracing::info;

use crate::cli::OutputFormat;

/// Rows from `file` first, then from the command line.
pub fn build_store(entries: Vec<SubjectEntry>, file: Option<&Path>) -> Result<EntryStore> {
    let mut store = match file {
        Some(path) => EntryStore::load(path)
            .with_context(|| format!("Failed to read sheet {}", path.display()))?,
        None => EntryStore::new(),
    };
    for entry in entries {
        store.push(entry);
    }

    if store.is_empty() {
        bail!("No entries given; pass MARK/OUT_OF arguments or --file");
    }
    Ok(store)
}

/// Render the evaluated sheet in the requested format
pub fn render(store: &EntryStore, format: OutputFormat, config: &DisplayConfig) -> Result<String> {
    let evaluation = store.evaluate();
    let content = match format {
        OutputFormat::Console => format_sheet_console(store, &evaluation, config),
        OutputFormat::Tsv => generate_report_tsv(store, &evaluation, config),
        OutputFormat::Json => generate_report_json(store, &evaluation)?,
    };
    Ok(content)
}

pub fn run(
    entries: Vec<SubjectEntry>,
    file: Option<&Path>,
    format: OutputFormat,
    output: Option<&Path>,
    config: &DisplayConfig,
) -> Result<()> {
    let store = build_store(entries, file)?;
    info!("Evaluating {} entries", store.len());

    // Files never get ANSI codes
    let config = if output.is_some() {
        config.clone().with_color(false)
    } else {
        config.clone()
    };
    let content = render(&store, format, &config)?;

    if let Some(output_path) = output {
        std::fs::write(output_path, &content)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        eprintln!("Exported to: {}", output_path.display());
    } else {
        println!("{}", content);
    }

    Ok(())
}
