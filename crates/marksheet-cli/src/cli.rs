//! CLI argument definitions for marksheet.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use marksheet_core::SubjectEntry;

#[derive(Parser)]
#[command(name = "marksheet")]
#[command(about = "Subject marks to letter grades", version)]
pub struct Args {
    /// Display config file (TOML)
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "marksheet.toml",
        env = "MARKSHEET_CONFIG"
    )]
    pub config: PathBuf,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the letter grade for a percentage
    Grade {
        /// Percentage, e.g. 86.5
        #[arg(allow_negative_numbers = true)]
        percentage: f64,
    },
    /// Grade a list of subjects in one go
    Calc {
        /// Entries as [SUBJECT=]MARK/OUT_OF, e.g. Maths=90/100
        #[arg(value_parser = parse_entry_arg)]
        entries: Vec<SubjectEntry>,
        /// Sheet file: one "subject<TAB>mark<TAB>out of" row per line
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,
        /// Output format
        #[arg(long, short = 'F', value_enum, default_value = "console")]
        format: OutputFormat,
        /// Output file path (defaults to stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Interactive sheet (default)
    Sheet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Console,
    Tsv,
    Json,
}

/// Parse `[SUBJECT=]MARK/OUT_OF`. Number text is kept as typed; bad numbers
/// are reported per row by the grade engine, not rejected here.
pub fn parse_entry_arg(arg: &str) -> Result<SubjectEntry, String> {
    let (subject, marks) = match arg.split_once('=') {
        Some((subject, marks)) => (subject.trim(), marks),
        None => ("", arg),
    };
    let (mark, out_of) = marks
        .split_once('/')
        .ok_or_else(|| format!("expected [SUBJECT=]MARK/OUT_OF, got {:?}", arg))?;
    Ok(SubjectEntry::with_text(subject, mark.trim(), out_of.trim()))
}
