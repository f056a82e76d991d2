//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::config::DisplayConfig;
use crate::engine::{Aggregate, EntryOutcome, Evaluation};
use crate::score::GradeLetter;
use crate::sheet::EntryStore;

/// Green for passing letters, red for `F` and row errors.
fn paint(text: &str, passing: bool, config: &DisplayConfig) -> String {
    if !config.color {
        text.to_string()
    } else if passing {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}

pub fn format_colored_grade(letter: GradeLetter, config: &DisplayConfig) -> String {
    paint(letter.short_name(), letter.is_passing(), config)
}

/// Row label: `Grade: A+`, `Grade: Invalid range`, ...
pub fn format_entry_grade(outcome: &EntryOutcome, config: &DisplayConfig) -> String {
    match outcome {
        Ok(grade) => format!("Grade: {}", format_colored_grade(grade.letter, config)),
        Err(e) => format!("Grade: {}", paint(&e.to_string(), false, config)),
    }
}

pub fn format_total(aggregate: &Aggregate, config: &DisplayConfig) -> String {
    match aggregate.result() {
        Some(result) => format!(
            "Total: {:.prec$} / {:.prec$}",
            result.total_got,
            result.total_out_of,
            prec = config.precision
        ),
        None => format!("Total: {0} / {0}", config.placeholder),
    }
}

pub fn format_percentage(aggregate: &Aggregate, config: &DisplayConfig) -> String {
    match aggregate.result() {
        Some(result) => format!(
            "Percentage: {:.prec$}%",
            result.percentage,
            prec = config.precision
        ),
        None => format!("Percentage: {}%", config.placeholder),
    }
}

pub fn format_overall_grade(aggregate: &Aggregate, config: &DisplayConfig) -> String {
    match aggregate.result() {
        Some(result) => format!(
            "Overall Grade: {}",
            format_colored_grade(result.letter, config)
        ),
        None => format!("Overall Grade: {}", config.placeholder),
    }
}

/// Summary lines for the aggregate, one per result label.
pub fn format_summary(aggregate: &Aggregate, config: &DisplayConfig) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "  {}", format_total(aggregate, config));
    let _ = writeln!(output, "  {}", format_percentage(aggregate, config));
    let _ = write!(output, "  {}", format_overall_grade(aggregate, config));
    if let Aggregate::Unavailable(reason) = aggregate {
        let note = format!("({})", reason);
        if config.color {
            let _ = write!(output, " {}", note.dimmed());
        } else {
            let _ = write!(output, " {}", note);
        }
    }
    output
}

/// Full sheet: numbered rows with their own grades, then the summary.
///
/// `evaluation` must come from `store.evaluate()` with the store unchanged
/// since; rows and outcomes are paired by position.
pub fn format_sheet_console(
    store: &EntryStore,
    evaluation: &Evaluation,
    config: &DisplayConfig,
) -> String {
    let mut output = String::new();

    let name_width = store
        .entries()
        .map(|entry| entry.subject.chars().count())
        .max()
        .unwrap_or(0)
        .max(7);
    let border: String = "━".repeat(name_width + 40);
    let border = if config.color {
        border.dimmed().to_string()
    } else {
        border
    };

    let _ = writeln!(output, "{}", border);
    if store.is_empty() {
        let _ = writeln!(output, "  (no subjects)");
    }
    for (index, (entry, outcome)) in store.entries().zip(&evaluation.per_entry).enumerate() {
        let subject = if entry.subject.is_empty() {
            "-"
        } else {
            entry.subject.as_str()
        };
        let _ = writeln!(
            output,
            "  {:>2}. {:<width$}  {:>6} / {:<6}  {}",
            index + 1,
            subject,
            entry.mark,
            entry.out_of,
            format_entry_grade(outcome, config),
            width = name_width
        );
    }
    let _ = writeln!(output, "{}", border);
    let _ = writeln!(output, "{}", format_summary(&evaluation.aggregate, config));
    let _ = write!(output, "{}", border);

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::SubjectEntry;

    fn plain() -> DisplayConfig {
        DisplayConfig::default().with_color(false)
    }

    fn sample_store() -> EntryStore {
        let mut store = EntryStore::new();
        store.push(SubjectEntry::with_marks("Maths", 90.0, 100.0));
        store.push(SubjectEntry::with_marks("Physics", 40.0, 50.0));
        store
    }

    #[test]
    fn test_summary_available() {
        let evaluation = sample_store().evaluate();
        let config = plain();
        assert_eq!(
            format_total(&evaluation.aggregate, &config),
            "Total: 130.00 / 150.00"
        );
        assert_eq!(
            format_percentage(&evaluation.aggregate, &config),
            "Percentage: 86.67%"
        );
        assert_eq!(
            format_overall_grade(&evaluation.aggregate, &config),
            "Overall Grade: A"
        );
    }

    #[test]
    fn test_summary_placeholders() {
        let evaluation = EntryStore::new().evaluate();
        let config = plain();
        assert_eq!(format_total(&evaluation.aggregate, &config), "Total: -- / --");
        assert_eq!(
            format_percentage(&evaluation.aggregate, &config),
            "Percentage: --%"
        );
        assert_eq!(
            format_overall_grade(&evaluation.aggregate, &config),
            "Overall Grade: --"
        );
        assert!(format_summary(&evaluation.aggregate, &config).ends_with("(no entries)"));
    }

    #[test]
    fn test_precision_follows_config() {
        let evaluation = sample_store().evaluate();
        let config = DisplayConfig {
            precision: 0,
            ..plain()
        };
        assert_eq!(format_percentage(&evaluation.aggregate, &config), "Percentage: 87%");
    }

    #[test]
    fn test_entry_grade_labels() {
        let mut store = sample_store();
        store.push(SubjectEntry::with_text("Art", "x", "10"));
        store.push(SubjectEntry::with_text("Music", "11", "10"));
        let evaluation = store.evaluate();
        let config = plain();

        let labels: Vec<String> = evaluation
            .per_entry
            .iter()
            .map(|outcome| format_entry_grade(outcome, &config))
            .collect();
        assert_eq!(
            labels,
            [
                "Grade: A+",
                "Grade: B+",
                "Grade: Invalid number",
                "Grade: Invalid range"
            ]
        );
    }

    #[test]
    fn test_colored_grade_contains_ansi() {
        let config = DisplayConfig::default();
        let colored = format_colored_grade(GradeLetter::F, &config);
        assert!(colored.contains("\u{1b}["));
        assert!(colored.contains('F'));
    }

    #[test]
    fn test_sheet_console_lists_rows() {
        let store = sample_store();
        let evaluation = store.evaluate();
        let output = format_sheet_console(&store, &evaluation, &plain());

        assert!(output.contains(" 1. Maths"));
        assert!(output.contains(" 2. Physics"));
        assert!(output.contains("Grade: A+"));
        assert!(output.contains("Overall Grade: A"));
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_sheet_console_empty() {
        let store = EntryStore::new();
        let output = format_sheet_console(&store, &store.evaluate(), &plain());
        assert!(output.contains("(no subjects)"));
        assert!(output.contains("Total: -- / --"));
    }
}
