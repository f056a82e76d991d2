//! Export formats for an evaluated sheet.
//!
//! Exports are one-shot reports of a single evaluation; nothing here is read
//! back into an `EntryStore`.

mod console;

pub use console::*;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::config::DisplayConfig;
use crate::engine::{Aggregate, Evaluation, UnavailableReason};
use crate::error::Result;
use crate::score::GradeLetter;
use crate::sheet::{EntryStore, SubjectEntry};

pub fn format_tsv_header() -> String {
    ["subject", "mark", "out_of", "percentage", "grade"].join("\t")
}

/// TSV report: one row per entry, then a `TOTAL` row.
///
/// Invalid rows carry their error label in the grade column; withheld
/// aggregate values use the configured placeholder.
pub fn generate_report_tsv(
    store: &EntryStore,
    evaluation: &Evaluation,
    config: &DisplayConfig,
) -> String {
    let precision = config.precision;
    let mut lines = vec![format_tsv_header()];

    for (entry, outcome) in store.entries().zip(&evaluation.per_entry) {
        let (percentage, grade) = match outcome {
            Ok(grade) => (
                format!("{:.prec$}", grade.percentage, prec = precision),
                grade.letter.short_name().to_string(),
            ),
            Err(e) => (config.placeholder.clone(), e.to_string()),
        };
        lines.push(
            [
                sanitize(&entry.subject),
                sanitize(&entry.mark),
                sanitize(&entry.out_of),
                percentage,
                grade,
            ]
            .join("\t"),
        );
    }

    let total_row = match evaluation.aggregate.result() {
        Some(result) => [
            "TOTAL".to_string(),
            format!("{:.prec$}", result.total_got, prec = precision),
            format!("{:.prec$}", result.total_out_of, prec = precision),
            format!("{:.prec$}", result.percentage, prec = precision),
            result.letter.short_name().to_string(),
        ],
        None => [
            "TOTAL".to_string(),
            config.placeholder.clone(),
            config.placeholder.clone(),
            config.placeholder.clone(),
            config.placeholder.clone(),
        ],
    };
    lines.push(total_row.join("\t"));

    lines.join("\n")
}

/// Tabs and newlines would break the column layout.
fn sanitize(field: &str) -> String {
    field.replace(['\t', '\n', '\r'], " ")
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub subject: String,
    pub mark: String,
    pub out_of: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<GradeLetter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportAggregate {
    Available {
        total_got: f64,
        total_out_of: f64,
        percentage: f64,
        grade: GradeLetter,
    },
    Unavailable {
        reason: UnavailableReason,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Local>,
    pub entries: Vec<ReportEntry>,
    pub aggregate: ReportAggregate,
}

impl Report {
    pub fn new(store: &EntryStore, evaluation: &Evaluation, generated_at: DateTime<Local>) -> Self {
        let entries = store
            .entries()
            .zip(&evaluation.per_entry)
            .map(|(entry, outcome)| report_entry(entry, outcome))
            .collect();

        let aggregate = match evaluation.aggregate {
            Aggregate::Available(result) => ReportAggregate::Available {
                total_got: result.total_got,
                total_out_of: result.total_out_of,
                percentage: result.percentage,
                grade: result.letter,
            },
            Aggregate::Unavailable(reason) => ReportAggregate::Unavailable { reason },
        };

        Self {
            generated_at,
            entries,
            aggregate,
        }
    }
}

fn report_entry(entry: &SubjectEntry, outcome: &crate::engine::EntryOutcome) -> ReportEntry {
    let (percentage, grade, error) = match outcome {
        Ok(grade) => (Some(grade.percentage), Some(grade.letter), None),
        Err(e) => (None, None, Some(e.to_string())),
    };
    ReportEntry {
        subject: entry.subject.clone(),
        mark: entry.mark.clone(),
        out_of: entry.out_of.clone(),
        percentage,
        grade,
        error,
    }
}

/// Pretty-printed JSON report stamped with the current local time.
pub fn generate_report_json(store: &EntryStore, evaluation: &Evaluation) -> Result<String> {
    let report = Report::new(store, evaluation, Local::now());
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value as JsonValue;

    fn store(entries: &[SubjectEntry]) -> EntryStore {
        let mut store = EntryStore::new();
        for entry in entries {
            store.push(entry.clone());
        }
        store
    }

    #[test]
    fn test_tsv_report_available() {
        let store = store(&[
            SubjectEntry::with_marks("Maths", 90.0, 100.0),
            SubjectEntry::with_marks("Physics", 40.0, 50.0),
        ]);
        let tsv = generate_report_tsv(&store, &store.evaluate(), &DisplayConfig::default());
        let lines: Vec<&str> = tsv.lines().collect();

        assert_eq!(lines[0], "subject\tmark\tout_of\tpercentage\tgrade");
        assert_eq!(lines[1], "Maths\t90\t100\t90.00\tA+");
        assert_eq!(lines[2], "Physics\t40\t50\t80.00\tB+");
        assert_eq!(lines[3], "TOTAL\t130.00\t150.00\t86.67\tA");
    }

    #[test]
    fn test_tsv_report_unavailable() {
        let store = store(&[SubjectEntry::with_text("Art\tHistory", "150", "100")]);
        let tsv = generate_report_tsv(&store, &store.evaluate(), &DisplayConfig::default());
        let lines: Vec<&str> = tsv.lines().collect();

        assert_eq!(lines[1], "Art History\t150\t100\t--\tInvalid range");
        assert_eq!(lines[2], "TOTAL\t--\t--\t--\t--");
    }

    #[test]
    fn test_json_report_structure() {
        let store = store(&[
            SubjectEntry::with_marks("Maths", 90.0, 100.0),
            SubjectEntry::with_text("Physics", "forty", "50"),
        ]);
        let json = generate_report_json(&store, &store.evaluate()).unwrap();
        let value: JsonValue = serde_json::from_str(&json).unwrap();

        assert!(value["generated_at"].is_string());
        assert_eq!(value["entries"][0]["grade"], "A+");
        assert_eq!(value["entries"][0]["percentage"], 90.0);
        assert!(value["entries"][0].get("error").is_none());
        assert_eq!(value["entries"][1]["error"], "Invalid number");
        assert!(value["entries"][1].get("grade").is_none());
        assert_eq!(value["aggregate"]["status"], "unavailable");
        assert_eq!(value["aggregate"]["reason"]["invalid_entries"]["count"], 1);
    }

    #[test]
    fn test_json_report_available_aggregate() {
        let store = store(&[SubjectEntry::with_marks("Maths", 19.0, 20.0)]);
        let report = Report::new(&store, &store.evaluate(), Local::now());
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["aggregate"]["status"], "available");
        assert_eq!(value["aggregate"]["grade"], "O");
        assert_eq!(value["aggregate"]["total_out_of"], 20.0);
    }
}
