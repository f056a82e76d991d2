//! Grade engine: per-entry validation and the aggregate over a sheet.
//!
//! Every function here is pure. The entry list is only read, never mutated,
//! so evaluating an unchanged sheet twice gives identical results.

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::ValidationError;
use crate::score::{GradeLetter, grade_for};
use crate::sheet::SubjectEntry;

/// Grade of a single valid entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntryGrade {
    pub percentage: f64,
    pub letter: GradeLetter,
}

/// Weighted total across all entries of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeResult {
    pub total_got: f64,
    pub total_out_of: f64,
    pub percentage: f64,
    pub letter: GradeLetter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    /// Nothing to weigh: the sheet is empty.
    NoEntries,
    /// At least one row failed to parse or was out of range.
    InvalidEntries { count: usize },
    /// Every row was valid but the summed marks exceed the `f64` range.
    Overflow,
}

impl std::fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoEntries => write!(f, "no entries"),
            Self::InvalidEntries { count: 1 } => write!(f, "1 invalid entry"),
            Self::InvalidEntries { count } => write!(f, "{} invalid entries", count),
            Self::Overflow => write!(f, "totals out of range"),
        }
    }
}

/// Overall outcome. `Unavailable` is an ordinary result that presenters show
/// as placeholders, not a failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Aggregate {
    Available(GradeResult),
    Unavailable(UnavailableReason),
}

impl Aggregate {
    pub fn result(&self) -> Option<&GradeResult> {
        match self {
            Self::Available(result) => Some(result),
            Self::Unavailable(_) => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

pub type EntryOutcome = std::result::Result<EntryGrade, ValidationError>;

/// Per-entry outcomes in sheet order plus the aggregate, from one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub per_entry: Vec<EntryOutcome>,
    pub aggregate: Aggregate,
}

impl Evaluation {
    pub fn invalid_count(&self) -> usize {
        self.per_entry.iter().filter(|outcome| outcome.is_err()).count()
    }
}

/// Validate one `(mark, out_of)` pair and grade it.
///
/// Requires `out_of > 0` and `0 <= mark <= out_of`; non-finite values are
/// out of range as well.
pub fn evaluate_entry(mark: f64, out_of: f64) -> Result<EntryGrade, ValidationError> {
    let in_range = mark.is_finite()
        && out_of.is_finite()
        && out_of > 0.0
        && mark >= 0.0
        && mark <= out_of;
    if !in_range {
        return Err(ValidationError::InvalidRange { mark, out_of });
    }

    let percentage = (mark / out_of) * 100.0;
    Ok(EntryGrade {
        percentage,
        letter: grade_for(percentage),
    })
}

/// Parse a row's text fields and grade it.
pub fn evaluate_subject(entry: &SubjectEntry) -> EntryOutcome {
    let (mark, out_of) = entry.parse()?;
    evaluate_entry(mark, out_of)
}

/// Grade every entry and the weighted aggregate.
///
/// Bad rows never stop the pass: each one gets its own error and is left out
/// of the totals, and the aggregate is withheld if any row was bad.
pub fn evaluate_all<'a, I>(entries: I) -> Evaluation
where
    I: IntoIterator<Item = &'a SubjectEntry>,
{
    let mut per_entry = Vec::new();
    let mut total_got = 0.0;
    let mut total_out_of = 0.0;
    let mut invalid = 0;

    for entry in entries {
        let outcome = entry.parse().and_then(|(mark, out_of)| {
            evaluate_entry(mark, out_of).map(|grade| (mark, out_of, grade))
        });

        match outcome {
            Ok((mark, out_of, grade)) => {
                trace!(
                    "{:?}: {}/{} = {:.2}% ({})",
                    entry.subject,
                    mark,
                    out_of,
                    grade.percentage,
                    grade.letter
                );
                total_got += mark;
                total_out_of += out_of;
                per_entry.push(Ok(grade));
            }
            Err(e) => {
                debug!("Rejected entry {:?}: {}", entry.subject, e.detail());
                invalid += 1;
                per_entry.push(Err(e));
            }
        }
    }

    let aggregate = if invalid > 0 {
        Aggregate::Unavailable(UnavailableReason::InvalidEntries { count: invalid })
    } else if total_out_of == 0.0 {
        Aggregate::Unavailable(UnavailableReason::NoEntries)
    } else if !total_got.is_finite() || !total_out_of.is_finite() {
        Aggregate::Unavailable(UnavailableReason::Overflow)
    } else {
        let percentage = (total_got / total_out_of) * 100.0;
        Aggregate::Available(GradeResult {
            total_got,
            total_out_of,
            percentage,
            letter: grade_for(percentage),
        })
    };

    if let Aggregate::Unavailable(reason) = aggregate {
        debug!("Aggregate withheld: {}", reason);
    }

    Evaluation {
        per_entry,
        aggregate,
    }
}
