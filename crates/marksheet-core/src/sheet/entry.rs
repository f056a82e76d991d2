use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr)]
pub enum Field {
    #[strum(serialize = "mark")]
    Mark,
    #[strum(serialize = "out of")]
    OutOf,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse the text of a numeric field.
///
/// Surrounding whitespace is ignored. Infinities and NaN are rejected along
/// with non-numeric text so every accepted value can be range checked.
pub fn parse_field(field: Field, input: &str) -> Result<f64, ValidationError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ValidationError::InvalidNumber {
            field,
            input: input.to_string(),
        })
}

/// One subject row as the form holds it: a display name and the raw text of
/// the two numeric fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectEntry {
    pub subject: String,
    pub mark: String,
    pub out_of: String,
}

impl SubjectEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(subject: impl Into<String>, mark: &str, out_of: &str) -> Self {
        Self {
            subject: subject.into(),
            mark: mark.to_string(),
            out_of: out_of.to_string(),
        }
    }

    pub fn with_marks(subject: impl Into<String>, mark: f64, out_of: f64) -> Self {
        Self {
            subject: subject.into(),
            mark: mark.to_string(),
            out_of: out_of.to_string(),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Mark => &self.mark,
            Field::OutOf => &self.out_of,
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        match field {
            Field::Mark => self.mark = value.into(),
            Field::OutOf => self.out_of = value.into(),
        }
    }

    /// Parsed `(mark, out_of)`. The mark is parsed first, so a row with two
    /// bad fields reports the mark.
    pub fn parse(&self) -> Result<(f64, f64), ValidationError> {
        let mark = parse_field(Field::Mark, &self.mark)?;
        let out_of = parse_field(Field::OutOf, &self.out_of)?;
        Ok((mark, out_of))
    }
}
