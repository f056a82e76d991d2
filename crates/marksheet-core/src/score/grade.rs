use serde::{Deserialize, Serialize};
use strum::{EnumIter, FromRepr, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    IntoStaticStr,
    EnumIter,
)]
#[repr(u8)]
pub enum GradeLetter {
    F = 0,
    C = 1,
    #[strum(serialize = "C+")]
    #[serde(rename = "C+")]
    CPlus = 2,
    B = 3,
    #[strum(serialize = "B+")]
    #[serde(rename = "B+")]
    BPlus = 4,
    A = 5,
    #[strum(serialize = "A+")]
    #[serde(rename = "A+")]
    APlus = 6,
    O = 7,
}

/// Inclusive lower bounds in percent, scanned top to bottom.
/// Anything below the last row is `F`.
pub const GRADE_SCALE: [(f64, GradeLetter); 7] = [
    (95.0, GradeLetter::O),
    (90.0, GradeLetter::APlus),
    (85.0, GradeLetter::A),
    (80.0, GradeLetter::BPlus),
    (75.0, GradeLetter::B),
    (70.0, GradeLetter::CPlus),
    (65.0, GradeLetter::C),
];

/// Letter for a percentage. Total over all inputs: negative, >100 and NaN
/// percentages are accepted, NaN falls through to `F`.
pub fn grade_for(percentage: f64) -> GradeLetter {
    GRADE_SCALE
        .iter()
        .find(|(min, _)| percentage >= *min)
        .map(|(_, letter)| *letter)
        .unwrap_or(GradeLetter::F)
}

impl GradeLetter {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn from_percentage(percentage: f64) -> Self {
        grade_for(percentage)
    }

    /// Lowest percentage that earns this letter, `None` for `F`.
    pub fn min_percentage(&self) -> Option<f64> {
        GRADE_SCALE
            .iter()
            .find(|(_, letter)| letter == self)
            .map(|(min, _)| *min)
    }

    pub fn is_passing(&self) -> bool {
        *self != Self::F
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for GradeLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
