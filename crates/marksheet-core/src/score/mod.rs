//! Letter grades and the fixed grading scale.
//!
//! - `GradeLetter` - letter grades (O, A+, A, B+, B, C+, C, F)
//! - `GRADE_SCALE` - percentage thresholds, highest first
//! - `grade_for` - percentage to letter lookup

mod grade;

pub use grade::*;
