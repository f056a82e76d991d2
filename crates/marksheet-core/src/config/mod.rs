//! Display configuration.
//!
//! Only presentation is configurable. The grading scale is fixed in
//! `score::GRADE_SCALE`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Fixed presentation defaults.
pub mod display {
    /// Decimal places for totals and percentages.
    pub const DEFAULT_PRECISION: usize = 2;

    /// Upper bound for `precision`; larger values are clamped.
    pub const MAX_PRECISION: usize = 6;

    /// Shown in place of a withheld total, percentage or grade.
    pub const PLACEHOLDER: &str = "--";

    /// Rows an interactive sheet starts with.
    pub const DEFAULT_INITIAL_ROWS: usize = 1;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub precision: usize,
    pub placeholder: String,
    pub color: bool,
    pub initial_rows: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: display::DEFAULT_PRECISION,
            placeholder: display::PLACEHOLDER.to_string(),
            color: true,
            initial_rows: display::DEFAULT_INITIAL_ROWS,
        }
    }
}

impl DisplayConfig {
    /// Load from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse TOML content. Missing keys keep their defaults.
    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content)?;
        config.precision = config.precision.min(display::MAX_PRECISION);
        Ok(config)
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}
