//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod calc;
pub mod grade;
pub mod sheet;
