//! # marksheet-core
//!
//! Core library for the marksheet grade calculator.
//!
//! This crate provides:
//! - The fixed letter-grade scale and percentage lookup
//! - An insertion-ordered entry store with stable handles
//! - A pure grade engine: per-entry validation and a weighted aggregate
//! - Console, TSV and JSON rendering of an evaluation
//!
//! Presenters own the store, edit rows through it, and call
//! `EntryStore::evaluate` (or `evaluate_all`) whenever they need results.

pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod score;
pub mod sheet;

// Re-export from config module
pub use config::DisplayConfig;

// Re-export from engine module
pub use engine::{
    Aggregate, EntryGrade, EntryOutcome, Evaluation, GradeResult, UnavailableReason, evaluate_all,
    evaluate_entry, evaluate_subject,
};

// Re-export from error module
pub use error::{Error, Result, ValidationError};

// Re-export from export module
pub use export::{
    Report, format_sheet_console, format_summary, generate_report_json, generate_report_tsv,
};

// Re-export from score module
pub use score::{GRADE_SCALE, GradeLetter, grade_for};

// Re-export from sheet module
pub use sheet::{EntryHandle, EntryStore, Field, SubjectEntry, parse_field};
