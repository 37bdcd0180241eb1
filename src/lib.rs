//! Regula core library.
//!
//! This crate exposes programmatic APIs for checking a project directory
//! tree against a fixed catalogue of organizational compliance rules and
//! rendering the outcome as a Markdown report.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Optional `regula.toml` discovery and effective settings.
//! - `models`: Severity, violation, and rule-result data model.
//! - `scan`: Deterministic file enumeration and the two scan strategies.
//! - `rules`: The rule catalogue and per-zone check implementations.
//! - `runner`: Evaluates the full catalogue into a results map.
//! - `report`: Summary arithmetic and the fixed Markdown template.
//! - `output`: Human/JSON rendering and report emission.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod report;
pub mod rules;
pub mod runner;
pub mod scan;
pub mod utils;
