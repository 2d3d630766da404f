//! Integration tests for weft conversions
//!
//! These tests drive the public pipeline end to end: parsing, detection,
//! rewriting and per-platform assembly, plus the CLI file writer.

pub mod cli_writer;
pub mod helpers;
pub mod properties;
pub mod scenarios;
