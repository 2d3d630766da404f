pub mod adapters;
pub mod commands;
pub mod completions;
pub mod config;
pub mod detect;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod transform;
pub mod validation;

pub use models::{Platform, TransformationResult, Warning, WarningCategory};
pub use pipeline::{convert, Conversion, ConvertOptions};
