//! Parsed template container.

use super::metadata::Metadata;

/// A template split into its typed header and untouched body
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTemplate {
    pub metadata: Metadata,
    pub content: String,
}

impl ParsedTemplate {
    pub fn new(metadata: Metadata, content: String) -> Self {
        Self { metadata, content }
    }
}
