use thiserror::Error;

/// Fatal template parse failure; aborts conversion for every platform
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("No frontmatter delimiter (---) found at start of template")]
    MissingOpeningDelimiter,

    #[error("Frontmatter not properly closed with ---")]
    UnclosedHeader,

    #[error("Failed to parse YAML frontmatter: {0}")]
    InvalidYaml(#[source] serde_yaml::Error),

    #[error("Frontmatter must be a mapping of key: value pairs")]
    HeaderNotMapping,

    #[error("Invalid value for '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Frontmatter does not match the template schema: {0}")]
    Schema(#[source] serde_yaml::Error),
}
