//! Template parsing: frontmatter header into `Metadata`, body kept verbatim.

use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use tracing::debug;

use super::error::ParseError;
use super::frontmatter::split_frontmatter;
use crate::models::metadata::{ActivationTrigger, ContextMode, ExecutionMode, Metadata};
use crate::models::template::ParsedTemplate;

/// Parse a template into typed metadata and body text
///
/// Missing recommended fields (`name`, `description`) are not errors here;
/// they surface later as validation warnings.
///
/// # Errors
///
/// Returns an error if the header delimiters are missing, the header is not
/// a YAML mapping, or a scalar enumerated field holds an unknown value.
pub fn parse_template(input: &str) -> Result<ParsedTemplate, ParseError> {
    let (header, body) = split_frontmatter(input)?;

    let value: Value = if header.trim().is_empty() {
        Value::Mapping(Mapping::new())
    } else {
        serde_yaml::from_str(header).map_err(ParseError::InvalidYaml)?
    };

    let value = match value {
        Value::Null => Value::Mapping(Mapping::new()),
        Value::Mapping(_) => value,
        _ => return Err(ParseError::HeaderNotMapping),
    };

    if let Value::Mapping(mapping) = &value {
        check_enum_field::<ContextMode>(mapping, "context")?;
        check_enum_field::<ActivationTrigger>(mapping, "trigger")?;
        check_enum_field::<ExecutionMode>(mapping, "mode")?;
    }

    let metadata: Metadata = serde_yaml::from_value(value).map_err(ParseError::Schema)?;

    debug!(
        name = metadata.name.as_deref().unwrap_or("<unnamed>"),
        passthrough = metadata.extra.len(),
        body_len = body.len(),
        "Parsed template"
    );

    Ok(ParsedTemplate::new(metadata, body.to_string()))
}

/// Reject an unknown value for a scalar enumerated field, naming the field
fn check_enum_field<T: DeserializeOwned>(mapping: &Mapping, field: &str) -> Result<(), ParseError> {
    let Some(value) = mapping.get(field) else {
        return Ok(());
    };
    if value.is_null() {
        return Ok(());
    }

    serde_yaml::from_value::<T>(value.clone())
        .map(|_| ())
        .map_err(|e| ParseError::InvalidField {
            field: field.to_string(),
            reason: e.to_string(),
        })
}
