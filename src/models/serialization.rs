//! Lenient serde helpers for template header fields.
//!
//! Template authors write list fields either as YAML sequences or as a single
//! comma-separated string. These helpers normalize both forms to `Vec<T>`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;
use std::str::FromStr;

/// Render a YAML scalar as a string, or `None` for null / non-scalar values
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn split_items(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
}

/// Collect list items from a YAML value that is a sequence, a comma-separated
/// string, a single scalar, or null
///
/// Only a plain string is split on commas. Sequence items are kept whole so
/// brace globs such as `*.{ts,tsx}` survive.
fn collect_items<E: serde::de::Error>(value: Value) -> Result<Vec<String>, E> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(s) => Ok(split_items(&s).collect()),
        Value::Number(_) | Value::Bool(_) => Ok(scalar_to_string(&value).into_iter().collect()),
        Value::Sequence(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in &items {
                match scalar_to_string(item) {
                    Some(s) => {
                        let s = s.trim();
                        if !s.is_empty() {
                            out.push(s.to_string());
                        }
                    }
                    None if item.is_null() => {}
                    None => return Err(E::custom("list items must be scalar values")),
                }
            }
            Ok(out)
        }
        Value::Mapping(_) => Err(E::custom("expected a list or a comma-separated string")),
        Value::Tagged(tagged) => collect_items(tagged.value),
    }
}

/// Deserialize a list of strings from a sequence or comma-separated string
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    collect_items(value)
}

/// Deserialize a list of enumerated values, silently dropping unknown items
pub fn filtered_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + PartialEq,
{
    let value = Value::deserialize(deserializer)?;
    let mut out: Vec<T> = Vec::new();
    for item in collect_items::<D::Error>(value)? {
        if let Ok(parsed) = item.parse::<T>() {
            if !out.contains(&parsed) {
                out.push(parsed);
            }
        }
    }
    Ok(out)
}

/// Deserialize an optional scalar (string, number or bool) as a string
pub fn optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::Sequence(_) | Value::Mapping(_) => {
            Err(D::Error::custom("expected a scalar value"))
        }
        other => Ok(scalar_to_string(&other)),
    }
}
