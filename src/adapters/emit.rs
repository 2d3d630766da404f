//! Frontmatter documents.
//!
//! Keys are emitted in insertion order so every platform's header reads
//! the same way across runs.

use serde_yaml::{Mapping, Value};
use tracing::warn;

/// Ordered YAML header under construction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    map: Mapping,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&mut self, key: &str, value: Value) -> &mut Self {
        self.map.insert(Value::String(key.to_string()), value);
        self
    }

    pub fn string(&mut self, key: &str, value: &str) -> &mut Self {
        self.value(key, Value::String(value.to_string()))
    }

    pub fn optional(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.string(key, value);
        }
        self
    }

    pub fn bool(&mut self, key: &str, value: bool) -> &mut Self {
        self.value(key, Value::Bool(value))
    }

    /// A YAML sequence; skipped when empty
    pub fn list(&mut self, key: &str, items: &[String]) -> &mut Self {
        if !items.is_empty() {
            let seq = items.iter().cloned().map(Value::String).collect();
            self.value(key, Value::Sequence(seq));
        }
        self
    }

    /// A comma-separated string; skipped when empty
    pub fn joined(&mut self, key: &str, items: &[String]) -> &mut Self {
        if !items.is_empty() {
            self.string(key, &items.join(", "));
        }
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// `---` delimited header followed by `body`
    pub fn document(&self, body: &str) -> String {
        let yaml = if self.map.is_empty() {
            String::new()
        } else {
            match serde_yaml::to_string(&self.map) {
                Ok(yaml) => yaml,
                Err(e) => {
                    warn!("Failed to serialize frontmatter: {e}");
                    String::new()
                }
            }
        };

        let mut out = String::with_capacity(yaml.len() + body.len() + 8);
        out.push_str("---\n");
        out.push_str(&yaml);
        out.push_str("---\n");
        out.push_str(body);
        out
    }
}
