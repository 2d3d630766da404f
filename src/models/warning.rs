//! Conversion warnings and per-platform results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::platform::Platform;

/// Why a warning was raised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningCategory {
    /// A recommended header field is missing or questionable
    Validation,
    /// A construct was replaced by an approximate equivalent
    Emulated,
    /// A construct or field has no meaning on the target and was dropped
    Unsupported,
    /// A trust or permission construct was downgraded to advisory text
    Security,
    /// Output or referenced context exceeds a platform size ceiling
    Limit,
}

impl WarningCategory {
    pub fn label(&self) -> &'static str {
        match self {
            WarningCategory::Validation => "VALIDATION",
            WarningCategory::Emulated => "EMULATED",
            WarningCategory::Unsupported => "UNSUPPORTED",
            WarningCategory::Security => "SECURITY",
            WarningCategory::Limit => "LIMIT",
        }
    }
}

impl fmt::Display for WarningCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A non-fatal issue found while converting a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub category: WarningCategory,
    pub message: String,
    /// Header field or construct kind the warning refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Warning {
    pub fn new(category: WarningCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            field: None,
            details: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(WarningCategory::Validation, message)
    }

    pub fn emulated(message: impl Into<String>) -> Self {
        Self::new(WarningCategory::Emulated, message)
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(WarningCategory::Unsupported, message)
    }

    pub fn security(message: impl Into<String>) -> Self {
        Self::new(WarningCategory::Security, message)
    }

    pub fn limit(message: impl Into<String>) -> Self {
        Self::new(WarningCategory::Limit, message)
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.category)?;
        if let Some(field) = &self.field {
            write!(f, " {field}:")?;
        }
        write!(f, " {}", self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({details})")?;
        }
        Ok(())
    }
}

/// Outcome of converting one template for one platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformationResult {
    pub platform: Platform,
    pub success: bool,
    /// Relative output path to file text
    pub files: BTreeMap<String, String>,
    pub warnings: Vec<Warning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TransformationResult {
    pub fn success(
        platform: Platform,
        files: BTreeMap<String, String>,
        warnings: Vec<Warning>,
    ) -> Self {
        Self {
            platform,
            success: true,
            files,
            warnings,
            error: None,
        }
    }

    pub fn failure(platform: Platform, error: String, warnings: Vec<Warning>) -> Self {
        Self {
            platform,
            success: false,
            files: BTreeMap::new(),
            warnings,
            error: Some(error),
        }
    }

    pub fn warnings_in(&self, category: WarningCategory) -> impl Iterator<Item = &Warning> {
        self.warnings.iter().filter(move |w| w.category == category)
    }

    pub fn has_warning(&self, category: WarningCategory) -> bool {
        self.warnings_in(category).next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_display() {
        let warning = Warning::security("Permission rules are advisory only")
            .with_field("permissions.deny")
            .with_details("2 rules");
        assert_eq!(
            warning.to_string(),
            "[SECURITY] permissions.deny: Permission rules are advisory only (2 rules)"
        );
    }

    #[test]
    fn test_failure_has_no_files() {
        let result = TransformationResult::failure(
            Platform::Cursor,
            "blocked".to_string(),
            vec![Warning::limit("too big")],
        );
        assert!(!result.success);
        assert!(result.files.is_empty());
        assert!(result.has_warning(WarningCategory::Limit));
        assert!(!result.has_warning(WarningCategory::Security));
    }
}
