//! Template name sanitization and header validation.
//!
//! Names become path components in every platform's output, so they are
//! reduced to a safe slug before use. Header problems that do not stop a
//! conversion are reported as `VALIDATION` warnings.

use anyhow::{bail, Result};

use crate::models::{Metadata, Platform, Warning};

/// Maximum length of a generated slug
pub const MAX_NAME_LENGTH: usize = 64;

/// Output name used when a template has no usable `name`
pub const FALLBACK_NAME: &str = "unnamed-workflow";

/// Reserved names that cannot be used as file stems (case-insensitive).
const RESERVED_NAMES: &[&str] = &[
    "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7", "com8",
    "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

/// Validates that a name is already a safe output slug.
///
/// A name is valid if:
/// - It is not empty
/// - It is no longer than MAX_NAME_LENGTH characters
/// - It contains only lowercase letters, digits, and single dashes
/// - It does not start or end with a dash
/// - It does not use reserved system names
///
/// # Examples
///
/// ```
/// use weft::validation::validate_name;
///
/// assert!(validate_name("code-review").is_ok());
/// assert!(validate_name("Code Review").is_err());
/// assert!(validate_name("../etc/passwd").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("Name cannot be empty");
    }

    if name.len() > MAX_NAME_LENGTH {
        bail!(
            "Name too long: {} characters (max {})",
            name.len(),
            MAX_NAME_LENGTH
        );
    }

    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !valid_chars {
        bail!("Name '{name}' contains invalid characters. Use only lowercase letters, digits, and dashes (-)");
    }

    if name.starts_with('-') || name.ends_with('-') || name.contains("--") {
        bail!("Name '{name}' has leading, trailing, or repeated dashes");
    }

    if RESERVED_NAMES.contains(&name) {
        bail!("Name '{name}' uses a reserved name");
    }

    Ok(())
}

/// Reduce arbitrary text to a file-safe slug
///
/// Returns an empty string when nothing usable remains.
pub fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    for c in raw.trim().chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    slug.truncate(MAX_NAME_LENGTH);
    let trimmed = slug.trim_end_matches('-');

    if RESERVED_NAMES.contains(&trimmed) {
        format!("{trimmed}-workflow")
    } else {
        trimmed.to_string()
    }
}

/// Output name for a template: the slug of `name`, or [`FALLBACK_NAME`]
pub fn output_name(metadata: &Metadata) -> String {
    metadata
        .name
        .as_deref()
        .map(slugify)
        .filter(|slug| !slug.is_empty())
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

/// Header checks that apply before any platform-specific mapping
pub fn validate_metadata(metadata: &Metadata, platform: Platform) -> Vec<Warning> {
    let mut warnings = Vec::new();

    match metadata.name.as_deref() {
        None => warnings.push(
            Warning::validation("Missing recommended field")
                .with_field("name")
                .with_details(format!("output files use '{FALLBACK_NAME}'")),
        ),
        Some(name) => {
            if let Err(e) = validate_name(name) {
                warnings.push(
                    Warning::validation(e.to_string())
                        .with_field("name")
                        .with_details(format!("output files use '{}'", output_name(metadata))),
                );
            }
        }
    }

    match metadata.description.as_deref() {
        None => warnings.push(Warning::validation("Missing recommended field").with_field("description")),
        Some(description) => {
            let length = description.chars().count();
            if let Some(limit) = platform.description_limit() {
                if length > limit {
                    warnings.push(
                        Warning::limit(format!(
                            "Description exceeds the {} limit of {limit} characters",
                            platform.display_name()
                        ))
                        .with_field("description")
                        .with_details(format!("{length} characters")),
                    );
                }
            }
        }
    }

    if metadata.excludes_platform(platform) {
        let declared: Vec<&str> = metadata.platforms.iter().map(|p| p.id()).collect();
        warnings.push(
            Warning::validation(format!(
                "Template does not declare support for {}",
                platform.display_name()
            ))
            .with_field("platforms")
            .with_details(declared.join(", ")),
        );
    }

    for (field, patterns) in [("globs", &metadata.globs), ("applyTo", &metadata.apply_to)] {
        for pattern in patterns {
            if let Err(e) = glob::Pattern::new(pattern) {
                warnings.push(
                    Warning::validation(format!("Invalid glob pattern '{pattern}'"))
                        .with_field(field)
                        .with_details(e.msg),
                );
            }
        }
    }

    for (event, bindings) in &metadata.hooks {
        if bindings.iter().any(|b| b.command.trim().is_empty()) {
            warnings.push(
                Warning::validation("Hook binding has an empty command")
                    .with_field(format!("hooks.{event}")),
            );
        }
    }

    warnings
}

/// Clap value parser for platform arguments.
///
/// # Examples
///
/// ```ignore
/// #[arg(short, long, value_parser = clap_platform_parser)]
/// target: Vec<Platform>,
/// ```
pub fn clap_platform_parser(s: &str) -> Result<Platform, String> {
    s.parse::<Platform>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WarningCategory;

    fn metadata(yaml: &str) -> Metadata {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_validate_name_valid() {
        assert!(validate_name("code-review").is_ok());
        assert!(validate_name("a").is_ok());
        assert!(validate_name("v2-release-notes").is_ok());
    }

    #[test]
    fn test_validate_name_invalid() {
        assert!(validate_name("").unwrap_err().to_string().contains("cannot be empty"));
        assert!(validate_name("Code Review").is_err());
        assert!(validate_name("../passwd").is_err());
        assert!(validate_name("-lead").is_err());
        assert!(validate_name("double--dash").is_err());
        assert!(validate_name("nul").unwrap_err().to_string().contains("reserved"));
        assert!(validate_name(&"a".repeat(MAX_NAME_LENGTH + 1))
            .unwrap_err()
            .to_string()
            .contains("too long"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Code Review"), "code-review");
        assert_eq!(slugify("  ../Deploy: Prod!  "), "deploy-prod");
        assert_eq!(slugify("Ünïcode name"), "n-code-name");
        assert_eq!(slugify("CON"), "con-workflow");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn test_slugify_truncates_without_trailing_dash() {
        let raw = format!("{} tail", "a".repeat(MAX_NAME_LENGTH - 1));
        let slug = slugify(&raw);
        assert!(slug.len() <= MAX_NAME_LENGTH);
        assert!(!slug.ends_with('-'));
        assert!(validate_name(&slug).is_ok());
    }

    #[test]
    fn test_output_name_fallback() {
        assert_eq!(output_name(&metadata("description: x")), FALLBACK_NAME);
        assert_eq!(output_name(&metadata("name: '!!!'")), FALLBACK_NAME);
        assert_eq!(output_name(&metadata("name: My Flow")), "my-flow");
    }

    #[test]
    fn test_missing_description_is_validation_warning() {
        for platform in Platform::ALL {
            let warnings = validate_metadata(&metadata("name: foo"), platform);
            assert_eq!(warnings.len(), 1);
            assert_eq!(warnings[0].category, WarningCategory::Validation);
            assert_eq!(warnings[0].field.as_deref(), Some("description"));
        }
    }

    #[test]
    fn test_unslugged_name_is_reported() {
        let warnings = validate_metadata(&metadata("name: My Flow\ndescription: d"), Platform::Cursor);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].details.as_deref(), Some("output files use 'my-flow'"));
    }

    #[test]
    fn test_long_description_on_claude() {
        let yaml = format!("name: foo\ndescription: {}", "d".repeat(1025));
        let claude = validate_metadata(&metadata(&yaml), Platform::Claude);
        assert_eq!(claude[0].category, WarningCategory::Limit);
        assert!(validate_metadata(&metadata(&yaml), Platform::Cursor).is_empty());
    }

    #[test]
    fn test_excluded_platform_and_bad_globs() {
        let meta = metadata(
            "name: foo\ndescription: d\nplatforms: [cursor]\nglobs: [\"src/[\"]\nhooks:\n  Stop:\n    - command: \"\"\n",
        );
        let fields: Vec<_> = validate_metadata(&meta, Platform::Windsurf)
            .into_iter()
            .map(|w| w.field.unwrap_or_default())
            .collect();
        assert_eq!(fields, vec!["platforms", "globs", "hooks.Stop"]);
    }

    #[test]
    fn test_clap_platform_parser() {
        assert_eq!(clap_platform_parser("cursor"), Ok(Platform::Cursor));
        assert!(clap_platform_parser("emacs").is_err());
    }
}
