//! Helpers shared by command implementations.

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use std::fs;
use std::path::Path;

use crate::models::{Warning, WarningCategory};

/// Read a template file as UTF-8 text
pub fn read_template(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read template: {}", path.display()))
}

/// Collapse `s` to one line and cut it to `max_len` characters
pub fn truncate_for_display(s: &str, max_len: usize) -> String {
    let single_line: String = s.lines().collect::<Vec<_>>().join(" ");

    if single_line.chars().count() <= max_len {
        single_line
    } else {
        let truncated: String = single_line
            .chars()
            .take(max_len.saturating_sub(1))
            .collect();
        format!("{truncated}…")
    }
}

/// 1-based line and column of a byte offset
pub fn line_col(content: &str, offset: usize) -> (usize, usize) {
    let before = &content[..offset.min(content.len())];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

/// Category tag coloured by severity
pub fn category_tag(category: WarningCategory) -> ColoredString {
    let tag = format!("[{category}]");
    match category {
        WarningCategory::Security => tag.red().bold(),
        WarningCategory::Limit => tag.magenta(),
        WarningCategory::Unsupported => tag.yellow(),
        WarningCategory::Emulated => tag.cyan(),
        WarningCategory::Validation => tag.blue(),
    }
}

pub fn warning_line(warning: &Warning) -> String {
    let mut line = category_tag(warning.category).to_string();
    if let Some(field) = &warning.field {
        line.push_str(&format!(" {}:", field.bold()));
    }
    line.push(' ');
    line.push_str(&warning.message);
    if let Some(details) = &warning.details {
        line.push_str(&format!(" {}", format!("({details})").dimmed()));
    }
    line
}
