//! Shared test helpers for conversion integration tests

use std::fs;
use std::path::{Path, PathBuf};

use weft::models::{Platform, TransformationResult, WarningCategory};
use weft::parser::parse_template;
use weft::pipeline::{convert, ConvertOptions};

/// Build a template from header lines (each ending in a newline) and a body
pub fn template(header: &str, body: &str) -> String {
    format!("---\n{header}---\n{body}")
}

/// Convert `input` for one platform with default options
pub fn convert_one(input: &str, platform: Platform) -> TransformationResult {
    let mut conversion = convert(input, &[platform], &ConvertOptions::default())
        .expect("Template should parse");
    conversion.results.remove(0)
}

/// Main output path for a non-prompt template named `name`
pub fn main_path(platform: Platform, name: &str) -> String {
    match platform {
        Platform::Claude => format!(".claude/skills/{name}/SKILL.md"),
        Platform::Cursor => format!(".cursor/rules/{name}.mdc"),
        Platform::Windsurf => format!(".windsurf/rules/{name}.md"),
        Platform::Copilot => format!(".github/instructions/{name}.instructions.md"),
    }
}

pub fn main_file<'a>(result: &'a TransformationResult, name: &str) -> &'a str {
    let path = main_path(result.platform, name);
    result
        .files
        .get(&path)
        .unwrap_or_else(|| panic!("missing {path} in {:?}", result.files.keys()))
}

/// Body of an emitted file, without its header
pub fn body_of(file: &str) -> String {
    parse_template(file).expect("Output should parse back").content
}

pub fn count(result: &TransformationResult, category: WarningCategory) -> usize {
    result.warnings.iter().filter(|w| w.category == category).count()
}

pub fn has_warning(result: &TransformationResult, category: WarningCategory, field: &str) -> bool {
    result
        .warnings
        .iter()
        .any(|w| w.category == category && w.field.as_deref() == Some(field))
}

/// Write a template into `dir` and return its path
pub fn write_template(dir: &Path, file_name: &str, content: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, content).expect("Failed to write template");
    path
}
