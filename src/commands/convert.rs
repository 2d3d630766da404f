//! `weft convert`: write platform files for one template.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::common::{read_template, warning_line};
use crate::config::{Config, ConvertConfig};
use crate::models::{Platform, TransformationResult, Warning, WarningCategory};
use crate::pipeline::{convert, ConvertOptions};

/// Flags given on the command line
#[derive(Debug, Clone, Default)]
pub struct ConvertRequest {
    pub template: PathBuf,
    pub targets: Vec<Platform>,
    pub out_dir: Option<PathBuf>,
    pub strict: bool,
    pub quiet: bool,
    pub dry_run: bool,
    pub config: Option<PathBuf>,
}

/// Flags merged over `weft.toml`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSettings {
    pub targets: Vec<Platform>,
    pub out_dir: PathBuf,
    pub strict: bool,
    pub quiet: bool,
}

impl ConvertSettings {
    pub fn resolve(request: &ConvertRequest, config: &ConvertConfig) -> Self {
        let targets = if request.targets.is_empty() {
            config.targets_or_all()
        } else {
            request.targets.clone()
        };
        Self {
            targets,
            out_dir: request
                .out_dir
                .clone()
                .unwrap_or_else(|| config.out_dir_or_default()),
            strict: request.strict || config.strict,
            quiet: request.quiet || config.quiet,
        }
    }
}

pub fn execute(request: ConvertRequest) -> Result<()> {
    let config = match &request.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(Path::new("."))?,
    };
    let settings = ConvertSettings::resolve(&request, &config.convert);
    debug!(?settings, "Resolved convert settings");

    let input = read_template(&request.template)?;
    let options = ConvertOptions {
        strict: settings.strict,
    };
    let conversion = convert(&input, &settings.targets, &options)
        .with_context(|| format!("Failed to parse {}", request.template.display()))?;

    let mut failed = Vec::new();
    for result in &conversion.results {
        if result.success && !request.dry_run {
            write_files(&settings.out_dir, &result.files)?;
        }
        print_result(result, &settings, request.dry_run);
        if !result.success {
            failed.push(result.platform.id());
        }
    }

    if !failed.is_empty() {
        bail!(
            "Conversion failed for {} of {} platform(s): {}",
            failed.len(),
            conversion.results.len(),
            failed.join(", ")
        );
    }
    Ok(())
}

/// Write `files` below `out_dir`, creating parent directories
///
/// Returns the written paths in output order.
pub fn write_files(out_dir: &Path, files: &BTreeMap<String, String>) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());
    for (relative, content) in files {
        let path = out_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "Wrote output file");
        written.push(path);
    }
    Ok(written)
}

/// Warnings that survive `--quiet`
pub fn visible_warnings(warnings: &[Warning], quiet: bool) -> impl Iterator<Item = &Warning> {
    warnings
        .iter()
        .filter(move |w| !quiet || w.category == WarningCategory::Security)
}

fn print_result(result: &TransformationResult, settings: &ConvertSettings, dry_run: bool) {
    let platform = result.platform.display_name();
    if result.success {
        let verb = if dry_run { "Would write" } else { "Wrote" };
        println!(
            "{} {} {verb} {} file(s)",
            "✓".green().bold(),
            platform.bold(),
            result.files.len()
        );
        for path in result.files.keys() {
            println!("    {}", settings.out_dir.join(path).display());
        }
    } else {
        println!(
            "{} {} {}",
            "✗".red().bold(),
            platform.bold(),
            result.error.as_deref().unwrap_or("conversion failed")
        );
    }

    for warning in visible_warnings(&result.warnings, settings.quiet) {
        println!("  {}", warning_line(warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_config() {
        let config = ConvertConfig {
            targets: vec![Platform::Cursor],
            out_dir: Some(PathBuf::from("from-config")),
            strict: true,
            quiet: false,
        };
        let request = ConvertRequest {
            targets: vec![Platform::Copilot],
            out_dir: Some(PathBuf::from("from-flag")),
            quiet: true,
            ..Default::default()
        };
        let settings = ConvertSettings::resolve(&request, &config);
        assert_eq!(settings.targets, vec![Platform::Copilot]);
        assert_eq!(settings.out_dir, PathBuf::from("from-flag"));
        assert!(settings.strict);
        assert!(settings.quiet);
    }

    #[test]
    fn test_defaults_without_config() {
        let settings = ConvertSettings::resolve(&ConvertRequest::default(), &ConvertConfig::default());
        assert_eq!(settings.targets, Platform::ALL.to_vec());
        assert_eq!(settings.out_dir, PathBuf::from("."));
    }

    #[test]
    fn test_quiet_keeps_security_warnings() {
        let warnings = vec![
            Warning::emulated("a"),
            Warning::security("b"),
            Warning::limit("c"),
        ];
        let quiet: Vec<_> = visible_warnings(&warnings, true).collect();
        assert_eq!(quiet, vec![&warnings[1]]);
        assert_eq!(visible_warnings(&warnings, false).count(), 3);
    }

    #[test]
    fn test_write_files_creates_parents() {
        let dir = TempDir::new().unwrap();
        let mut files = BTreeMap::new();
        files.insert(".cursor/rules/a.mdc".to_string(), "A".to_string());
        files.insert(".github/prompts/b.prompt.md".to_string(), "B".to_string());

        let written = write_files(dir.path(), &files).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(fs::read_to_string(dir.path().join(".cursor/rules/a.mdc")).unwrap(), "A");
        assert_eq!(
            fs::read_to_string(dir.path().join(".github/prompts/b.prompt.md")).unwrap(),
            "B"
        );
    }
}
