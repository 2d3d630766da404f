//! Conversion pipeline.
//!
//! A template is parsed once. Each requested platform then runs through
//! validation, detection, rewriting and assembly on its own, so one
//! platform's warnings or strict-mode failure never affects another.

use serde::Deserialize;
use std::fmt;
use tracing::{debug, info};

use crate::adapters::adapter_for;
use crate::detect::detect_constructs;
use crate::models::{ParsedTemplate, Platform, TransformationResult};
use crate::parser::{parse_template, ParseError};
use crate::transform::{rewriter_for, transform_content};
use crate::validation::validate_metadata;

/// Progress of one (template, platform) conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Parsed,
    Validated,
    ContentAnalyzed,
    ContentTransformed,
    FilesAssembled,
    Success,
    Failure,
}

impl Stage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Success | Stage::Failure)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Parsed => write!(f, "parsed"),
            Stage::Validated => write!(f, "validated"),
            Stage::ContentAnalyzed => write!(f, "content-analyzed"),
            Stage::ContentTransformed => write!(f, "content-transformed"),
            Stage::FilesAssembled => write!(f, "files-assembled"),
            Stage::Success => write!(f, "success"),
            Stage::Failure => write!(f, "failure"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ConvertOptions {
    /// Any warning fails the affected platform
    #[serde(default)]
    pub strict: bool,
}

/// Results of one conversion request, in requested platform order
#[derive(Debug, Clone)]
pub struct Conversion {
    pub template: ParsedTemplate,
    pub results: Vec<TransformationResult>,
}

impl Conversion {
    pub fn result(&self, platform: Platform) -> Option<&TransformationResult> {
        self.results.iter().find(|r| r.platform == platform)
    }

    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(|r| r.success)
    }
}

/// Convert `input` for every platform in `platforms`
///
/// Repeated platforms are converted once.
///
/// # Errors
///
/// Returns the parse error when the header is missing or malformed; no
/// platform is converted in that case.
pub fn convert(
    input: &str,
    platforms: &[Platform],
    options: &ConvertOptions,
) -> Result<Conversion, ParseError> {
    let template = parse_template(input)?;

    let mut targets: Vec<Platform> = Vec::with_capacity(platforms.len());
    for platform in platforms {
        if !targets.contains(platform) {
            targets.push(*platform);
        }
    }

    let results = targets
        .iter()
        .map(|platform| convert_parsed(&template, *platform, options))
        .collect();

    Ok(Conversion { template, results })
}

/// Convert an already-parsed template for one platform
///
/// Warnings are ordered validation first, then body rewriting, then
/// header mapping and assembly.
pub fn convert_parsed(
    template: &ParsedTemplate,
    platform: Platform,
    options: &ConvertOptions,
) -> TransformationResult {
    let mut stage = Stage::Parsed;

    let mut warnings = validate_metadata(&template.metadata, platform);
    advance(platform, &mut stage, Stage::Validated);

    let matches = detect_constructs(&template.content);
    advance(platform, &mut stage, Stage::ContentAnalyzed);

    let transformed = transform_content(&rewriter_for(platform), &template.content, &matches);
    warnings.extend(transformed.warnings);
    advance(platform, &mut stage, Stage::ContentTransformed);

    let assembled = adapter_for(platform).assemble(&template.metadata, &transformed.content);
    warnings.extend(assembled.warnings);
    advance(platform, &mut stage, Stage::FilesAssembled);

    if options.strict {
        if let Some(first) = warnings.first() {
            let error = first.to_string();
            advance(platform, &mut stage, Stage::Failure);
            info!(%platform, "Strict mode rejected conversion: {error}");
            return TransformationResult::failure(platform, error, warnings);
        }
    }

    advance(platform, &mut stage, Stage::Success);
    TransformationResult::success(platform, assembled.files, warnings)
}

fn advance(platform: Platform, stage: &mut Stage, next: Stage) {
    debug!(%platform, from = %stage, to = %next, "Conversion stage");
    *stage = next;
}
