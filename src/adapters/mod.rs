//! Platform adapters.
//!
//! An adapter maps the template header onto the platform's native file
//! format and wraps the already-rewritten body into output files. Paths are
//! relative; writing them is the caller's business.

mod claude;
mod copilot;
mod cursor;
mod draft;
pub mod emit;
pub mod split;
mod windsurf;

use std::collections::BTreeMap;

use crate::models::{ActivationTrigger, Metadata, Platform, Warning};
use crate::validation::slugify;

pub use claude::ClaudeAdapter;
pub use copilot::CopilotAdapter;
pub use cursor::CursorAdapter;
pub use windsurf::WindsurfAdapter;

/// Output files and adapter warnings for one platform
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembled {
    /// Relative path to file text
    pub files: BTreeMap<String, String>,
    pub warnings: Vec<Warning>,
}

pub trait PlatformAdapter {
    fn platform(&self) -> Platform;

    /// Build the output files from the header and the rewritten body
    fn assemble(&self, metadata: &Metadata, body: &str) -> Assembled;
}

pub fn adapter_for(platform: Platform) -> &'static dyn PlatformAdapter {
    match platform {
        Platform::Claude => &ClaudeAdapter,
        Platform::Cursor => &CursorAdapter,
        Platform::Windsurf => &WindsurfAdapter,
        Platform::Copilot => &CopilotAdapter,
    }
}

/// File stem of the persona emulating `agent`
///
/// # Examples
///
/// ```
/// use weft::adapters::persona_name;
///
/// assert_eq!(persona_name("security-reviewer"), "agent-security-reviewer");
/// assert_eq!(persona_name("Code Reviewer"), "agent-code-reviewer");
/// ```
pub fn persona_name(agent: &str) -> String {
    let slug = slugify(agent);
    if slug.is_empty() {
        "agent-persona".to_string()
    } else {
        format!("agent-{slug}")
    }
}

/// How a rule-style platform should load the workflow
///
/// An explicit `trigger` wins. Otherwise `alwaysApply: true` means always
/// on, path patterns mean glob activation, a description lets the model
/// decide, and anything else is manual.
pub fn effective_trigger(metadata: &Metadata) -> ActivationTrigger {
    if let Some(trigger) = metadata.trigger {
        return trigger;
    }
    if metadata.always_apply == Some(true) {
        ActivationTrigger::AlwaysOn
    } else if !metadata.path_patterns().is_empty() {
        ActivationTrigger::Glob
    } else if metadata.description.is_some() {
        ActivationTrigger::ModelDecision
    } else {
        ActivationTrigger::Manual
    }
}

/// Warning for a glob trigger that has no patterns to match
fn patternless_glob_trigger(platform: Platform) -> Warning {
    Warning::validation(format!(
        "Glob activation on {} needs `globs` or `applyTo` patterns",
        platform.display_name()
    ))
    .with_field("trigger")
}
