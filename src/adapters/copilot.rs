//! GitHub Copilot custom instructions and prompt files.
//!
//! A template with a `mode` becomes a reusable prompt file under
//! `.github/prompts/`; anything else becomes a path-specific instructions
//! file under `.github/instructions/`.

use serde_yaml::Value;

use crate::models::{ActivationTrigger, ExecutionMode, Metadata, Platform};
use crate::transform::copilot_tool;

use super::draft::Draft;
use super::emit::Frontmatter;
use super::{effective_trigger, patternless_glob_trigger, Assembled, PlatformAdapter};

const INSTRUCTIONS_DIR: &str = ".github/instructions";
const PROMPTS_DIR: &str = ".github/prompts";

pub struct CopilotAdapter;

/// Output directory, file suffix and header of the main file
type Target = (&'static str, &'static str, Frontmatter);

impl PlatformAdapter for CopilotAdapter {
    fn platform(&self) -> Platform {
        Platform::Copilot
    }

    fn assemble(&self, metadata: &Metadata, body: &str) -> Assembled {
        let mut draft = Draft::new(Platform::Copilot, metadata);

        let (dir, suffix, header) = match metadata.mode {
            Some(mode) => prompt_file(&mut draft, mode),
            None => instructions_file(&mut draft),
        };

        let mut persona_header = Frontmatter::new();
        if let Some(agent) = &metadata.agent {
            persona_header.string("description", &format!("Persona for the {agent} agent"));
        }
        draft.persona(
            |persona| format!("{INSTRUCTIONS_DIR}/{persona}.instructions.md"),
            &persona_header,
        );
        draft.isolated_context();
        draft.advisory_permissions();
        draft.hooks_unsupported();
        draft.drop_fields(&["version", "author", "labels"]);
        draft.drop_extra();

        let body = draft.compose(body);
        draft.place(dir, suffix, &header, &body);
        draft.finish()
    }
}

/// Prompt files run on demand with their own mode, model and tools
fn prompt_file(draft: &mut Draft<'_>, mode: ExecutionMode) -> Target {
    let metadata = draft.metadata;
    let mut header = Frontmatter::new();
    header
        .string("mode", &mode.to_string())
        .optional("description", metadata.description.as_deref())
        .optional("model", metadata.model.as_deref());

    let mut mapped: Vec<String> = Vec::new();
    let mut unmapped: Vec<String> = Vec::new();
    for tool in &metadata.tools {
        match copilot_tool(tool) {
            Some(name) if !mapped.iter().any(|m| m == name) => mapped.push(name.to_string()),
            Some(_) => {}
            None => unmapped.push(tool.clone()),
        }
    }
    header.list("tools", &mapped);
    draft.advisory_tools(&unmapped);

    if metadata
        .trigger
        .is_some_and(|t| t != ActivationTrigger::Manual)
    {
        draft.drop_fields(&["trigger"]);
    }
    draft.drop_fields(&["alwaysApply", "globs", "applyTo", "excludeAgent"]);

    (PROMPTS_DIR, ".prompt.md", header)
}

/// Instructions files are attached by `applyTo` patterns
fn instructions_file(draft: &mut Draft<'_>) -> Target {
    let metadata = draft.metadata;
    let trigger = effective_trigger(metadata);
    let patterns = metadata.path_patterns();

    let mut header = Frontmatter::new();
    header.optional("description", metadata.description.as_deref());
    match trigger {
        ActivationTrigger::AlwaysOn if patterns.is_empty() => {
            header.string("applyTo", "**");
        }
        ActivationTrigger::Manual if !patterns.is_empty() => {
            draft.unsupported(
                "applyTo",
                Some("manual instructions are not attached by path".to_string()),
            );
        }
        ActivationTrigger::Manual => {}
        ActivationTrigger::ModelDecision if metadata.trigger.is_some() => {
            draft.drop_fields(&["trigger"]);
            header.joined("applyTo", &patterns);
        }
        ActivationTrigger::Glob if patterns.is_empty() => {
            draft.warn(patternless_glob_trigger(Platform::Copilot));
        }
        _ => {
            header.joined("applyTo", &patterns);
        }
    }

    if metadata.always_apply == Some(true) {
        if trigger != ActivationTrigger::AlwaysOn {
            draft.unsupported("alwaysApply", Some(format!("the {trigger} trigger takes precedence")));
        } else if !patterns.is_empty() {
            draft.unsupported("alwaysApply", Some("applyTo patterns take precedence".to_string()));
        }
    }

    match metadata.exclude_agent.as_slice() {
        [] => {}
        [only] => {
            header.string("excludeAgent", &only.to_string());
        }
        many => {
            let agents = many.iter().map(|a| Value::String(a.to_string())).collect();
            header.value("excludeAgent", Value::Sequence(agents));
        }
    }

    draft.advisory_tools(&metadata.tools);
    draft.drop_fields(&["model"]);

    (INSTRUCTIONS_DIR, ".instructions.md", header)
}
