//! Cursor project rules: `.cursor/rules/<name>.mdc`.

use crate::models::{ActivationTrigger, Metadata, Platform};

use super::draft::Draft;
use super::emit::Frontmatter;
use super::{effective_trigger, patternless_glob_trigger, Assembled, PlatformAdapter};

const RULES_DIR: &str = ".cursor/rules";

pub struct CursorAdapter;

impl PlatformAdapter for CursorAdapter {
    fn platform(&self) -> Platform {
        Platform::Cursor
    }

    fn assemble(&self, metadata: &Metadata, body: &str) -> Assembled {
        let mut draft = Draft::new(Platform::Cursor, metadata);
        let trigger = effective_trigger(metadata);
        let patterns = metadata.path_patterns();

        // Manual rules carry no description, otherwise Cursor would offer
        // them to the model; keep it visible in the body instead.
        let mut header = Frontmatter::new();
        if trigger == ActivationTrigger::Manual {
            if let Some(description) = &metadata.description {
                draft.preface(format!("> {description}"));
            }
            if !patterns.is_empty() {
                draft.unsupported("globs", Some("manual rules are not attached by path".to_string()));
            }
        } else {
            header
                .optional("description", metadata.description.as_deref())
                .joined("globs", &patterns);
        }
        if trigger == ActivationTrigger::Glob && patterns.is_empty() {
            draft.warn(patternless_glob_trigger(Platform::Cursor));
        }
        header.bool("alwaysApply", trigger == ActivationTrigger::AlwaysOn);
        if trigger != ActivationTrigger::AlwaysOn && metadata.always_apply == Some(true) {
            draft.unsupported("alwaysApply", Some(format!("the {trigger} trigger takes precedence")));
        }

        let mut persona_header = Frontmatter::new();
        if let Some(agent) = &metadata.agent {
            persona_header
                .string("description", &format!("Persona for the {agent} agent"))
                .bool("alwaysApply", false);
        }
        draft.persona(|persona| format!("{RULES_DIR}/{persona}.mdc"), &persona_header);
        draft.isolated_context();
        draft.advisory_tools(&metadata.tools);
        draft.advisory_permissions();
        draft.hooks_unsupported();
        draft.drop_fields(&["model", "version", "author", "labels", "excludeAgent", "mode"]);
        draft.drop_extra();

        let body = draft.compose(body);
        draft.place(RULES_DIR, ".mdc", &header, &body);
        draft.finish()
    }
}
