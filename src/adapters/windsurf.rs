//! Windsurf workspace rules: `.windsurf/rules/<name>.md`.
//!
//! Rule files are capped in size. An oversized rule is split into
//! continuation files that share the main rule's header.

use crate::models::{ActivationTrigger, Metadata, Platform};

use super::draft::Draft;
use super::emit::Frontmatter;
use super::{effective_trigger, patternless_glob_trigger, Assembled, PlatformAdapter};

const RULES_DIR: &str = ".windsurf/rules";

pub struct WindsurfAdapter;

impl PlatformAdapter for WindsurfAdapter {
    fn platform(&self) -> Platform {
        Platform::Windsurf
    }

    fn assemble(&self, metadata: &Metadata, body: &str) -> Assembled {
        let mut draft = Draft::new(Platform::Windsurf, metadata);
        let trigger = effective_trigger(metadata);
        let patterns = metadata.path_patterns();

        let mut header = Frontmatter::new();
        header
            .string("trigger", &trigger.to_string())
            .optional("description", metadata.description.as_deref());
        if trigger == ActivationTrigger::Glob {
            if patterns.is_empty() {
                draft.warn(patternless_glob_trigger(Platform::Windsurf));
            }
            header.joined("globs", &patterns);
        } else if !patterns.is_empty() {
            draft.unsupported(
                "globs",
                Some(format!("only used with the glob trigger, not {trigger}")),
            );
        }

        if trigger != ActivationTrigger::AlwaysOn && metadata.always_apply == Some(true) {
            draft.unsupported("alwaysApply", Some(format!("the {trigger} trigger takes precedence")));
        }

        let mut persona_header = Frontmatter::new();
        if let Some(agent) = &metadata.agent {
            persona_header
                .string("trigger", "manual")
                .string("description", &format!("Persona for the {agent} agent"));
        }
        draft.persona(|persona| format!("{RULES_DIR}/{persona}.md"), &persona_header);
        draft.isolated_context();
        draft.advisory_tools(&metadata.tools);
        draft.advisory_permissions();
        draft.hooks_unsupported();
        draft.drop_fields(&["model", "version", "author", "labels", "excludeAgent", "mode"]);
        draft.drop_extra();

        let body = draft.compose(body);
        draft.place(RULES_DIR, ".md", &header, &body);
        draft.finish()
    }
}
