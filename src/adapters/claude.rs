//! Claude Code skills: `.claude/skills/<name>/SKILL.md`.
//!
//! Claude is the richest target. Tools, model, forked context, agents and
//! hooks all map to native frontmatter, and permission rules are enforced
//! through `allowed-tools` plus a `settings.json` fragment.

use serde_json::json;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

use crate::models::{ActivationTrigger, HookBinding, Metadata, Permissions, Platform, Warning};

use super::draft::Draft;
use super::emit::Frontmatter;
use super::{Assembled, PlatformAdapter};

pub struct ClaudeAdapter;

impl PlatformAdapter for ClaudeAdapter {
    fn platform(&self) -> Platform {
        Platform::Claude
    }

    fn assemble(&self, metadata: &Metadata, body: &str) -> Assembled {
        let mut draft = Draft::new(Platform::Claude, metadata);
        let dir = format!(".claude/skills/{}", draft.name);

        let mut header = Frontmatter::new();
        header
            .string("name", &draft.name)
            .optional("description", metadata.description.as_deref())
            .joined("allowed-tools", &allowed_tools(metadata))
            .optional("model", metadata.model.as_deref());

        if metadata.is_isolated() {
            header.string("context", "fork");
        }
        header.optional("agent", metadata.agent.as_deref());

        match metadata.trigger {
            Some(ActivationTrigger::Manual) => {
                header.bool("disable-model-invocation", true);
            }
            Some(trigger @ (ActivationTrigger::AlwaysOn | ActivationTrigger::Glob)) => {
                draft.unsupported("trigger", Some(trigger.to_string()));
            }
            Some(ActivationTrigger::ModelDecision) | None => {}
        }
        draft.drop_fields(&["alwaysApply", "globs", "applyTo", "excludeAgent", "mode"]);

        if !metadata.hooks.is_empty() {
            header.value("hooks", hooks_value(&metadata.hooks));
        }
        let mut extra = metadata.extra.clone();
        let mut nested = metadata_map(metadata);
        if !nested.is_empty() {
            if matches!(extra.get("metadata"), Some(Value::Mapping(_))) {
                if let Some(Value::Mapping(passthrough)) = extra.remove("metadata") {
                    for (key, value) in passthrough {
                        if nested.contains_key(&key) {
                            let name = key.as_str().unwrap_or("?");
                            draft.warn(passthrough_conflict(&format!("metadata.{name}")));
                        } else {
                            nested.insert(key, value);
                        }
                    }
                }
            }
            header.value("metadata", Value::Mapping(nested));
        }
        for (key, value) in extra {
            if header.contains(&key) {
                draft.warn(passthrough_conflict(&key));
            } else {
                header.value(&key, value);
            }
        }

        if let Some(permissions) = metadata.permissions() {
            draft
                .files
                .insert(format!("{dir}/settings.json"), settings_fragment(permissions));
        }

        let body = draft.compose(body);
        draft
            .files
            .insert(format!("{dir}/SKILL.md"), header.document(&body));
        draft.finish()
    }
}

/// `tools` followed by explicitly allowed permission rules
fn allowed_tools(metadata: &Metadata) -> Vec<String> {
    let mut allowed = metadata.tools.clone();
    if let Some(permissions) = metadata.permissions() {
        for rule in &permissions.allow {
            if !allowed.contains(rule) {
                allowed.push(rule.clone());
            }
        }
    }
    allowed
}

fn hooks_value(hooks: &BTreeMap<String, Vec<HookBinding>>) -> Value {
    let mut events = Mapping::new();
    for (event, bindings) in hooks {
        let entries = bindings
            .iter()
            .map(|binding| {
                let mut entry = Mapping::new();
                if let Some(matcher) = &binding.matcher {
                    entry.insert("matcher".into(), matcher.as_str().into());
                }
                let mut command = Mapping::new();
                command.insert("type".into(), "command".into());
                command.insert("command".into(), binding.command.as_str().into());
                entry.insert(
                    "hooks".into(),
                    Value::Sequence(vec![Value::Mapping(command)]),
                );
                Value::Mapping(entry)
            })
            .collect();
        events.insert(event.as_str().into(), Value::Sequence(entries));
    }
    Value::Mapping(events)
}

/// `version`, `author` and `labels` under a `metadata` map
fn metadata_map(metadata: &Metadata) -> Mapping {
    let mut map = Mapping::new();
    if let Some(version) = &metadata.version {
        map.insert("version".into(), version.as_str().into());
    }
    if let Some(author) = &metadata.author {
        map.insert("author".into(), author.as_str().into());
    }
    if !metadata.labels.is_empty() {
        let labels = metadata.labels.iter().map(|l| l.as_str().into()).collect();
        map.insert("labels".into(), Value::Sequence(labels));
    }
    map
}

fn passthrough_conflict(field: &str) -> Warning {
    Warning::validation(format!(
        "`{field}` collides with a generated Claude Code field; the passthrough value was dropped"
    ))
    .with_field(field)
}

/// Permission rules in `.claude/settings.json` shape, for merging
fn settings_fragment(permissions: &Permissions) -> String {
    let settings = json!({
        "permissions": {
            "allow": permissions.allow,
            "deny": permissions.deny,
        }
    });
    format!("{settings:#}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WarningCategory;
    use crate::parser::parse_template;

    fn assemble(yaml: &str, body: &str) -> Assembled {
        let metadata: Metadata = serde_yaml::from_str(yaml).unwrap();
        ClaudeAdapter.assemble(&metadata, body)
    }

    #[test]
    fn test_skill_file_layout() {
        let out = assemble("name: Code Review\ndescription: Review a diff\n", "\nBody\n");
        assert_eq!(out.files.len(), 1);
        assert_eq!(
            out.files[".claude/skills/code-review/SKILL.md"],
            "---\nname: code-review\ndescription: Review a diff\n---\n\nBody\n"
        );
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_native_fields() {
        let out = assemble(
            "name: audit\ndescription: d\ntools: [Read, Grep]\nmodel: opus\ncontext: isolated\nagent: security-reviewer\ntrigger: manual\nversion: 2.0.0\nargument-hint: \"[path]\"\n",
            "Body\n",
        );
        let skill = parse_template(&out.files[".claude/skills/audit/SKILL.md"]).unwrap();
        let meta = skill.metadata;
        assert_eq!(meta.tools, vec!["Read", "Grep"]);
        assert_eq!(meta.model.as_deref(), Some("opus"));
        assert!(meta.is_isolated());
        assert_eq!(meta.agent.as_deref(), Some("security-reviewer"));
        assert_eq!(meta.extra["disable-model-invocation"], Value::Bool(true));
        assert_eq!(meta.extra["argument-hint"], Value::String("[path]".to_string()));
        assert!(meta.extra.contains_key("metadata"));
        assert!(out.warnings.is_empty());
        // Agents are native, so there is no persona file
        assert_eq!(out.files.len(), 1);
    }

    #[test]
    fn test_permissions_enforced_without_security_warning() {
        let out = assemble(
            "name: p\ndescription: d\ntools: Read\npermissions:\n  allow: [\"Bash(git:*)\"]\n  deny: [\"Bash(rm:*)\"]\n",
            "Body\n",
        );
        assert!(!out.warnings.iter().any(|w| w.category == WarningCategory::Security));

        let skill = &out.files[".claude/skills/p/SKILL.md"];
        assert!(skill.contains("allowed-tools: Read, Bash(git:*)\n"));

        let settings: serde_json::Value =
            serde_json::from_str(&out.files[".claude/skills/p/settings.json"]).unwrap();
        assert_eq!(settings["permissions"]["deny"][0], "Bash(rm:*)");
    }

    #[test]
    fn test_hooks_use_claude_shape() {
        let out = assemble(
            "name: h\ndescription: d\nhooks:\n  PreToolUse:\n    - matcher: Bash\n      command: ./check.sh\n",
            "Body\n",
        );
        let skill = &out.files[".claude/skills/h/SKILL.md"];
        let (header, _) = crate::parser::split_frontmatter(skill).unwrap();
        let value: Value = serde_yaml::from_str(header).unwrap();
        let entry = &value["hooks"]["PreToolUse"][0];
        assert_eq!(entry["matcher"], Value::String("Bash".to_string()));
        assert_eq!(entry["hooks"][0]["type"], Value::String("command".to_string()));
        assert_eq!(
            entry["hooks"][0]["command"],
            Value::String("./check.sh".to_string())
        );
    }

    #[test]
    fn test_rule_fields_are_unsupported() {
        let out = assemble(
            "name: r\ndescription: d\ntrigger: glob\nglobs: \"src/**\"\nexcludeAgent: code-review\n",
            "Body\n",
        );
        let fields: Vec<_> = out
            .warnings
            .iter()
            .map(|w| (w.category, w.field.clone().unwrap()))
            .collect();
        assert_eq!(
            fields,
            vec![
                (WarningCategory::Unsupported, "trigger".to_string()),
                (WarningCategory::Unsupported, "globs".to_string()),
                (WarningCategory::Unsupported, "excludeAgent".to_string())
            ]
        );
    }

    #[test]
    fn test_passthrough_metadata_merges_with_generated_map() {
        let out = assemble(
            "name: m\ndescription: d\nversion: 1.0.0\nmetadata:\n  owner: team-a\n  version: 0.9\n",
            "Body\n",
        );
        let skill = &out.files[".claude/skills/m/SKILL.md"];
        let (header, _) = crate::parser::split_frontmatter(skill).unwrap();
        let value: Value = serde_yaml::from_str(header).unwrap();
        assert_eq!(value["metadata"]["version"], Value::String("1.0.0".to_string()));
        assert_eq!(value["metadata"]["owner"], Value::String("team-a".to_string()));

        let fields: Vec<_> = out
            .warnings
            .iter()
            .map(|w| (w.category, w.field.clone().unwrap()))
            .collect();
        assert_eq!(fields, vec![(WarningCategory::Validation, "metadata.version".to_string())]);
    }

    #[test]
    fn test_colliding_passthrough_key_is_reported() {
        let out = assemble(
            "name: k\ndescription: d\ntrigger: manual\ndisable-model-invocation: false\n",
            "Body\n",
        );
        assert!(out.files[".claude/skills/k/SKILL.md"].contains("disable-model-invocation: true\n"));
        assert_eq!(out.warnings.len(), 1);
        assert_eq!(out.warnings[0].field.as_deref(), Some("disable-model-invocation"));
    }

    #[test]
    fn test_compatibility_note_appended() {
        let out = assemble(
            "name: c\ndescription: d\ncompatibility:\n  claude: Requires a recent release.\n",
            "Body\n",
        );
        assert!(out.files[".claude/skills/c/SKILL.md"]
            .ends_with("Body\n\n> **Compatibility:** Requires a recent release.\n"));
    }
}
