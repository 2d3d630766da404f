//! Shared assembly state for one (template, platform) pair.
//!
//! Adapters decide which header fields are native. Everything a platform
//! cannot express goes through the helpers here, so the advisory text and
//! the warnings stay consistent across platforms.

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{Metadata, Platform, Warning};
use crate::transform::render::group_thousands;
use crate::transform::tool_phrase;
use crate::validation::output_name;

use super::emit::Frontmatter;
use super::split::split_body;
use super::{persona_name, Assembled};

pub(super) struct Draft<'a> {
    pub platform: Platform,
    pub metadata: &'a Metadata,
    /// Slug used for every output path
    pub name: String,
    preamble: Vec<String>,
    sections: Vec<String>,
    pub files: BTreeMap<String, String>,
    pub warnings: Vec<Warning>,
}

impl<'a> Draft<'a> {
    pub fn new(platform: Platform, metadata: &'a Metadata) -> Self {
        Self {
            platform,
            metadata,
            name: output_name(metadata),
            preamble: Vec::new(),
            sections: Vec::new(),
            files: BTreeMap::new(),
            warnings: Vec::new(),
        }
    }

    fn platform_name(&self) -> &'static str {
        self.platform.display_name()
    }

    pub fn warn(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    /// Record a header field the platform has no place for
    pub fn unsupported(&mut self, field: &str, details: Option<String>) {
        let mut warning = Warning::unsupported(format!(
            "{} has no equivalent; field dropped",
            self.platform_name()
        ))
        .with_field(field);
        if let Some(details) = details {
            warning = warning.with_details(details);
        }
        self.warn(warning);
    }

    /// Drop each listed field that the template actually sets
    pub fn drop_fields(&mut self, fields: &[&str]) {
        for field in fields {
            if let Some(value) = field_value(self.metadata, field) {
                self.unsupported(field, Some(value));
            }
        }
    }

    /// Drop every passthrough key
    pub fn drop_extra(&mut self) {
        let keys: Vec<String> = self.metadata.extra.keys().cloned().collect();
        for key in keys {
            self.unsupported(&key, None);
        }
    }

    /// Text placed before the body, in call order
    pub fn preface(&mut self, text: String) {
        self.preamble.push(text);
    }

    /// Emit the persona file for `agent` and reference it from the main file
    ///
    /// `path_for` maps the persona name to its output path.
    pub fn persona(&mut self, path_for: impl Fn(&str) -> String, header: &Frontmatter) {
        let Some(agent) = self.metadata.agent.clone() else {
            return;
        };

        let persona = persona_name(&agent);
        let path = path_for(&persona);
        self.files
            .insert(path.clone(), header.document(&persona_body(&agent, &persona, self.platform)));

        self.preface(format!(
            "> **Persona:** follow `{persona}` (`{path}`) while running this workflow."
        ));
        self.warn(
            Warning::emulated(format!(
                "Sub-agents are emulated with a persona file on {}",
                self.platform_name()
            ))
            .with_field("agent")
            .with_details(path),
        );
    }

    /// Ask for a fresh conversation when the template wants an isolated context
    pub fn isolated_context(&mut self) {
        if !self.metadata.is_isolated() {
            return;
        }
        self.preface(
            "> **Context:** start this workflow in a fresh conversation so earlier context does not carry over."
                .to_string(),
        );
        self.warn(
            Warning::emulated(format!(
                "{} cannot fork context; the workflow asks for a new conversation instead",
                self.platform_name()
            ))
            .with_field("context"),
        );
    }

    /// Describe expected tools in prose
    pub fn advisory_tools(&mut self, tools: &[String]) {
        if tools.is_empty() {
            return;
        }

        let mut section = String::from("## Tools\n\nThis workflow expects these capabilities:\n\n");
        for tool in tools {
            let base = tool.split('(').next().unwrap_or(tool).trim();
            section.push_str(&format!("- `{tool}`: {}\n", tool_phrase(base).imperative));
        }
        self.sections.push(section);

        self.warn(
            Warning::emulated(format!(
                "{} cannot restrict tool access; tools are listed as guidance",
                self.platform_name()
            ))
            .with_field("tools")
            .with_details(tools.join(", ")),
        );
    }

    /// Downgrade permission rules to advisory text
    pub fn advisory_permissions(&mut self) {
        let Some(permissions) = self.metadata.permissions().cloned() else {
            return;
        };
        let platform = self.platform_name();

        let mut section = format!(
            "## Permissions (advisory)\n\n{platform} does not enforce these rules. Treat them as instructions.\n"
        );
        if !permissions.allow.is_empty() {
            section.push_str("\nAllowed without asking:\n\n");
            for rule in &permissions.allow {
                section.push_str(&format!("- `{rule}`\n"));
            }
        }
        if !permissions.deny.is_empty() {
            section.push_str("\nNever allowed:\n\n");
            for rule in &permissions.deny {
                section.push_str(&format!("- `{rule}`\n"));
            }
        }
        self.sections.push(section);

        if !permissions.allow.is_empty() {
            self.warn(
                Warning::security(format!("Allowed tool rules are advisory only on {platform}"))
                    .with_field("permissions.allow")
                    .with_details(rule_count(permissions.allow.len())),
            );
        }
        if !permissions.deny.is_empty() {
            self.warn(
                Warning::security(format!(
                    "Denied tool rules are not enforced on {platform}; nothing prevents these actions"
                ))
                .with_field("permissions.deny")
                .with_details(rule_count(permissions.deny.len())),
            );
        }
    }

    pub fn hooks_unsupported(&mut self) {
        if self.metadata.hooks.is_empty() {
            return;
        }
        let events: Vec<&str> = self.metadata.hooks.keys().map(String::as_str).collect();
        let details = events.join(", ");
        self.unsupported("hooks", Some(details));
    }

    /// Preamble, body, advisory sections and the compatibility note
    pub fn compose(&self, body: &str) -> String {
        let mut out = String::with_capacity(body.len() + 256);

        if !self.preamble.is_empty() {
            out.push_str(&self.preamble.join("\n\n"));
            out.push('\n');
            if !body.starts_with('\n') {
                out.push('\n');
            }
        }
        out.push_str(body);

        let note = self
            .metadata
            .compatibility_note(self.platform)
            .map(|note| format!("> **Compatibility:** {note}\n"));

        for section in self.sections.iter().chain(note.iter()) {
            if !out.is_empty() {
                if !out.ends_with('\n') {
                    out.push('\n');
                }
                if !out.ends_with("\n\n") {
                    out.push('\n');
                }
            }
            out.push_str(section);
        }
        out
    }

    /// Write the main document as `<dir>/<name><suffix>` under the size ceiling
    ///
    /// Platforms that split oversized output get continuation files
    /// `<name>-part-N<suffix>` repeating `header`. Output stays whole when the
    /// platform cannot split or the header alone fills the ceiling.
    pub fn place(&mut self, dir: &str, suffix: &str, header: &Frontmatter, body: &str) {
        let main = format!("{dir}/{}{suffix}", self.name);
        let document = header.document(body);
        let length = document.chars().count();

        let ceiling = match self.platform.size_ceiling() {
            Some(ceiling) if length > ceiling => ceiling,
            _ => {
                self.files.insert(main, document);
                return;
            }
        };
        let limit = Warning::limit(format!(
            "Output exceeds the {} limit of {} characters",
            self.platform_name(),
            group_thousands(ceiling)
        ))
        .with_field("content");

        let overhead = header.document("").chars().count();
        if !self.platform.splits_oversized() || overhead >= ceiling {
            let reason = if self.platform.splits_oversized() {
                "the header alone reaches the limit, so the body was not split"
            } else {
                "this platform cannot split files"
            };
            self.files.insert(main, document);
            self.warn(limit.with_details(format!("{length} characters; {reason}")));
            return;
        }

        let parts = split_body(body, ceiling - overhead);
        debug!(platform = %self.platform, parts = parts.len(), length, "Splitting oversized output");
        for (index, part) in parts.iter().enumerate() {
            let path = if index == 0 {
                main.clone()
            } else {
                format!("{dir}/{}-part-{}{suffix}", self.name, index + 1)
            };
            self.files.insert(path, header.document(part));
        }
        self.warn(limit.with_details(format!(
            "{length} characters split into {} files",
            parts.len()
        )));
    }

    pub fn finish(self) -> Assembled {
        Assembled {
            files: self.files,
            warnings: self.warnings,
        }
    }
}

fn rule_count(n: usize) -> String {
    if n == 1 {
        "1 rule".to_string()
    } else {
        format!("{n} rules")
    }
}

/// Rendered value of a header field, when set
fn field_value(metadata: &Metadata, field: &str) -> Option<String> {
    let list = |items: &[String]| (!items.is_empty()).then(|| items.join(", "));
    match field {
        "model" => metadata.model.clone(),
        "version" => metadata.version.clone(),
        "author" => metadata.author.clone(),
        "labels" => list(&metadata.labels),
        "globs" => list(&metadata.globs),
        "applyTo" => list(&metadata.apply_to),
        "alwaysApply" => metadata.always_apply.filter(|v| *v).map(|v| v.to_string()),
        "trigger" => metadata.trigger.map(|t| t.to_string()),
        "mode" => metadata.mode.map(|m| m.to_string()),
        "excludeAgent" => {
            let agents: Vec<String> = metadata.exclude_agent.iter().map(|a| a.to_string()).collect();
            list(&agents)
        }
        _ => None,
    }
}

fn persona_body(agent: &str, persona: &str, platform: Platform) -> String {
    let title: Vec<String> = agent
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();

    format!(
        "\n# {} persona\n\n\
         Adopt this persona whenever a workflow refers to `{persona}`.\n\n\
         Act as the `{agent}` agent. Stay within its specialty and report findings back before the workflow continues.\n\n\
         > This file stands in for a sub-agent, which {} does not support.\n",
        title.join(" "),
        platform.display_name()
    )
}
