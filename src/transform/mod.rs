//! Per-platform rewriting of detected constructs.
//!
//! Every platform answers one question per construct kind: which `Action`
//! applies. The shared walk in [`transform_content`] copies text between
//! matches verbatim, renders the replacement for each match and folds the
//! resulting warnings into one entry per kind.

pub mod render;
pub mod tables;
mod vocabulary;


use std::collections::BTreeMap;
use tracing::debug;

use crate::detect::{ConstructKind, ConstructMatch};
use crate::models::{Platform, Warning, WarningCategory};

pub use tables::{table_for, RewriteTable};
pub use vocabulary::{copilot_tool, tool_phrase};

use render::{group_thousands, match_leading_case, render};

/// What a platform does with one construct kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Supported as written; the span is copied unchanged
    Native,
    /// Supported under different syntax; rewritten without a warning
    Normalize(&'static str),
    /// Approximated with instructions; EMULATED (SECURITY for permissions)
    Emulate(&'static str),
    /// No equivalent; replaced with a neutral note, UNSUPPORTED
    Unsupported(&'static str),
    /// Annotated with size guidance, LIMIT
    Limit(&'static str),
}

impl Action {
    pub fn template(&self) -> Option<&'static str> {
        match self {
            Action::Native => None,
            Action::Normalize(t) | Action::Emulate(t) | Action::Unsupported(t) | Action::Limit(t) => {
                Some(t)
            }
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Action::Native)
    }

    /// Warning category recorded when this action rewrites `kind`
    pub fn category(&self, kind: ConstructKind) -> Option<WarningCategory> {
        match self {
            Action::Native | Action::Normalize(_) => None,
            Action::Emulate(_) if kind.is_security_sensitive() => Some(WarningCategory::Security),
            Action::Emulate(_) => Some(WarningCategory::Emulated),
            Action::Unsupported(_) => Some(WarningCategory::Unsupported),
            Action::Limit(_) => Some(WarningCategory::Limit),
        }
    }

    /// Short lowercase label for capability listings
    pub fn label(&self) -> &'static str {
        match self {
            Action::Native => "native",
            Action::Normalize(_) => "normalized",
            Action::Emulate(_) => "emulated",
            Action::Unsupported(_) => "unsupported",
            Action::Limit(_) => "limit",
        }
    }
}

/// Replacement for one matched span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    pub text: String,
    pub category: Option<WarningCategory>,
}

/// A platform's rewriting capability
pub trait Rewrite {
    fn platform(&self) -> Platform;

    fn action(&self, kind: ConstructKind) -> Action;

    /// Rewrite one match found in `original`
    fn rewrite(&self, m: &ConstructMatch, original: &str) -> Rewritten {
        let action = self.action(m.kind);
        let text = match action.template() {
            Some(template) => render(template, &placeholder_params(m, original, self.platform())),
            None => m.text(original).to_string(),
        };
        Rewritten {
            text,
            category: action.category(m.kind),
        }
    }
}

/// A [`Rewrite`] backed by a static rewrite table
#[derive(Debug, Clone, Copy)]
pub struct TableRewriter {
    platform: Platform,
    table: RewriteTable,
}

impl TableRewriter {
    pub fn new(platform: Platform, table: RewriteTable) -> Self {
        Self { platform, table }
    }
}

impl Rewrite for TableRewriter {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn action(&self, kind: ConstructKind) -> Action {
        tables::lookup(self.table, kind)
    }
}

/// The built-in rewriter for `platform`
pub fn rewriter_for(platform: Platform) -> TableRewriter {
    TableRewriter::new(platform, table_for(platform))
}

/// Rewritten body plus one warning per affected construct kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedContent {
    pub content: String,
    pub warnings: Vec<Warning>,
}

/// Apply `rewriter` to every match in `content`
///
/// `matches` must be sorted and non-overlapping, as produced by
/// `detect_constructs`. Text outside the matches is copied byte for byte.
pub fn transform_content(
    rewriter: &dyn Rewrite,
    content: &str,
    matches: &[ConstructMatch],
) -> TransformedContent {
    let mut out = String::with_capacity(content.len());
    let mut cursor = 0;
    let mut tally: Vec<(ConstructKind, WarningCategory, usize)> = Vec::new();

    for m in matches {
        if m.start < cursor || m.end > content.len() {
            debug!(kind = %m.kind, start = m.start, "Skipping out-of-order match");
            continue;
        }

        out.push_str(&content[cursor..m.start]);
        let rewritten = rewriter.rewrite(m, content);
        out.push_str(&rewritten.text);
        cursor = m.end;

        if let Some(category) = rewritten.category {
            match tally.iter_mut().find(|(kind, _, _)| *kind == m.kind) {
                Some((_, _, count)) => *count += 1,
                None => tally.push((m.kind, category, 1)),
            }
        }
    }
    out.push_str(&content[cursor..]);

    let platform = rewriter.platform();
    let warnings = tally
        .into_iter()
        .map(|(kind, category, count)| construct_warning(kind, category, platform, count))
        .collect();

    TransformedContent {
        content: out,
        warnings,
    }
}

fn construct_warning(
    kind: ConstructKind,
    category: WarningCategory,
    platform: Platform,
    count: usize,
) -> Warning {
    let label = kind.label();
    let name = platform.display_name();
    let message = match category {
        WarningCategory::Security => {
            format!("{label} is advisory only on {name}; it is not enforced")
        }
        WarningCategory::Unsupported => {
            format!("{label} is not supported on {name}; replaced with a note")
        }
        WarningCategory::Limit => format!("{label} annotated with size guidance for {name}"),
        WarningCategory::Emulated | WarningCategory::Validation => {
            format!("{label} is emulated with instructions on {name}")
        }
    };

    let details = if count == 1 {
        "1 occurrence".to_string()
    } else {
        format!("{count} occurrences")
    };

    Warning::new(category, message)
        .with_field(kind.id())
        .with_details(details)
}

/// Placeholder values available to a match's replacement template
pub fn placeholder_params(
    m: &ConstructMatch,
    original: &str,
    platform: Platform,
) -> BTreeMap<String, String> {
    let text = m.text(original);
    let mut params = m.params.clone();

    params.insert("text".to_string(), text.to_string());
    params.insert("platform".to_string(), platform.display_name().to_string());
    if let Some(ceiling) = platform.size_ceiling() {
        params.insert("limit".to_string(), group_thousands(ceiling));
    }

    let derived = match m.kind {
        ConstructKind::ToolInvocation => m.param("tool").map(|tool| {
            let phrase = vocabulary::tool_phrase(tool);
            let chosen = if m.param("verb").is_some() {
                phrase.imperative
            } else {
                phrase.noun
            };
            ("tool_phrase", chosen.to_string())
        }),
        ConstructKind::AgentSpawn => {
            let phrase = match (m.param("verb"), m.param("agent")) {
                (Some(_), Some(agent)) => {
                    format!("take on the {agent} persona and handle the task directly")
                }
                (Some(_), None) => "handle the delegated task directly, one step at a time".to_string(),
                (None, Some(agent)) => format!("the {agent} persona"),
                (None, None) => "a focused persona".to_string(),
            };
            Some(("agent_phrase", phrase))
        }
        ConstructKind::ContextIsolation => {
            let phrase = if m.param("prep").is_some() {
                "in a fresh conversation"
            } else {
                "a fresh conversation"
            };
            Some(("isolation_phrase", phrase.to_string()))
        }
        ConstructKind::WorkspaceSearch => {
            let phrase = match m.param("scope") {
                Some(scope) => format!("the {}", scope.to_lowercase()),
                None => text.to_string(),
            };
            Some(("search_phrase", phrase))
        }
        ConstructKind::AdvisoryBlock => m
            .param("level")
            .map(|level| ("level_title", match_leading_case(&level.to_lowercase(), level))),
        _ => None,
    };

    if let Some((name, phrase)) = derived {
        params.insert(name.to_string(), match_leading_case(&phrase, text));
    }
    params
}
