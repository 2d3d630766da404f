//! Typed template header.
//!
//! `Metadata` is a closed record of every header key the converter
//! understands. Anything else lands in `extra` verbatim so no header content
//! is lost between parsing and emission.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fmt;

use super::platform::Platform;
use super::serialization::{filtered_list, optional_scalar, string_list};

/// Whether the workflow runs in its own context window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextMode {
    /// Run in a fresh, forked context
    #[serde(alias = "fork", alias = "forked")]
    Isolated,
    /// Share the caller's context
    Inherited,
}

/// How a rule-style platform decides to load the workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationTrigger {
    #[serde(alias = "always")]
    AlwaysOn,
    Manual,
    ModelDecision,
    Glob,
}

impl fmt::Display for ActivationTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationTrigger::AlwaysOn => write!(f, "always_on"),
            ActivationTrigger::Manual => write!(f, "manual"),
            ActivationTrigger::ModelDecision => write!(f, "model_decision"),
            ActivationTrigger::Glob => write!(f, "glob"),
        }
    }
}

/// Interaction mode for prompt-style platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    Agent,
    Ask,
    Edit,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::Agent => write!(f, "agent"),
            ExecutionMode::Ask => write!(f, "ask"),
            ExecutionMode::Edit => write!(f, "edit"),
        }
    }
}

/// Agents that can be told to ignore an instruction file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExcludedAgent {
    CodeReview,
    CodingAgent,
}

impl fmt::Display for ExcludedAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExcludedAgent::CodeReview => write!(f, "code-review"),
            ExcludedAgent::CodingAgent => write!(f, "coding-agent"),
        }
    }
}

impl std::str::FromStr for ExcludedAgent {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "code-review" => Ok(ExcludedAgent::CodeReview),
            "coding-agent" => Ok(ExcludedAgent::CodingAgent),
            _ => anyhow::bail!("Invalid excluded agent: {s}. Use: code-review, coding-agent"),
        }
    }
}

/// Tool permission rules
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(default, deserialize_with = "string_list", skip_serializing_if = "Vec::is_empty")]
    pub allow: Vec<String>,
    #[serde(default, deserialize_with = "string_list", skip_serializing_if = "Vec::is_empty")]
    pub deny: Vec<String>,
}

impl Permissions {
    pub fn is_empty(&self) -> bool {
        self.allow.is_empty() && self.deny.is_empty()
    }
}

/// A command bound to a lifecycle event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookBinding {
    /// Tool-name matcher; absent means every tool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matcher: Option<String>,
    pub command: String,
}

/// Parsed template header
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, deserialize_with = "optional_scalar", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Tools the workflow expects to use
    #[serde(
        default,
        alias = "allowed-tools",
        alias = "allowed_tools",
        deserialize_with = "string_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tools: Vec<String>,
    #[serde(default, deserialize_with = "optional_scalar", skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ContextMode>,
    /// Agent (persona) the workflow delegates to
    #[serde(default, deserialize_with = "optional_scalar", skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Permissions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<ActivationTrigger>,
    #[serde(default, deserialize_with = "string_list", skip_serializing_if = "Vec::is_empty")]
    pub globs: Vec<String>,
    #[serde(
        default,
        alias = "tags",
        deserialize_with = "string_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub labels: Vec<String>,
    #[serde(
        default,
        rename = "alwaysApply",
        alias = "always_apply",
        skip_serializing_if = "Option::is_none"
    )]
    pub always_apply: Option<bool>,
    #[serde(default, deserialize_with = "optional_scalar", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Path patterns the workflow applies to
    #[serde(
        default,
        rename = "applyTo",
        alias = "apply_to",
        deserialize_with = "string_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub apply_to: Vec<String>,
    #[serde(
        default,
        rename = "excludeAgent",
        alias = "exclude_agent",
        deserialize_with = "filtered_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub exclude_agent: Vec<ExcludedAgent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ExecutionMode>,
    /// Platforms the author declares support for; empty means all
    #[serde(default, deserialize_with = "filtered_list", skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<Platform>,
    /// Free-text notes keyed by platform id
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub compatibility: BTreeMap<String, String>,
    /// Lifecycle event name to bound commands
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub hooks: BTreeMap<String, Vec<HookBinding>>,
    /// Unrecognized header keys, preserved verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Metadata {
    /// Permission rules, if any were declared
    pub fn permissions(&self) -> Option<&Permissions> {
        self.permissions.as_ref().filter(|p| !p.is_empty())
    }

    /// `globs` followed by `applyTo`, without duplicates
    pub fn path_patterns(&self) -> Vec<String> {
        let mut patterns: Vec<String> = Vec::new();
        for pattern in self.globs.iter().chain(self.apply_to.iter()) {
            if !patterns.contains(pattern) {
                patterns.push(pattern.clone());
            }
        }
        patterns
    }

    pub fn is_isolated(&self) -> bool {
        self.context == Some(ContextMode::Isolated)
    }

    /// Whether the author restricted the template to platforms excluding `platform`
    pub fn excludes_platform(&self, platform: Platform) -> bool {
        !self.platforms.is_empty() && !self.platforms.contains(&platform)
    }

    /// Compatibility note for a platform, matched on its id
    pub fn compatibility_note(&self, platform: Platform) -> Option<&str> {
        self.compatibility
            .iter()
            .find(|(key, _)| key.parse::<Platform>().ok() == Some(platform))
            .map(|(_, note)| note.as_str())
    }

    /// Serialize the header back to YAML
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
