use serde::Serialize;
use std::fmt;

/// Semantic constructs recognized in template bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstructKind {
    ToolInvocation,
    AgentSpawn,
    ContextIsolation,
    PermissionReference,
    ActivationTrigger,
    GlobUsage,
    ContextGathering,
    WorkspaceSearch,
    CommandChaining,
    SizeLimit,
    Checkpoint,
    ProgressChecklist,
    AdvisoryBlock,
    VersionMarker,
    PersonaReference,
    TestCommand,
    ExecutionFlow,
    HookReference,
}

impl ConstructKind {
    pub const ALL: [ConstructKind; 18] = [
        ConstructKind::ToolInvocation,
        ConstructKind::AgentSpawn,
        ConstructKind::ContextIsolation,
        ConstructKind::PermissionReference,
        ConstructKind::ActivationTrigger,
        ConstructKind::GlobUsage,
        ConstructKind::ContextGathering,
        ConstructKind::WorkspaceSearch,
        ConstructKind::CommandChaining,
        ConstructKind::SizeLimit,
        ConstructKind::Checkpoint,
        ConstructKind::ProgressChecklist,
        ConstructKind::AdvisoryBlock,
        ConstructKind::VersionMarker,
        ConstructKind::PersonaReference,
        ConstructKind::TestCommand,
        ConstructKind::ExecutionFlow,
        ConstructKind::HookReference,
    ];

    /// Stable kebab-case identifier, used as the warning `field`
    pub fn id(&self) -> &'static str {
        match self {
            ConstructKind::ToolInvocation => "tool-invocation",
            ConstructKind::AgentSpawn => "agent-spawn",
            ConstructKind::ContextIsolation => "context-isolation",
            ConstructKind::PermissionReference => "permission-reference",
            ConstructKind::ActivationTrigger => "activation-trigger",
            ConstructKind::GlobUsage => "glob-usage",
            ConstructKind::ContextGathering => "context-gathering",
            ConstructKind::WorkspaceSearch => "workspace-search",
            ConstructKind::CommandChaining => "command-chaining",
            ConstructKind::SizeLimit => "size-limit",
            ConstructKind::Checkpoint => "checkpoint",
            ConstructKind::ProgressChecklist => "progress-checklist",
            ConstructKind::AdvisoryBlock => "advisory-block",
            ConstructKind::VersionMarker => "version-marker",
            ConstructKind::PersonaReference => "persona-reference",
            ConstructKind::TestCommand => "test-command",
            ConstructKind::ExecutionFlow => "execution-flow",
            ConstructKind::HookReference => "hook-reference",
        }
    }

    /// Sentence-case label for human-facing messages
    pub fn label(&self) -> &'static str {
        match self {
            ConstructKind::ToolInvocation => "Tool invocation",
            ConstructKind::AgentSpawn => "Sub-agent spawning",
            ConstructKind::ContextIsolation => "Context isolation",
            ConstructKind::PermissionReference => "Permission reference",
            ConstructKind::ActivationTrigger => "Activation trigger",
            ConstructKind::GlobUsage => "Glob pattern",
            ConstructKind::ContextGathering => "Multi-file context gathering",
            ConstructKind::WorkspaceSearch => "Workspace search",
            ConstructKind::CommandChaining => "Command chaining",
            ConstructKind::SizeLimit => "Size limit",
            ConstructKind::Checkpoint => "Checkpoint directive",
            ConstructKind::ProgressChecklist => "Progress checklist",
            ConstructKind::AdvisoryBlock => "Advisory block",
            ConstructKind::VersionMarker => "Version marker",
            ConstructKind::PersonaReference => "Persona reference",
            ConstructKind::TestCommand => "Test command",
            ConstructKind::ExecutionFlow => "Execution flow marker",
            ConstructKind::HookReference => "Lifecycle hook",
        }
    }

    /// Whether downgrading this construct weakens a trust boundary
    pub fn is_security_sensitive(&self) -> bool {
        matches!(self, ConstructKind::PermissionReference)
    }
}

impl fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
