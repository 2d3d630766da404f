//! Windsurf rules share Cursor's gaps and add a hard size ceiling.

use crate::detect::ConstructKind;
use crate::transform::Action;

pub(super) static TABLE: [(ConstructKind, Action); 18] = [
    (
        ConstructKind::PermissionReference,
        Action::Emulate("{text} _(advisory only: {platform} does not enforce permissions)_"),
    ),
    (
        ConstructKind::HookReference,
        Action::Unsupported("lifecycle hook _(not available in {platform})_"),
    ),
    (
        ConstructKind::AgentSpawn,
        Action::Emulate("{agent_phrase} _(emulated: {platform} has no sub-agents)_"),
    ),
    (
        ConstructKind::ToolInvocation,
        Action::Emulate("{tool_phrase} _(emulated)_"),
    ),
    (
        ConstructKind::ContextIsolation,
        Action::Emulate("{isolation_phrase} _(emulated: start a new Cascade conversation)_"),
    ),
    (
        ConstructKind::ContextGathering,
        Action::Limit("{text} _(a few files at a time, summarizing each batch before the next)_"),
    ),
    (ConstructKind::WorkspaceSearch, Action::Native),
    (ConstructKind::ActivationTrigger, Action::Native),
    (ConstructKind::CommandChaining, Action::Native),
    (ConstructKind::TestCommand, Action::Normalize("`{command}`")),
    (ConstructKind::Checkpoint, Action::Native),
    (ConstructKind::ExecutionFlow, Action::Native),
    (
        ConstructKind::SizeLimit,
        Action::Limit("{text} _({platform} rule files are capped at {limit} characters)_"),
    ),
    (ConstructKind::GlobUsage, Action::Native),
    (ConstructKind::ProgressChecklist, Action::Native),
    (
        ConstructKind::AdvisoryBlock,
        Action::Normalize("{indent}> **{level_title}:**"),
    ),
    (
        ConstructKind::VersionMarker,
        Action::Unsupported("_(version requirement omitted for {platform})_"),
    ),
    (ConstructKind::PersonaReference, Action::Native),
];
