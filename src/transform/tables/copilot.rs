//! GitHub Copilot: instruction files with the narrowest capability set.

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
        Action::Emulate("{isolation_phrase} _(emulated: start a new chat session)_"),
    ),
    (
        ConstructKind::ContextGathering,
        Action::Limit("{text} _(a few files at a time, summarizing each batch before the next)_"),
    ),
    (
        ConstructKind::WorkspaceSearch,
        Action::Normalize("{search_phrase} (#codebase)"),
    ),
    (
        ConstructKind::ActivationTrigger,
        Action::Emulate("{text} _(emulated: {platform} applies instructions through `applyTo` patterns)_"),
    ),
    (ConstructKind::CommandChaining, Action::Native),
    (ConstructKind::TestCommand, Action::Normalize("`{command}`")),
    (
        ConstructKind::Checkpoint,
        Action::Emulate("{text} _(emulated: commit from the Source Control view)_"),
    ),
    (
        ConstructKind::ExecutionFlow,
        Action::Emulate("{text} _(emulated: end the reply and wait for the next message)_"),
    ),
    (
        ConstructKind::SizeLimit,
        Action::Limit("{text} _({platform} instruction files should stay under {limit} characters)_"),
    ),
    (ConstructKind::GlobUsage, Action::Native),
    (ConstructKind::ProgressChecklist, Action::Native),
    (ConstructKind::AdvisoryBlock, Action::Native),
    (
        ConstructKind::VersionMarker,
        Action::Unsupported("_(version requirement omitted for {platform})_"),
    ),
    (ConstructKind::PersonaReference, Action::Native),
];
