//! Claude Code: the native vocabulary of most constructs.

use crate::detect::ConstructKind;
use crate::transform::Action;

pub(super) static TABLE: [(ConstructKind, Action); 18] = [
    (ConstructKind::PermissionReference, Action::Native),
    (ConstructKind::HookReference, Action::Native),
    (ConstructKind::AgentSpawn, Action::Native),
    (ConstructKind::ToolInvocation, Action::Native),
    (ConstructKind::ContextIsolation, Action::Native),
    (ConstructKind::ContextGathering, Action::Native),
    (
        ConstructKind::WorkspaceSearch,
        Action::Normalize("{search_phrase}"),
    ),
    (
        ConstructKind::ActivationTrigger,
        Action::Emulate("{text} _(emulated: {platform} loads skills when the request matches their description)_"),
    ),
    (ConstructKind::CommandChaining, Action::Native),
    (ConstructKind::TestCommand, Action::Native),
    (ConstructKind::Checkpoint, Action::Native),
    (ConstructKind::ExecutionFlow, Action::Native),
    (ConstructKind::SizeLimit, Action::Native),
    (ConstructKind::GlobUsage, Action::Native),
    (ConstructKind::ProgressChecklist, Action::Native),
    (ConstructKind::AdvisoryBlock, Action::Native),
    (ConstructKind::VersionMarker, Action::Native),
    (ConstructKind::PersonaReference, Action::Native),
];
