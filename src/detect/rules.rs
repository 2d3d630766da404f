//! Detection rule table.
//!
//! One rule per construct kind, each with a fixed priority and one or more
//! patterns. The table is compiled once and never mutated; every detection
//! call reads it to build a fresh candidate list.

use regex::Regex;
use std::sync::LazyLock;

use super::kinds::ConstructKind;

/// Matching rule for one construct kind
#[derive(Debug)]
pub struct DetectionRule {
    pub kind: ConstructKind,
    /// Higher wins when candidate spans overlap
    pub priority: u8,
    pub patterns: Vec<Regex>,
}

const TOOL_NAMES: &str = "Glob|Grep|Read|Write|Edit|MultiEdit|Bash|WebFetch|WebSearch|TodoWrite|Task|NotebookEdit|LS|AskUserQuestion|Skill|SlashCommand";

fn rule(kind: ConstructKind, priority: u8, patterns: &[&str]) -> DetectionRule {
    DetectionRule {
        kind,
        priority,
        patterns: patterns
            .iter()
            .map(|p| Regex::new(p).expect("detection pattern must compile"))
            .collect(),
    }
}

static RULES: LazyLock<Vec<DetectionRule>> = LazyLock::new(|| {
    vec![
        rule(
            ConstructKind::PermissionReference,
            100,
            &[
                r"\b(?P<tool>Bash|Read|Write|Edit|MultiEdit|WebFetch|WebSearch|Glob|Grep|NotebookEdit)\((?P<rule>[^)\n]*)\)",
                r"(?i)\b(?:dis)?allowed[- ]tools\b",
                r"(?i)\b(?:allow|deny)[- ]?list\b",
                r"(?i)\bpermissions?\s+(?:rules?|settings|mode)\b",
                r"(?i)\b(?:requires?|needs?|granted?|ask(?:s|ing)?\s+for)\s+permissions?\b",
                r"(?i)\b(?:bypass(?:ing)?\s+permissions?|dangerously[- ]skip[- ]permissions)\b",
            ],
        ),
        rule(
            ConstructKind::HookReference,
            95,
            &[
                r"\b(?P<event>PreToolUse|PostToolUse|UserPromptSubmit|SessionStart|SessionEnd|SubagentStop|PreCompact|Notification|Stop)\s+hooks?\b",
                r"(?i)\blifecycle\s+hooks?\b",
            ],
        ),
        rule(
            ConstructKind::AgentSpawn,
            90,
            &[
                r"@agent-(?P<agent>[A-Za-z0-9][A-Za-z0-9_-]*)",
                r"(?i)\b(?P<verb>spawn|launch|start|dispatch|delegate\s+to|hand\s+off\s+to|use)\s+(?:an?\s+|the\s+)?(?:(?P<agent>[a-z0-9]+(?:-[a-z0-9]+)*)\s+)?sub-?agents?\b",
            ],
        ),
        rule(
            ConstructKind::ToolInvocation,
            85,
            &[
                &format!(
                    r"(?:\b(?P<verb>(?i:use|call|invoke|run))\s+)?(?:\b(?i:the)\s+)?\b(?P<tool>{TOOL_NAMES})\s+tool\b"
                ),
                r"\b(?P<tool>TodoWrite|WebFetch|WebSearch|MultiEdit|NotebookEdit|AskUserQuestion)\b",
            ],
        ),
        rule(
            ConstructKind::ContextIsolation,
            80,
            &[
                r"(?i)\b(?P<prep>in\s+)?(?:an?\s+)?(?:isolated|forked|separate|fresh|clean)\s+context(?:\s+window)?\b",
                r"(?i)\bcontext:\s*fork\b",
            ],
        ),
        rule(
            ConstructKind::ContextGathering,
            75,
            &[
                r"(?i)\b(?:read|load|gather|collect|review|scan|open|ingest)\s+(?:all|every|each)\s+(?:of\s+the\s+)?(?:(?:relevant|related|source|project|changed|modified|test|configuration|config)\s+)?(?:files?|modules?|documents?|sources?|docs)\b",
                r"(?i)\b(?:the\s+)?(?:entire|whole)\s+(?:codebase|repository|repo|project)\s+into\s+(?:the\s+)?context\b",
            ],
        ),
        rule(
            ConstructKind::WorkspaceSearch,
            70,
            &[
                r"(?i)\b(?:search|grep|scan|look)\s+(?:through\s+|across\s+|in\s+)?(?:the\s+)?(?:entire\s+|whole\s+)?(?:codebase|workspace|repository|repo)\b",
                r"[@#](?P<scope>codebase|workspace)\b",
            ],
        ),
        rule(
            ConstructKind::ActivationTrigger,
            65,
            &[
                r"(?i)\b(?:always\s+apply|apply\s+always|always[- ]on|auto-?attach(?:ed|es)?)\b",
                r"(?i)\b(?:activate[sd]?|trigger(?:s|ed)?|invoke[sd]?)\s+(?:automatically\s+)?(?:whenever|when|on|if)\b",
            ],
        ),
        rule(
            ConstructKind::CommandChaining,
            60,
            &[
                r"\b(?P<command>(?:npm|npx|pnpm|yarn|cargo|go|make|git|python3?|pip|pytest|bun|deno|docker|kubectl|mvn|gradle|cd|mkdir|rm)\b[^\n`&|]*?(?:&&|\|\|)[^\n`.,;]*[^\n`.,;\s])",
            ],
        ),
        rule(
            ConstructKind::TestCommand,
            55,
            &[
                r"\b(?P<command>(?:cargo|npm|pnpm|yarn|bun|deno|mvn|gradle|make|dotnet)\s+(?:run\s+)?test|pytest|jest|vitest)\b",
                // `go test` reads as prose unless a package path or flag follows
                r"\b(?P<command>go\s+test(?:[ \t]+(?:\./[\w./-]*|-[\w=.-]+))+)",
            ],
        ),
        rule(
            ConstructKind::Checkpoint,
            50,
            &[
                r"(?i)\b(?:commit\s+(?:your\s+|the\s+|all\s+)?(?:changes|work|progress)|create\s+an?\s+(?:git\s+)?checkpoint|checkpoint\s+(?:your\s+)?(?:progress|work)|git\s+commit)\b",
            ],
        ),
        rule(
            ConstructKind::ExecutionFlow,
            45,
            &[
                r"(?i)\b(?:wait\s+for\s+(?:the\s+)?(?:user(?:'s)?\s+)?(?:confirmation|approval|input|response)|ask\s+the\s+user(?:\s+to\s+confirm)?|stop\s+and\s+wait|do\s+not\s+proceed\s+until)\b",
                r"(?i)\b(?:then\s+)?proceed\s+to\s+(?:the\s+next\s+)?(?:step|phase)(?:\s+\d+)?\b",
            ],
        ),
        rule(
            ConstructKind::SizeLimit,
            40,
            &[
                r"(?i)\b(?P<amount>\d[\d,]*(?:\.\d+)?)[ \t]*(?P<scale>[km])?[ \t]*(?P<unit>tokens?|characters?|chars|lines|bytes)\b",
                r"(?i)\b(?:context\s+(?:window|limit|budget)|token\s+(?:limit|budget|count))\b",
            ],
        ),
        rule(
            ConstructKind::GlobUsage,
            35,
            &[
                r"(?P<pattern>\*\*/[\w*.{},/-]+|(?:[\w.-]+/)+\*\*?[\w*.{},/-]*|\*\.(?:\{[\w,]+\}|[A-Za-z0-9]+\b))",
            ],
        ),
        rule(
            ConstructKind::ProgressChecklist,
            30,
            &[
                r"(?i)\b(?:todo\s+list|task\s+list|progress\s+checklist|checklist\s+of\s+(?:tasks|steps))\b",
                r"(?m)^[ \t]*[-*+][ \t]+\[(?P<state>[ xX])\]",
            ],
        ),
        rule(
            ConstructKind::AdvisoryBlock,
            25,
            &[r"(?m)^(?P<indent>[ \t]*)>[ \t]*\[!(?P<level>(?i:note|tip|important|warning|caution))\]"],
        ),
        rule(
            ConstructKind::VersionMarker,
            20,
            &[
                r"(?i)\b(?:requires\s+)?(?:(?:claude\s+code|cursor|windsurf|copilot)\s+)?v(?P<version>\d+\.\d+(?:\.\d+)?)\b\+?",
                r"(?i)\b(?:since|as\s+of)\s+version\s+(?P<version>\d+(?:\.\d+)+)\b",
            ],
        ),
        rule(
            ConstructKind::PersonaReference,
            15,
            &[
                r"(?i)\b(?:act|acting|behave|respond)\s+as\s+(?:an?|the)\s+(?P<persona>[a-z][\w-]*(?:[ \t]+[a-z][\w-]*)?)",
                r"(?i)\byou\s+are\s+(?:an?|the)\s+(?P<persona>[a-z][\w-]*(?:[ \t]+[a-z][\w-]*)?)",
            ],
        ),
    ]
});

/// The ordered rule table; earlier patterns win exact ties
pub fn rules() -> &'static [DetectionRule] {
    &RULES
}

/// Priority of a construct kind (its highest-ranked rule)
pub fn priority_of(kind: ConstructKind) -> u8 {
    rules()
        .iter()
        .filter(|r| r.kind == kind)
        .map(|r| r.priority)
        .max()
        .unwrap_or(0)
}
