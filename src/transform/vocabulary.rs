//! Plain-language descriptions of assistant tools.

/// How to phrase a tool when the host has no tool of that name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolPhrase {
    /// Instruction form, used after a verb ("Use the Glob tool")
    pub imperative: &'static str,
    /// Noun form, used when the tool is only named
    pub noun: &'static str,
}

const fn phrase(imperative: &'static str, noun: &'static str) -> ToolPhrase {
    ToolPhrase { imperative, noun }
}

const TOOL_PHRASES: &[(&str, ToolPhrase)] = &[
    ("Glob", phrase("find files whose paths match a name pattern", "a file-name search")),
    ("Grep", phrase("search file contents for the pattern", "a content search")),
    ("Read", phrase("open and read the file", "reading the file")),
    ("Write", phrase("create or overwrite the file", "writing the file")),
    ("Edit", phrase("edit the file in place", "an in-place edit")),
    ("MultiEdit", phrase("apply the edits to the file together", "a batch of edits")),
    ("Bash", phrase("run the shell command in the terminal", "a terminal command")),
    ("WebFetch", phrase("fetch the web page", "a web page fetch")),
    ("WebSearch", phrase("search the web", "a web search")),
    ("TodoWrite", phrase("update the task checklist", "a task checklist")),
    ("Task", phrase("work through the sub-task separately", "a separate sub-task")),
    ("NotebookEdit", phrase("edit the notebook cell", "a notebook edit")),
    ("LS", phrase("list the directory contents", "a directory listing")),
    ("AskUserQuestion", phrase("ask the user a clarifying question", "a clarifying question")),
    ("Skill", phrase("apply the named skill", "the named skill")),
    ("SlashCommand", phrase("run the slash command", "a slash command")),
];

const FALLBACK: ToolPhrase = phrase("use the matching editor capability", "the matching editor capability");

/// Phrase for a tool name; unknown names get a generic phrase
pub fn tool_phrase(tool: &str) -> ToolPhrase {
    TOOL_PHRASES
        .iter()
        .find(|(name, _)| *name == tool)
        .map(|(_, phrase)| *phrase)
        .unwrap_or(FALLBACK)
}

const COPILOT_TOOLS: &[(&str, &str)] = &[
    ("Glob", "search"),
    ("Grep", "search"),
    ("LS", "search"),
    ("Read", "codebase"),
    ("Write", "editFiles"),
    ("Edit", "editFiles"),
    ("MultiEdit", "editFiles"),
    ("NotebookEdit", "editFiles"),
    ("Bash", "runCommands"),
    ("WebFetch", "fetch"),
    ("WebSearch", "fetch"),
    ("TodoWrite", "todos"),
];

/// Copilot prompt-file tool name for an assistant tool, if one exists
pub fn copilot_tool(tool: &str) -> Option<&'static str> {
    let base = tool.split('(').next().unwrap_or(tool).trim();
    COPILOT_TOOLS
        .iter()
        .find(|(name, _)| *name == base)
        .map(|(_, mapped)| *mapped)
}
