//! Target platform identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An AI-assistant host platform a template can be converted for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Claude Code skills
    Claude,
    /// Cursor project rules
    Cursor,
    /// Windsurf workspace rules
    Windsurf,
    /// GitHub Copilot instruction and prompt files
    Copilot,
}

impl Platform {
    /// Every supported platform, in canonical output order
    pub const ALL: [Platform; 4] = [
        Platform::Claude,
        Platform::Cursor,
        Platform::Windsurf,
        Platform::Copilot,
    ];

    /// Stable identifier used on the command line and in template headers
    pub fn id(&self) -> &'static str {
        match self {
            Platform::Claude => "claude",
            Platform::Cursor => "cursor",
            Platform::Windsurf => "windsurf",
            Platform::Copilot => "copilot",
        }
    }

    /// Human-readable product name used in advisory text
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Claude => "Claude Code",
            Platform::Cursor => "Cursor",
            Platform::Windsurf => "Windsurf",
            Platform::Copilot => "GitHub Copilot",
        }
    }

    /// Character ceiling for a single output file, if the platform has one
    pub fn size_ceiling(&self) -> Option<usize> {
        match self {
            Platform::Windsurf => Some(12_000),
            Platform::Copilot => Some(4_000),
            Platform::Claude | Platform::Cursor => None,
        }
    }

    /// Whether oversized output may be split across continuation files
    pub fn splits_oversized(&self) -> bool {
        matches!(self, Platform::Windsurf)
    }

    /// Character ceiling for the `description` field
    pub fn description_limit(&self) -> Option<usize> {
        match self {
            Platform::Claude => Some(1024),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for Platform {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "claude" | "claude-code" => Ok(Platform::Claude),
            "cursor" => Ok(Platform::Cursor),
            "windsurf" => Ok(Platform::Windsurf),
            "copilot" | "github-copilot" => Ok(Platform::Copilot),
            _ => anyhow::bail!(
                "Invalid platform: {s}. Use: claude, cursor, windsurf, copilot"
            ),
        }
    }
}
