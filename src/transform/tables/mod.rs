//! Per-platform rewrite tables.
//!
//! Each table maps every construct kind to exactly one action. Supporting a
//! new platform means adding a table here; the shared control flow in
//! `transform_content` does not change.

mod claude;
mod copilot;
mod cursor;
mod windsurf;

use crate::detect::ConstructKind;
use crate::models::Platform;

use super::Action;

/// Construct kind to action, one entry per kind
pub type RewriteTable = &'static [(ConstructKind, Action)];

pub fn table_for(platform: Platform) -> RewriteTable {
    match platform {
        Platform::Claude => &claude::TABLE,
        Platform::Cursor => &cursor::TABLE,
        Platform::Windsurf => &windsurf::TABLE,
        Platform::Copilot => &copilot::TABLE,
    }
}

/// Look up the action for `kind`; kinds missing from a table pass through
pub fn lookup(table: RewriteTable, kind: ConstructKind) -> Action {
    table
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, action)| *action)
        .unwrap_or(Action::Native)
}
