//! `weft platforms`: what each platform does with every construct.

use anyhow::Result;
use colored::{ColoredString, Colorize};

use crate::detect::ConstructKind;
use crate::models::Platform;
use crate::transform::render::group_thousands;
use crate::transform::tables::lookup;
use crate::transform::{table_for, Action};

const KIND_WIDTH: usize = 22;
const CELL_WIDTH: usize = 12;

/// One row of the capability matrix, in `Platform::ALL` order
pub fn capability_row(kind: ConstructKind) -> Vec<Action> {
    Platform::ALL
        .iter()
        .map(|platform| lookup(table_for(*platform), kind))
        .collect()
}

fn cell(action: Action) -> ColoredString {
    let text = format!("{:<CELL_WIDTH$}", action.label());
    match action {
        Action::Native => text.green(),
        Action::Normalize(_) => text.normal(),
        Action::Emulate(_) => text.cyan(),
        Action::Unsupported(_) => text.yellow(),
        Action::Limit(_) => text.magenta(),
    }
}

fn ceiling(platform: Platform) -> String {
    match platform.size_ceiling() {
        Some(limit) if platform.splits_oversized() => {
            format!("{} chars, split", group_thousands(limit))
        }
        Some(limit) => format!("{} chars", group_thousands(limit)),
        None => "none".to_string(),
    }
}

pub fn execute() -> Result<()> {
    println!("{}", "Platforms".bold());
    for platform in Platform::ALL {
        println!(
            "  {:<10} {:<16} size limit: {}",
            platform.id(),
            platform.display_name(),
            ceiling(platform)
        );
    }

    println!();
    print!("{}", format!("{:<KIND_WIDTH$}", "Construct").bold());
    for platform in Platform::ALL {
        print!("{}", format!("{:<CELL_WIDTH$}", platform.id()).bold());
    }
    println!();
    println!("{}", "─".repeat(KIND_WIDTH + CELL_WIDTH * Platform::ALL.len()).dimmed());

    for kind in ConstructKind::ALL {
        print!("{:<KIND_WIDTH$}", kind.id());
        for action in capability_row(kind) {
            print!("{}", cell(action));
        }
        println!();
    }
    Ok(())
}
