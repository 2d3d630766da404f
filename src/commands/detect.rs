//! `weft detect`: list the constructs found in a template body.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

use super::common::{line_col, read_template, truncate_for_display};
use crate::detect::{detect_constructs, ConstructKind, ConstructMatch};
use crate::parser::parse_template;

const TEXT_WIDTH: usize = 60;

/// One detected construct, located for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub kind: ConstructKind,
    pub line: usize,
    pub column: usize,
    pub text: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,
}

impl Finding {
    fn locate(content: &str, found: ConstructMatch) -> Self {
        let (line, column) = line_col(content, found.start);
        Self {
            kind: found.kind,
            line,
            column,
            text: found.text(content).to_string(),
            params: found.params,
        }
    }
}

/// Detected constructs with body-relative positions
pub fn findings(content: &str) -> Vec<Finding> {
    detect_constructs(content)
        .into_iter()
        .map(|found| Finding::locate(content, found))
        .collect()
}

pub fn execute(template: &Path, json: bool) -> Result<()> {
    let input = read_template(template)?;
    let parsed = parse_template(&input)
        .with_context(|| format!("Failed to parse {}", template.display()))?;
    let findings = findings(&parsed.content);

    if json {
        let out = serde_json::to_string_pretty(&findings).context("Failed to serialize findings")?;
        println!("{out}");
        return Ok(());
    }

    if findings.is_empty() {
        println!("{} No constructs detected.", "─".dimmed());
        return Ok(());
    }

    println!("{}", format!("Constructs in {}", template.display()).bold());
    for finding in &findings {
        println!(
            "  {:>4}:{:<3} {:<20} {}",
            finding.line,
            finding.column,
            finding.kind.id().cyan(),
            truncate_for_display(&finding.text, TEXT_WIDTH)
        );
    }

    let mut counts: BTreeMap<ConstructKind, usize> = BTreeMap::new();
    for finding in &findings {
        *counts.entry(finding.kind).or_default() += 1;
    }
    println!();
    println!("{}", "Summary".bold());
    for (kind, count) in counts {
        println!("  {:<20} {count}", kind.label());
    }
    Ok(())
}
