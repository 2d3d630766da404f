//! Semantic construct detection in template bodies.
//!
//! Detection only locates spans. It never rewrites text, and it never
//! reports a span that touches a fenced block or inline code span.

pub mod code_regions;
mod kinds;
pub mod rules;


use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::Range;
use tracing::trace;

pub use kinds::ConstructKind;
use code_regions::{code_regions, intersects_any};
use rules::rules;

/// A construct located in body text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstructMatch {
    pub kind: ConstructKind,
    /// Byte offset of the first matched byte
    pub start: usize,
    /// Byte offset one past the last matched byte
    pub end: usize,
    /// Named capture groups that participated in the match
    pub params: BTreeMap<String, String>,
}

impl ConstructMatch {
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn text<'a>(&self, content: &'a str) -> &'a str {
        &content[self.start..self.end]
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    fn overlaps(&self, other: &ConstructMatch) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A match before overlap resolution
struct Candidate {
    found: ConstructMatch,
    priority: u8,
    /// Position of the producing pattern in the rule table
    order: usize,
}

/// Find every construct in `content`
///
/// Returns non-overlapping matches sorted by start offset. When candidate
/// spans overlap, the higher-priority kind wins and the other is dropped.
/// Equal priorities resolve to the earliest start, then the longest span,
/// then the pattern listed first in the rule table.
pub fn detect_constructs(content: &str) -> Vec<ConstructMatch> {
    let regions = code_regions(content);
    let mut candidates = Vec::new();
    let mut order = 0;

    for rule in rules() {
        for pattern in &rule.patterns {
            for caps in pattern.captures_iter(content) {
                let Some(whole) = caps.get(0) else { continue };
                if whole.is_empty() || intersects_any(&whole.range(), &regions) {
                    continue;
                }

                let params = pattern
                    .capture_names()
                    .flatten()
                    .filter_map(|name| {
                        caps.name(name)
                            .map(|m| (name.to_string(), m.as_str().to_string()))
                    })
                    .collect();

                candidates.push(Candidate {
                    found: ConstructMatch {
                        kind: rule.kind,
                        start: whole.start(),
                        end: whole.end(),
                        params,
                    },
                    priority: rule.priority,
                    order,
                });
            }
            order += 1;
        }
    }

    resolve_overlaps(candidates)
}

fn resolve_overlaps(mut candidates: Vec<Candidate>) -> Vec<ConstructMatch> {
    candidates.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.found.start.cmp(&b.found.start))
            .then_with(|| {
                let len_a = a.found.end - a.found.start;
                let len_b = b.found.end - b.found.start;
                len_b.cmp(&len_a)
            })
            .then_with(|| a.order.cmp(&b.order))
    });

    let mut accepted: Vec<ConstructMatch> = Vec::new();
    for candidate in candidates {
        if accepted.iter().any(|m| m.overlaps(&candidate.found)) {
            trace!(
                kind = %candidate.found.kind,
                start = candidate.found.start,
                "Discarding overlapped construct"
            );
            continue;
        }
        accepted.push(candidate.found);
    }

    accepted.sort_by_key(|m| (m.start, m.end));
    accepted
}
