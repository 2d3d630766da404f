//! Partition an oversized body into consecutive parts.
//!
//! Parts are slices of the original body, so joining them gives the body
//! back exactly. Cuts prefer block starts (headings and paragraphs) outside
//! fenced code, then any line start outside fenced code, then any line
//! start, and only then a character boundary.

use crate::detect::code_regions::{fenced_blocks, inside_any};

/// Split `body` into parts of at most `max_chars` characters each
pub fn split_body(body: &str, max_chars: usize) -> Vec<&str> {
    let max_chars = max_chars.max(1);
    if body.chars().count() <= max_chars {
        return vec![body];
    }

    let fences = fenced_blocks(body);
    let boundaries = line_boundaries(body, &fences);

    let mut parts = Vec::new();
    let mut start = 0;
    while start < body.len() {
        let limit = char_limit(body, start, max_chars);
        if limit == body.len() {
            parts.push(&body[start..]);
            break;
        }

        let cut = best_cut(&boundaries, start, limit).unwrap_or(limit);
        parts.push(&body[start..cut]);
        start = cut;
    }
    parts
}

/// Where a cut may go, best quality first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Quality {
    Block = 0,
    Line = 1,
    InsideFence = 2,
}

fn line_boundaries(body: &str, fences: &[std::ops::Range<usize>]) -> Vec<(usize, Quality)> {
    let mut boundaries = Vec::new();
    let mut offset = 0;
    let mut previous_blank = false;

    for line in body.split_inclusive('\n') {
        if offset > 0 {
            let trimmed = line.trim_start();
            let quality = if inside_any(offset, fences) {
                Quality::InsideFence
            } else if previous_blank || trimmed.starts_with('#') {
                Quality::Block
            } else {
                Quality::Line
            };
            boundaries.push((offset, quality));
        }
        previous_blank = line.trim().is_empty();
        offset += line.len();
    }
    boundaries
}

/// Byte offset `max_chars` characters after `start`, capped at the end
fn char_limit(body: &str, start: usize, max_chars: usize) -> usize {
    body[start..]
        .char_indices()
        .nth(max_chars)
        .map(|(i, _)| start + i)
        .unwrap_or(body.len())
}

/// Latest boundary in `(start, limit]` of the best available quality
fn best_cut(boundaries: &[(usize, Quality)], start: usize, limit: usize) -> Option<usize> {
    [Quality::Block, Quality::Line, Quality::InsideFence]
        .into_iter()
        .find_map(|wanted| {
            boundaries
                .iter()
                .filter(|(offset, quality)| *offset > start && *offset <= limit && *quality <= wanted)
                .map(|(offset, _)| *offset)
                .last()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_partition(body: &str, parts: &[&str], max_chars: usize) {
        assert_eq!(parts.concat(), body);
        for part in parts {
            assert!(!part.is_empty());
            assert!(part.chars().count() <= max_chars, "part too long: {part:?}");
        }
    }

    #[test]
    fn test_small_body_is_one_part() {
        assert_eq!(split_body("short", 10), vec!["short"]);
    }

    #[test]
    fn test_splits_at_headings() {
        let body = "# One\nalpha alpha\n# Two\nbeta beta\n# Three\ngamma\n";
        let parts = split_body(body, 24);
        assert_partition(body, &parts, 24);
        assert_eq!(parts, vec!["# One\nalpha alpha\n", "# Two\nbeta beta\n", "# Three\ngamma\n"]);
    }

    #[test]
    fn test_prefers_paragraph_over_plain_line() {
        let body = "aaaa\n\nbbbb\ncccc\ndddd\n";
        let parts = split_body(body, 17);
        assert_partition(body, &parts, 17);
        assert_eq!(parts[0], "aaaa\n\n");
    }

    #[test]
    fn test_avoids_cutting_inside_fence() {
        let body = "intro\n```\nline1\nline2\nline3\n```\nafter text\n";
        let parts = split_body(body, 30);
        assert_partition(body, &parts, 30);
        assert_eq!(parts, vec!["intro\n", "```\nline1\nline2\nline3\n```\n", "after text\n"]);
    }

    #[test]
    fn test_long_line_hard_cut_on_char_boundary() {
        let body = "é".repeat(25);
        let parts = split_body(&body, 10);
        assert_partition(&body, &parts, 10);
        assert_eq!(parts.len(), 3);
    }

    #[test]
    fn test_zero_budget_still_terminates() {
        let parts = split_body("abc", 0);
        assert_eq!(parts, vec!["a", "b", "c"]);
    }
}
