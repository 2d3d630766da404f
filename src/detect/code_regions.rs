//! Locate fenced code blocks and inline code spans.
//!
//! Detection never reaches into these regions, so literal examples inside
//! code survive every transformation byte-for-byte.

use std::ops::Range;

/// A fence opening line: marker char, run length
fn fence_marker(line: &str) -> Option<(char, usize)> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    if indent > 3 {
        return None;
    }
    let rest = &line[indent..];
    let marker = rest.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let run = rest.chars().take_while(|c| *c == marker).count();
    (run >= 3).then_some((marker, run))
}

fn closes_fence(line: &str, marker: char, open_run: usize) -> bool {
    match fence_marker(line) {
        Some((c, run)) if c == marker && run >= open_run => {
            let indent = line.len() - line.trim_start_matches(' ').len();
            line[indent + run..].trim().is_empty()
        }
        _ => false,
    }
}

/// Byte ranges of fenced code blocks, fences included
///
/// An unclosed fence runs to the end of the content.
pub fn fenced_blocks(content: &str) -> Vec<Range<usize>> {
    let mut blocks = Vec::new();
    let mut open: Option<(char, usize, usize)> = None;
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        let text = line.trim_end_matches(['\n', '\r']);

        match open {
            None => {
                if let Some((marker, run)) = fence_marker(text) {
                    open = Some((marker, run, line_start));
                }
            }
            Some((marker, run, start)) => {
                if closes_fence(text, marker, run) {
                    blocks.push(start..offset);
                    open = None;
                }
            }
        }
    }

    if let Some((_, _, start)) = open {
        blocks.push(start..content.len());
    }

    blocks
}

/// Byte ranges of inline code spans within `segment`, offset by `base`
///
/// A backtick run opens a span closed by the next run of the same length.
/// Spans do not continue across a blank line.
fn inline_spans(segment: &str, base: usize, out: &mut Vec<Range<usize>>) {
    let bytes = segment.as_bytes();
    let breaks = blank_lines(segment);
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'`' {
            i += 1;
            continue;
        }

        let open_start = i;
        while i < bytes.len() && bytes[i] == b'`' {
            i += 1;
        }
        let run = i - open_start;

        let next = breaks.partition_point(|&b| b < i);
        let paragraph_end = breaks.get(next).copied().unwrap_or(bytes.len());

        let mut j = i;
        let mut closed = None;
        while j < paragraph_end {
            if bytes[j] != b'`' {
                j += 1;
                continue;
            }
            let close_start = j;
            while j < paragraph_end && bytes[j] == b'`' {
                j += 1;
            }
            if j - close_start == run {
                closed = Some(j);
                break;
            }
        }

        if let Some(end) = closed {
            out.push(base + open_start..base + end);
            i = end;
        }
    }
}

/// Start offsets of lines holding only whitespace (CRLF included)
fn blank_lines(segment: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut offset = 0;
    for line in segment.split_inclusive('\n') {
        if line.trim().is_empty() {
            starts.push(offset);
        }
        offset += line.len();
    }
    starts
}

/// Byte ranges of all code regions, sorted by start
pub fn code_regions(content: &str) -> Vec<Range<usize>> {
    let fenced = fenced_blocks(content);
    let mut regions = Vec::new();

    let mut cursor = 0;
    for block in &fenced {
        inline_spans(&content[cursor..block.start], cursor, &mut regions);
        cursor = block.end;
    }
    inline_spans(&content[cursor..], cursor, &mut regions);

    regions.extend(fenced);
    regions.sort_by_key(|r| (r.start, r.end));
    regions
}

/// Whether `span` intersects any of `regions`
pub fn intersects_any(span: &Range<usize>, regions: &[Range<usize>]) -> bool {
    regions
        .iter()
        .any(|r| span.start < r.end && r.start < span.end)
}

/// Whether `offset` falls strictly inside any of `regions`
pub fn inside_any(offset: usize, regions: &[Range<usize>]) -> bool {
    regions.iter().any(|r| r.start < offset && offset < r.end)
}
