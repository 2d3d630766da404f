use super::error::ParseError;

/// Split a template into its raw YAML header and its body
///
/// Expects the header delimited by `---` lines at the start of the input.
/// The body is returned byte-for-byte as it appears after the closing
/// delimiter line.
///
/// # Example
///
/// ```text
/// ---
/// name: review
/// ---
/// # Markdown content here
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - Content is empty or missing the opening `---`
/// - The closing `---` is not found
pub fn split_frontmatter(content: &str) -> Result<(&str, &str), ParseError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut lines = content.split_inclusive('\n');
    let first = lines.next().ok_or(ParseError::MissingOpeningDelimiter)?;
    if first.trim() != "---" {
        return Err(ParseError::MissingOpeningDelimiter);
    }

    // The closing delimiter must sit at the same indentation as the opening
    // one, so `---` inside an indented block scalar is not a delimiter.
    let opening_indent = indentation(first);
    let header_start = first.len();

    let mut offset = header_start;
    for line in lines {
        let line_start = offset;
        offset += line.len();
        if line.trim() == "---" && indentation(line) == opening_indent {
            return Ok((&content[header_start..line_start], &content[offset..]));
        }
    }

    Err(ParseError::UnclosedHeader)
}

fn indentation(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_valid_frontmatter() {
        let content = "---\nname: review\n---\n# Markdown content\nMore content here";
        let (header, body) = split_frontmatter(content).unwrap();
        assert_eq!(header, "name: review\n");
        assert_eq!(body, "# Markdown content\nMore content here");
    }

    #[test]
    fn test_split_missing_opening_delimiter() {
        let result = split_frontmatter("No frontmatter here\n# Just markdown");
        assert!(matches!(result, Err(ParseError::MissingOpeningDelimiter)));
    }

    #[test]
    fn test_split_missing_closing_delimiter() {
        let result = split_frontmatter("---\nname: x\n# No closing delimiter");
        assert!(matches!(result, Err(ParseError::UnclosedHeader)));
    }

    #[test]
    fn test_split_empty_content() {
        assert!(split_frontmatter("").is_err());
    }

    #[test]
    fn test_split_preserves_crlf_body() {
        let content = "---\r\nname: x\r\n---\r\nline one\r\nline two\r\n";
        let (header, body) = split_frontmatter(content).unwrap();
        assert_eq!(header, "name: x\r\n");
        assert_eq!(body, "line one\r\nline two\r\n");
    }

    #[test]
    fn test_split_with_embedded_delimiter_in_block_scalar() {
        let content = r#"---
name: example
description: |
  Some description with example:

  ---
  nested: true
  ---

status: done
---
# Body"#;

        let (header, body) = split_frontmatter(content).unwrap();
        assert!(header.contains("nested: true"));
        assert!(header.ends_with("status: done\n"));
        assert_eq!(body, "# Body");
    }

    #[test]
    fn test_split_empty_header() {
        let (header, body) = split_frontmatter("---\n---\nbody").unwrap();
        assert_eq!(header, "");
        assert_eq!(body, "body");
    }

    #[test]
    fn test_split_strips_byte_order_mark() {
        let (header, _) = split_frontmatter("\u{feff}---\nname: x\n---\n").unwrap();
        assert_eq!(header, "name: x\n");
    }
}
