//! Invariants that hold for every template and platform

use weft::detect::code_regions::{code_regions, intersects_any};
use weft::detect::detect_constructs;
use weft::models::{Platform, WarningCategory};
use weft::parser::parse_template;

use super::helpers::*;

const RICH_BODY: &str = "\
Use the Grep tool to search for TODO markers, then spawn a planner subagent.
Run the review in a fresh context so earlier notes do not leak.
Never run `Bash(rm -rf:*)` and never run Bash(git push:*) without asking.

```bash
Use the Glob tool && npm test
```

Inline `Use the Read tool` stays as written.
";

#[test]
fn test_metadata_survives_reserialization() {
    let input = template(
        "name: review\ndescription: Review code\nversion: 1.2.0\ntools: Read, Grep\nglobs: \"src/**/*.rs\"\nplatforms: [cursor, emacs]\ncontext: isolated\npermissions:\n  allow: Bash(cargo test:*)\nhooks:\n  Stop:\n    - command: ./notify.sh\ncompatibility:\n  cursor: Works best with agent mode\nx-team: core\nx-ticket: 42\n",
        "Body\n",
    );
    let first = parse_template(&input).unwrap();
    assert_eq!(first.metadata.platforms, vec![Platform::Cursor]);
    assert_eq!(first.metadata.tools, vec!["Read", "Grep"]);

    let yaml = first.metadata.to_yaml().unwrap();
    let second = parse_template(&template(&yaml, "Body\n")).unwrap();
    assert_eq!(second.metadata, first.metadata);
    assert_eq!(second.content, first.content);
}

#[test]
fn test_matches_are_ordered_disjoint_and_outside_code() {
    let matches = detect_constructs(RICH_BODY);
    let regions = code_regions(RICH_BODY);
    assert!(matches.len() >= 4, "{matches:?}");

    for pair in matches.windows(2) {
        assert!(pair[0].end <= pair[1].start, "{pair:?}");
    }
    for found in &matches {
        assert!(found.start < found.end && found.end <= RICH_BODY.len());
        assert!(!intersects_any(&found.span(), &regions), "{found:?}");
    }
}

#[test]
fn test_code_is_never_rewritten() {
    let input = template("name: rich\ndescription: d\n", RICH_BODY);

    for platform in Platform::ALL {
        let result = convert_one(&input, platform);
        let body = body_of(main_file(&result, "rich"));
        assert!(
            body.contains("```bash\nUse the Glob tool && npm test\n```\n"),
            "{platform}: {body}"
        );
        assert!(body.contains("`Use the Read tool`"), "{platform}: {body}");
        assert!(body.contains("`Bash(rm -rf:*)`"), "{platform}: {body}");
    }
}

#[test]
fn test_deny_list_is_a_security_warning_where_not_enforced() {
    let input = template(
        "name: guarded\ndescription: d\npermissions:\n  deny: [\"Bash(git push:*)\"]\n",
        "Review the diff.\n",
    );

    for platform in [Platform::Cursor, Platform::Windsurf, Platform::Copilot] {
        let result = convert_one(&input, platform);
        assert!(
            has_warning(&result, WarningCategory::Security, "permissions.deny"),
            "{platform}: {:?}",
            result.warnings
        );
        assert!(main_file(&result, "guarded").contains("Bash(git push:*)"));
    }

    let claude = convert_one(&input, Platform::Claude);
    assert_eq!(count(&claude, WarningCategory::Security), 0);
    assert!(claude
        .files
        .contains_key(".claude/skills/guarded/settings.json"));
}

#[test]
fn test_inline_permission_rule_is_advisory_off_claude() {
    let input = template("name: p\ndescription: d\n", "Run Bash(npm test:*) freely.\n");

    let cursor = convert_one(&input, Platform::Cursor);
    assert!(has_warning(&cursor, WarningCategory::Security, "permission-reference"));

    let claude = convert_one(&input, Platform::Claude);
    assert!(claude.warnings.is_empty());
}

#[test]
fn test_one_persona_file_per_agent() {
    let input = template(
        "name: plan\ndescription: d\nagent: Release Planner\n",
        "Spawn a planner subagent to outline the release.\n",
    );

    for platform in [Platform::Cursor, Platform::Windsurf, Platform::Copilot] {
        let result = convert_one(&input, platform);
        let personas = result.files.keys().filter(|p| p.contains("/agent-")).count();
        assert_eq!(personas, 1, "{platform}: {:?}", result.files.keys());
        assert!(result.files.keys().any(|p| p.contains("agent-release-planner")));
    }
}

#[test]
fn test_platform_failures_are_isolated() {
    let input = template("name: foo\ndescription: bar\n", "Use the Glob tool.\n");
    let conversion = weft::convert(
        &input,
        &Platform::ALL,
        &weft::ConvertOptions { strict: true },
    )
    .unwrap();

    let succeeded: Vec<_> = conversion
        .results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.platform)
        .collect();
    assert_eq!(succeeded, vec![Platform::Claude]);
    for result in conversion.results.iter().filter(|r| !r.success) {
        assert!(result.files.is_empty());
        assert!(result.error.is_some());
        assert!(!result.warnings.is_empty());
    }
}
