//! End-to-end acceptance scenarios

use weft::models::{Platform, WarningCategory};
use weft::parser::parse_template;
use weft::pipeline::{convert, ConvertOptions};

use super::helpers::*;

const NON_NATIVE_TOOLS: [Platform; 3] = [Platform::Cursor, Platform::Windsurf, Platform::Copilot];

/// Scenario A: tool invocation on platforms without a tool concept
#[test]
fn test_tool_invocation_is_emulated() {
    let input = template("name: foo\ndescription: bar\n", "Use the Glob tool to find files.");

    for platform in NON_NATIVE_TOOLS {
        let result = convert_one(&input, platform);
        assert!(result.success);

        let file = main_file(&result, "foo");
        assert!(!file.contains("Glob"), "{platform}: {file}");
        assert!(
            body_of(file).starts_with("Find files whose paths match a name pattern"),
            "{platform}: {file}"
        );

        let emulated: Vec<_> = result
            .warnings
            .iter()
            .filter(|w| w.category == WarningCategory::Emulated)
            .collect();
        assert_eq!(emulated.len(), 1, "{platform}: {:?}", result.warnings);
        assert_eq!(emulated[0].field.as_deref(), Some("tool-invocation"));
    }
}

#[test]
fn test_tool_invocation_is_native_on_claude() {
    let input = template("name: foo\ndescription: bar\n", "Use the Glob tool to find files.");
    let result = convert_one(&input, Platform::Claude);

    assert!(result.warnings.is_empty());
    assert_eq!(
        main_file(&result, "foo"),
        "---\nname: foo\ndescription: bar\n---\nUse the Glob tool to find files."
    );
}

/// Scenario B: a splittable ceiling produces continuation files
#[test]
fn test_oversized_body_is_split_on_windsurf() {
    let body = "Keep every change small and reviewed.\n\n".repeat(400);
    let input = template("name: big\ndescription: d\n", &body);
    let result = convert_one(&input, Platform::Windsurf);

    assert!(result.success);
    assert!(has_warning(&result, WarningCategory::Limit, "content"));
    assert!(result.files.len() > 1);

    let mut rebuilt = String::new();
    for index in 1..=result.files.len() {
        let path = if index == 1 {
            ".windsurf/rules/big.md".to_string()
        } else {
            format!(".windsurf/rules/big-part-{index}.md")
        };
        let file = &result.files[&path];
        assert!(file.chars().count() <= 12_000, "{path} is over the ceiling");
        rebuilt.push_str(&body_of(file));
    }
    assert_eq!(rebuilt, body);
}

/// Scenario B: a non-splittable ceiling keeps everything in one file
#[test]
fn test_oversized_body_is_kept_whole_on_copilot() {
    let body = "Keep every change small and reviewed.\n\n".repeat(150);
    let input = template("name: big\ndescription: d\n", &body);
    let result = convert_one(&input, Platform::Copilot);

    assert!(result.success);
    assert_eq!(result.files.len(), 1);
    assert_eq!(count(&result, WarningCategory::Limit), 1);
    assert_eq!(body_of(main_file(&result, "big")), body);
}

/// Scenario C: a missing description is reported on every platform
#[test]
fn test_missing_description_warns_everywhere() {
    let input = template("name: foo\n", "Review the diff.\n");
    let conversion = convert(&input, &Platform::ALL, &ConvertOptions::default()).unwrap();

    assert!(conversion.template.metadata.description.is_none());
    assert_eq!(conversion.results.len(), 4);
    for result in &conversion.results {
        assert!(result.success);
        assert!(
            has_warning(result, WarningCategory::Validation, "description"),
            "{}: {:?}",
            result.platform,
            result.warnings
        );
    }
}

/// Scenario D: conversions are deterministic
#[test]
fn test_repeated_conversion_is_byte_identical() {
    let input = template(
        "name: Release Notes\ndescription: Draft release notes\ntools: Read, Grep, Bash\nagent: writer\ncontext: isolated\npermissions:\n  allow: [\"Bash(git log:*)\"]\n  deny: [\"Bash(git push:*)\"]\nx-team: docs\n",
        "Use the Grep tool to search for TODO markers, then use the Task tool.\n\n> [!NOTE]\n> Keep it short.\n",
    );

    for platform in Platform::ALL {
        let first = convert_one(&input, platform);
        let second = convert_one(&input, platform);
        assert_eq!(first.files, second.files, "{platform}");
        assert_eq!(first.warnings, second.warnings, "{platform}");
    }
}

/// Scenario E: an agent becomes a persona file referenced by name
#[test]
fn test_agent_gets_persona_file() {
    let input = template(
        "name: audit\ndescription: Security audit\nagent: security-reviewer\n",
        "Review the changed files and summarize the risks.\n",
    );

    for platform in NON_NATIVE_TOOLS {
        let result = convert_one(&input, platform);
        let personas: Vec<_> = result
            .files
            .keys()
            .filter(|path| path.contains("agent-security-reviewer"))
            .collect();
        assert_eq!(personas.len(), 1, "{platform}: {:?}", result.files.keys());
        assert_eq!(result.files.len(), 2);
        assert!(main_file(&result, "audit").contains("agent-security-reviewer"));
        assert!(has_warning(&result, WarningCategory::Emulated, "agent"));
    }
}

#[test]
fn test_agent_is_native_on_claude() {
    let input = template(
        "name: audit\ndescription: Security audit\nagent: security-reviewer\n",
        "Review the changed files.\n",
    );
    let result = convert_one(&input, Platform::Claude);

    assert_eq!(result.files.len(), 1);
    let skill = parse_template(main_file(&result, "audit")).unwrap();
    assert_eq!(skill.metadata.agent.as_deref(), Some("security-reviewer"));
}
