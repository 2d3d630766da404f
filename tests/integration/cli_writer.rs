//! `weft convert` writing files to disk

use std::fs;
use tempfile::TempDir;

use weft::commands::convert::{execute, ConvertRequest};
use weft::models::Platform;

use super::helpers::*;

const REVIEW: &str = "---\nname: review\ndescription: Review a change\n---\nUse the Glob tool to find changed files.\n";

fn request(dir: &TempDir, targets: Vec<Platform>) -> ConvertRequest {
    let config = dir.path().join("weft.toml");
    if !config.exists() {
        fs::write(&config, "").unwrap();
    }
    ConvertRequest {
        template: write_template(dir.path(), "review.md", REVIEW),
        targets,
        out_dir: Some(dir.path().join("out")),
        config: Some(config),
        ..Default::default()
    }
}

#[test]
fn test_convert_writes_every_platform() {
    let dir = TempDir::new().unwrap();
    execute(request(&dir, vec![])).expect("conversion should succeed");

    let out = dir.path().join("out");
    for platform in Platform::ALL {
        let path = out.join(main_path(platform, "review"));
        assert!(path.exists(), "missing {}", path.display());
    }

    let cursor = fs::read_to_string(out.join(".cursor/rules/review.mdc")).unwrap();
    assert!(cursor.starts_with("---\ndescription: Review a change\n"));
    assert!(!cursor.contains("Glob"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut req = request(&dir, vec![Platform::Cursor]);
    req.dry_run = true;
    execute(req).unwrap();

    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_strict_failure_still_writes_clean_platforms() {
    let dir = TempDir::new().unwrap();
    let mut req = request(&dir, vec![Platform::Claude, Platform::Cursor]);
    req.strict = true;

    let err = execute(req).unwrap_err().to_string();
    assert!(err.contains("1 of 2"), "{err}");
    assert!(err.contains("cursor"), "{err}");

    let out = dir.path().join("out");
    assert!(out.join(".claude/skills/review/SKILL.md").exists());
    assert!(!out.join(".cursor/rules/review.mdc").exists());
}

#[test]
fn test_config_file_supplies_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("weft.toml"),
        "[convert]\ntargets = [\"windsurf\"]\nout_dir = \"unused\"\n",
    )
    .unwrap();

    execute(request(&dir, vec![])).unwrap();

    let out = dir.path().join("out");
    assert!(out.join(".windsurf/rules/review.md").exists());
    assert!(!out.join(".cursor/rules/review.mdc").exists());
}

#[test]
fn test_parse_error_names_the_template() {
    let dir = TempDir::new().unwrap();
    let mut req = request(&dir, vec![Platform::Claude]);
    req.template = write_template(dir.path(), "broken.md", "no header here\n");

    let err = format!("{:#}", execute(req).unwrap_err());
    assert!(err.contains("broken.md"), "{err}");
    assert!(!dir.path().join("out").exists());
}
