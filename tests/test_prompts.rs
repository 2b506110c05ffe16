//! Tests for the shipped prompt template under config/prompts.

use std::fs;
use std::path::{Path, PathBuf};

fn prompts_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("config/prompts")
}

#[test]
fn specialist_template_exists() {
    assert!(
        prompts_dir().join("specialist.txt").exists(),
        "specialist.txt prompt file missing"
    );
}

#[test]
fn specialist_template_vars() {
    let text = fs::read_to_string(prompts_dir().join("specialist.txt")).unwrap();
    assert!(
        text.contains("{{role}}"),
        "specialist.txt should contain the {{{{role}}}} variable"
    );
}

#[test]
fn shipped_template_matches_built_in() {
    use senmon_assistant::chat::RolePrompt;
    use senmon_assistant::roles::SpecialistRole;

    let shipped = RolePrompt::from_dir(prompts_dir());
    let built_in = RolePrompt::built_in();
    for role in SpecialistRole::ALL {
        assert_eq!(shipped.render(role), built_in.render(role));
    }
}
