//! Script file loading tests.

use demotape::{LineKind, Script, ScriptError};

use super::helpers::{sample_script_toml, temp_script};

#[test]
fn loads_a_script_file_from_disk() {
    let (dir, path) = temp_script(sample_script_toml());

    let script = Script::load(&path).unwrap();
    assert_eq!(script.title(), Some("sample"));
    assert_eq!(script.len(), 3);
    assert_eq!(script.get(1).unwrap().kind, LineKind::Command);
    assert_eq!(script.get(1).unwrap().content, "ls");

    drop(dir);
}

#[test]
fn load_propagates_parse_errors() {
    let (dir, path) = temp_script("[[lines]]\nkind = \"sideways\"\n");

    let err = Script::load(&path).unwrap_err();
    assert!(matches!(err, ScriptError::Parse(_)));

    drop(dir);
}

#[test]
fn load_rejects_a_script_with_no_lines() {
    let (dir, path) = temp_script("title = \"empty\"\n");

    assert!(matches!(Script::load(&path), Err(ScriptError::Empty)));

    drop(dir);
}

#[test]
fn missing_file_error_names_the_path() {
    let err = Script::load("/no/such/script.toml").unwrap_err();
    assert!(err.to_string().contains("/no/such/script.toml"));
}
