//! Tier 1: Scripted Workspace Tests

use crate::common::*;
use stagehand::{
    Identifier, ScriptEntry, ScriptedIds, StagehandError, TempDirState, FAILURE_SENTINEL,
};

#[test]
fn test_workspace_layout_is_reproducible() {
    let mut first = scripted_temp_dir("reproducible_layout_first", abc_script());
    let mut second = scripted_temp_dir("reproducible_layout_second", abc_script());

    let names = |temp: &mut stagehand::SuiteTempDir<ScriptedIds>| {
        let base = temp.base().to_path_buf();
        let dir = temp.sub_directory();
        let file = temp.file_path();
        (
            dir.strip_prefix(&base).unwrap().to_path_buf(),
            file.strip_prefix(&base).unwrap().to_path_buf(),
        )
    };

    assert_eq!(names(&mut first), names(&mut second));

    first.cleanup();
    second.cleanup();
}

#[test]
fn test_injected_failure_mid_script() {
    let ids = ScriptedIds::new([
        ScriptEntry::Id(Identifier::parse(ID_A).unwrap()),
        ScriptEntry::Fail,
        ScriptEntry::Id(Identifier::parse(ID_C).unwrap()),
    ]);
    let mut temp = scripted_temp_dir("injected_failure_mid_script", ids);

    let dir = temp.try_sub_directory().unwrap();
    assert!(dir.is_dir());

    let err = temp.try_file().unwrap_err();
    assert!(matches!(err, StagehandError::InjectedIdFailure { position: 1 }));
    assert!(!err.is_contract_violation());

    let created = temp.try_file().unwrap();
    assert!(created.path.ends_with(ID_C));
    assert!(temp.id_source().all_consumed());

    drop(created);
    temp.cleanup();
}

#[test]
#[should_panic(expected = "script already served all 1 entries")]
fn test_under_declared_script_aborts() {
    let mut temp = scripted_temp_dir("under_declared_script", ScriptedIds::parse([ID_A]));
    temp.file_path();
    temp.file_path();
}

#[test]
fn test_sentinel_string_and_tag_agree() {
    let mut parsed = ScriptedIds::parse([FAILURE_SENTINEL, ID_B]);
    let mut tagged = ScriptedIds::new([
        ScriptEntry::Fail,
        ScriptEntry::Id(Identifier::parse(ID_B).unwrap()),
    ]);

    assert!(parsed.try_next_id().is_err());
    assert!(tagged.try_next_id().is_err());
    assert_eq!(parsed.next_id(), tagged.next_id());
}

#[test]
fn test_full_lifecycle_leaves_no_residue() {
    let mut temp = suite_temp_dir("full_lifecycle");
    let base = temp.base().to_path_buf();

    for _ in 0..3 {
        let dir = temp.sub_directory();
        std::fs::write(dir.join("payload"), b"data").unwrap();
    }
    drop(temp.file());

    temp.cleanup();
    assert!(!base.exists());
    assert_eq!(temp.state(), TempDirState::Cleaned);

    temp.init("full_lifecycle");
    assert!(temp.base().is_dir());
    temp.cleanup();
}
