//! Integration tests for exporting letters and reading drafts.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use progress_letter::{
    draft::{draft_json, load_draft, load_or_seeded, parse_draft},
    export::{export_file_name, file_context, write_letter},
};
use time::macros::date;

#[test]
fn test_export_writes_exact_text() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let store = LetterStore::seeded();
    let text = store.rendered_letter();

    let name = export_file_name(&file_context(&store.state().recipient), date!(2026 - 01 - 19))?;
    assert_eq!(name, "Bao_cao_IELTS_Cô_Tuyết_Anna_19-01-2026.txt");

    let path = write_letter(dir.path(), &name, &text)?;
    assert_eq!(path, dir.path().join(&name));
    assert_eq!(std::fs::read_to_string(&path)?, text);

    Ok(())
}

#[test]
fn test_export_creates_missing_directory() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let nested = dir.path().join("letters").join("2026");

    let path = write_letter(&nested, "letter.txt", "Ký tên:\nMr. T")?;
    assert!(path.is_file());

    Ok(())
}

#[test]
fn test_draft_round_trips_through_file() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("draft.json");

    let mut student = full_student();
    student.note = "nghỉ 1 buổi".to_string();
    let state = letter_with(vec![student, named_student("Sơn")]);
    std::fs::write(&path, draft_json(&state)?)?;

    let loaded = load_draft(&path)?;
    assert_eq!(loaded, state);
    assert_eq!(render(&loaded), render(&state));

    Ok(())
}

#[test]
fn test_draft_without_ids_gets_unique_ones() -> anyhow::Result<()> {
    let state = parse_draft(r#"{"students":[{"name":"A"},{"name":"B"}],"signature":"T"}"#)?;

    assert_eq!(state.students.len(), 2);
    assert_ne!(state.students[0].id, state.students[1].id);
    assert_eq!(state.signature, "T");

    Ok(())
}

#[test]
fn test_draft_with_repeated_id_keeps_records_addressable() -> anyhow::Result<()> {
    let raw = r#"{"students":[
        {"id":"6f1c0000-0000-4000-8000-000000000001","name":"A"},
        {"id":"6f1c0000-0000-4000-8000-000000000001","name":"B"}
    ]}"#;
    let state = parse_draft(raw)?;

    // 1. The first record keeps its id, the second gets a new one
    assert_eq!(state.students[0].id.to_string(), "6f1c0000-0000-4000-8000-000000000001");
    assert_ne!(state.students[0].id, state.students[1].id);

    // 2. Each record can be updated and removed on its own
    let mut store = LetterStore::new(state);
    let second = store.state().students[1].id;
    store.update_student(second, StudentUpdate::field(StudentField::Name, "Changed"));
    let names: Vec<&str> = store.state().students.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["A", "Changed"]);

    store.remove_student(second);
    let names: Vec<&str> = store.state().students.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["A"]);

    Ok(())
}

#[test]
fn test_missing_draft_is_an_error() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let result = load_draft(dir.path().join("nope.json"));
    assert!(result.is_err());
}

#[test]
fn test_no_draft_means_seeded() -> anyhow::Result<()> {
    let state = load_or_seeded(None::<&std::path::Path>)?;
    let seeded = LetterState::seeded();
    assert_eq!(state.recipient, seeded.recipient);
    assert_eq!(state.summary, seeded.summary);
    assert_eq!(state.signature, seeded.signature);
    assert_eq!(state.students.len(), 1);
    Ok(())
}
