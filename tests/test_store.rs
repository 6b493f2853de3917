//! Integration tests for the form state store.
//!
//! Tests cover:
//! - Scalar field updates
//! - Adding and removing students, including the add/remove round trip
//! - Partial student updates touching only the targeted record and field
//! - Unknown ids as no-ops
//! - Snapshots staying unchanged after later commands

mod common;

use common::*;
use pretty_assertions::assert_eq;

#[test]
fn test_initial_state_has_one_student() {
    let store = LetterStore::default();
    assert_eq!(store.state().students.len(), 1);

    let seeded = LetterStore::seeded();
    assert_eq!(seeded.state().recipient, "Cô Tuyết Anna");
    assert_eq!(seeded.state().signature, "Thầy Trường\nGiáo viên IELTS");
    assert_eq!(seeded.state().students.len(), 1);
    assert_eq!(seeded.state().students[0].name, "");
}

#[test]
fn test_update_field_sets_only_that_field() {
    let mut store = LetterStore::new(letter_with(vec![named_student("Linh")]));
    let before = store.snapshot();

    store.update_field(LetterField::Wishing, "đạt 6.0");

    let after = store.state();
    assert_eq!(after.wishing, "đạt 6.0");
    for field in LetterField::ALL {
        if field != LetterField::Wishing {
            assert_eq!(after.get(field), before.get(field));
        }
    }
    assert_eq!(after.students, before.students);
}

#[test]
fn test_add_student_appends_empty_record() {
    let mut store = LetterStore::new(letter_with(vec![named_student("Linh")]));
    let first = store.state().students[0].id;

    let added = store.add_student();
    let students = &store.state().students;

    assert_eq!(students.len(), 2);
    assert_eq!(students[0].id, first);
    assert_eq!(students[1].id, added);
    assert_ne!(added, first);
    assert_eq!(
        students[1],
        StudentRecord {
            id: added,
            ..StudentRecord::default()
        }
    );
    assert_eq!(store.position(added), Some(1));
}

#[test]
fn test_add_then_remove_restores_students() {
    let mut store = LetterStore::new(letter_with(vec![named_student("A"), named_student("B")]));
    let before = store.state().students.clone();

    let added = store.add_student();
    store.remove_student(added);

    assert_eq!(store.state().students, before);
}

#[test]
fn test_remove_keeps_order_of_the_rest() {
    let mut store = LetterStore::new(letter_with(vec![
        named_student("A"),
        named_student("B"),
        named_student("C"),
    ]));
    let middle = store.state().students[1].id;

    store.remove_student(middle);

    let names: Vec<&str> = store.state().students.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);
    assert!(store.rendered_letter().contains("B. Về bạn C:"));
}

#[test]
fn test_store_allows_removing_last_student() {
    let mut store = LetterStore::default();
    let only = store.state().students[0].id;

    assert!(!store.can_remove(only));
    store.remove_student(only);

    assert!(store.state().students.is_empty());
}

#[test]
fn test_update_student_touches_only_target() {
    let mut store = LetterStore::new(letter_with(vec![full_student(), full_student()]));
    let before = store.snapshot();
    let target = before.students[1].id;

    store.update_student(target, StudentUpdate::field(StudentField::Praise, "chăm chỉ"));

    let after = store.state();
    assert_eq!(after.students[0], before.students[0]);
    assert_eq!(after.students[1].praise, "chăm chỉ");
    for field in StudentField::ALL {
        if field != StudentField::Praise {
            assert_eq!(after.students[1].get(field), before.students[1].get(field));
        }
    }
    assert_eq!(after.students[1].id, target);
    assert_eq!(after.recipient, before.recipient);
}

#[test]
fn test_update_student_merges_several_fields() {
    let mut store = LetterStore::new(letter_with(vec![named_student("Linh")]));
    let id = store.state().students[0].id;

    let update = StudentUpdate {
        next_payment_period: Some("1/3/26".to_string()),
        next_payment_amount: Some("3 triệu".to_string()),
        ..StudentUpdate::default()
    };
    store.update_student(id, update);

    let student = &store.state().students[0];
    assert_eq!(student.name, "Linh");
    assert_eq!(student.next_payment_period, "1/3/26");
    assert_eq!(student.next_payment_amount, "3 triệu");
}

#[test]
fn test_unknown_id_is_ignored() {
    let mut store = LetterStore::new(letter_with(vec![named_student("Linh")]));
    let before = store.snapshot();
    let stranger = StudentId::new();

    store.remove_student(stranger);
    store.update_student(stranger, StudentUpdate::field(StudentField::Name, "X"));

    assert_eq!(*store.state(), *before);
}

#[test]
fn test_commands_match_named_operations() {
    let mut store = LetterStore::default();
    let id = store.state().students[0].id;

    assert_eq!(store.apply(StoreCommand::UpdateField(LetterField::Subject, "Update".to_string())), None);
    assert_eq!(
        store.apply(StoreCommand::UpdateStudent(id, StudentUpdate::field(StudentField::Name, "Linh"))),
        None
    );
    let added = store.apply(StoreCommand::AddStudent).expect("add yields an id");

    assert_eq!(store.state().subject, "Update");
    assert_eq!(store.state().students[0].name, "Linh");
    assert_eq!(store.position(added), Some(1));

    store.apply(StoreCommand::RemoveStudent(added));
    assert_eq!(store.state().students.len(), 1);
}

#[test]
fn test_old_snapshot_survives_edits() {
    let mut store = LetterStore::new(letter_with(vec![named_student("Linh")]));
    let id = store.state().students[0].id;
    let before = store.snapshot();
    let letter_before = render(&before);

    store.update_student(id, StudentUpdate::field(StudentField::Strengths, "speaking"));
    store.add_student();
    store.update_field(LetterField::Summary, "done");

    assert_eq!(before.students.len(), 1);
    assert_eq!(before.students[0].strengths, "");
    assert_eq!(render(&before), letter_before);
    assert_ne!(store.rendered_letter(), letter_before);
}
