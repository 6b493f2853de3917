use std::path::PathBuf;

use iced::widget::text_editor;

use crate::models::{LetterField, StudentField, StudentId, StudentUpdate};
use crate::store::StoreCommand;

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(LetterField, String),
    /// Edit in one of the multi-line letter fields.
    Edited(LetterField, text_editor::Action),
    StudentChanged(StudentId, StudentField, String),
    AddStudent,
    RemoveStudent(StudentId),
    TogglePreview,
    CopyLetter,
    SaveLetter,
    /// `Ok(None)` when the save dialog was cancelled.
    Saved(Result<Option<PathBuf>, String>),
}

impl Message {
    /// The store command this form event stands for, if any.
    pub fn command(&self) -> Option<StoreCommand> {
        match self {
            Message::FieldChanged(field, value) => {
                Some(StoreCommand::UpdateField(*field, value.clone()))
            }
            Message::StudentChanged(id, field, value) => Some(StoreCommand::UpdateStudent(
                *id,
                StudentUpdate::field(*field, value.clone()),
            )),
            Message::AddStudent => Some(StoreCommand::AddStudent),
            Message::RemoveStudent(id) => Some(StoreCommand::RemoveStudent(*id)),
            _ => None,
        }
    }
}
