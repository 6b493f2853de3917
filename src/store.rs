use std::sync::Arc;

use tracing::{debug, warn};

use crate::models::{LetterField, LetterState, StudentId, StudentRecord, StudentUpdate};
use crate::render::render;

/// A single mutation of the form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCommand {
    UpdateField(LetterField, String),
    AddStudent,
    RemoveStudent(StudentId),
    UpdateStudent(StudentId, StudentUpdate),
}

/// Holds the current snapshot of the letter and funnels every change through [`StoreCommand`].
///
/// Snapshots handed out by [`LetterStore::snapshot`] are never modified afterwards:
/// a command that finds the current snapshot shared copies it before writing.
#[derive(Debug, Clone)]
pub struct LetterStore {
    state: Arc<LetterState>,
}

impl Default for LetterStore {
    fn default() -> Self {
        Self::new(LetterState::default())
    }
}

impl LetterStore {
    /// Wrap `state`, replacing any repeated student ids first.
    pub fn new(mut state: LetterState) -> Self {
        for (old, new) in state.ensure_unique_ids() {
            warn!(%old, %new, "repeated student id, assigned a fresh one");
        }
        Self {
            state: Arc::new(state),
        }
    }

    /// Store pre-filled with [`LetterState::seeded`].
    pub fn seeded() -> Self {
        Self::new(LetterState::seeded())
    }

    pub fn snapshot(&self) -> Arc<LetterState> {
        Arc::clone(&self.state)
    }

    pub fn state(&self) -> &LetterState {
        &self.state
    }

    /// Apply `command`. Returns the id of the created record for [`StoreCommand::AddStudent`].
    pub fn apply(&mut self, command: StoreCommand) -> Option<StudentId> {
        match command {
            StoreCommand::UpdateField(field, value) => {
                debug!(?field, len = value.len(), "update field");
                *Arc::make_mut(&mut self.state).slot(field) = value;
                None
            }
            StoreCommand::AddStudent => Some(self.push_student()),
            StoreCommand::RemoveStudent(id) => {
                match self.state.position(id) {
                    Some(index) => {
                        let state = Arc::make_mut(&mut self.state);
                        state.students.remove(index);
                        debug!(%id, index, count = state.students.len(), "remove student");
                    }
                    None => debug!(%id, "remove student ignored: unknown id"),
                }
                None
            }
            StoreCommand::UpdateStudent(id, update) => {
                match self.state.position(id) {
                    Some(index) => {
                        Arc::make_mut(&mut self.state).students[index].apply(&update);
                        debug!(%id, index, "update student");
                    }
                    None => debug!(%id, "update student ignored: unknown id"),
                }
                None
            }
        }
    }

    fn push_student(&mut self) -> StudentId {
        let record = StudentRecord::empty();
        let id = record.id;
        let state = Arc::make_mut(&mut self.state);
        state.students.push(record);
        debug!(%id, count = state.students.len(), "add student");
        id
    }

    pub fn update_field(&mut self, field: LetterField, value: impl Into<String>) {
        self.apply(StoreCommand::UpdateField(field, value.into()));
    }

    pub fn add_student(&mut self) -> StudentId {
        self.push_student()
    }

    /// Remove the record with `id`. Unknown ids are ignored. The store itself does not
    /// keep the first record alive; see [`LetterStore::can_remove`].
    pub fn remove_student(&mut self, id: StudentId) {
        self.apply(StoreCommand::RemoveStudent(id));
    }

    pub fn update_student(&mut self, id: StudentId, update: StudentUpdate) {
        self.apply(StoreCommand::UpdateStudent(id, update));
    }

    pub fn position(&self, id: StudentId) -> Option<usize> {
        self.state.position(id)
    }

    /// Whether the form offers a delete action for `id`: every record but the first.
    pub fn can_remove(&self, id: StudentId) -> bool {
        matches!(self.position(id), Some(index) if index > 0)
    }

    /// The letter text for the current snapshot.
    pub fn rendered_letter(&self) -> String {
        render(&self.state)
    }
}
