mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from progress_letter for tests
pub use progress_letter::{
    LetterField, LetterState, LetterStore, StoreCommand, StudentField, StudentId, StudentRecord,
    StudentUpdate, render,
};
