pub mod config;
pub mod draft;
pub mod export;
pub mod models;
pub mod render;
pub mod store;

pub use models::{LetterField, LetterState, StudentField, StudentId, StudentRecord, StudentUpdate};
pub use render::{render, section_letter};
pub use store::{LetterStore, StoreCommand};

#[cfg(feature = "gui")]
pub mod gui;
