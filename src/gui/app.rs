use std::path::PathBuf;

use iced::{
    Element, Length, Task,
    widget::{Column, button, column, container, row, scrollable, text, text_editor},
};
use rfd::AsyncFileDialog;
use tracing::{info, warn};

use crate::{
    export::{export_file_name, file_context, today, write_letter},
    gui::{
        Message,
        widgets::{labeled_editor, labeled_input, student_card},
    },
    models::{LetterField, LetterState},
    store::{LetterStore, StoreCommand},
};

/// Letter fields edited as multi-line text.
const MULTILINE_FIELDS: [LetterField; 4] = [
    LetterField::Summary,
    LetterField::Conditional,
    LetterField::Wishing,
    LetterField::Signature,
];

pub struct LetterApp {
    store: LetterStore,
    editors: Vec<(LetterField, text_editor::Content)>,
    file_context: Option<String>,
    show_preview: bool,
    status: Option<String>,
}

impl LetterApp {
    pub fn new(initial: LetterState, file_context: Option<String>) -> Self {
        let editors = MULTILINE_FIELDS
            .into_iter()
            .map(|field| (field, text_editor::Content::with_text(initial.get(field))))
            .collect();
        Self {
            store: LetterStore::new(initial),
            editors,
            file_context,
            show_preview: false,
            status: None,
        }
    }

    pub fn title(&self) -> String {
        "IELTS Letter Master".to_string()
    }

    pub fn store(&self) -> &LetterStore {
        &self.store
    }

    /// Suggested name for the saved `.txt`: the configured context, else the recipient.
    pub fn export_name(&self) -> anyhow::Result<String> {
        let context = match &self.file_context {
            Some(context) => context.clone(),
            None => file_context(&self.store.state().recipient),
        };
        export_file_name(&context, today())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // The first card has no delete button; ignore stray removals of it too.
            Message::RemoveStudent(id) if !self.store.can_remove(id) => Task::none(),
            Message::Edited(field, action) => {
                let value = self
                    .editors
                    .iter_mut()
                    .find(|(editor_field, _)| *editor_field == field)
                    .and_then(|(_, content)| {
                        let is_edit = action.is_edit();
                        content.perform(action);
                        is_edit.then(|| content.text())
                    });
                if let Some(value) = value {
                    self.store.apply(StoreCommand::UpdateField(field, value));
                }
                Task::none()
            }
            Message::TogglePreview => {
                self.show_preview = !self.show_preview;
                Task::none()
            }
            Message::CopyLetter => {
                self.status = Some(
                    "Đã sao chép nội dung thư vào bộ nhớ tạm! Bạn có thể dán vào Zalo ngay bây giờ."
                        .to_string(),
                );
                iced::clipboard::write(self.store.rendered_letter())
            }
            Message::SaveLetter => match self.export_name() {
                Ok(file_name) => Task::perform(
                    save_letter(file_name, self.store.rendered_letter()),
                    Message::Saved,
                ),
                Err(e) => {
                    self.status = Some(e.to_string());
                    Task::none()
                }
            },
            Message::Saved(result) => {
                match result {
                    Ok(Some(path)) => {
                        self.status = Some(format!("Đã lưu {}", path.display()));
                    }
                    Ok(None) => {}
                    Err(e) => {
                        warn!("Saving letter failed: {}", e);
                        self.status = Some(e);
                    }
                }
                Task::none()
            }
            other => {
                if let Some(command) = other.command() {
                    self.store.apply(command);
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let state = self.store.state();

        let general = column![
            text("Thông tin chung").size(24),
            labeled_input(LetterField::Recipient.label(), &state.recipient, |v| {
                Message::FieldChanged(LetterField::Recipient, v)
            }),
            labeled_input(LetterField::Subject.label(), &state.subject, |v| {
                Message::FieldChanged(LetterField::Subject, v)
            }),
        ]
        .spacing(12);

        let mut students = Column::new().spacing(20);
        for (index, student) in state.students.iter().enumerate() {
            students = students.push(student_card(
                index,
                student,
                self.store.can_remove(student.id),
            ));
        }
        students = students.push(
            button("Thêm học sinh/nhóm mới")
                .on_press(Message::AddStudent)
                .width(Length::Fill),
        );

        let mut closing = column![text("Kết luận & Ký tên").size(24)].spacing(12);
        for (field, content) in &self.editors {
            closing = closing.push(labeled_editor(*field, content));
        }

        let actions = row![
            button(if self.show_preview { "Đóng bản thảo" } else { "Xuất thư gửi Zalo" })
                .on_press(Message::TogglePreview),
            button("Copy để gửi Zalo").on_press(Message::CopyLetter),
            button("Tải File .txt").on_press(Message::SaveLetter),
        ]
        .spacing(16);

        let mut content = column![general, students, closing, actions]
            .spacing(32)
            .padding(24);
        if self.show_preview {
            content = content.push(
                container(text(self.store.rendered_letter()))
                    .padding(16)
                    .width(Length::Fill),
            );
        }
        if let Some(status) = &self.status {
            content = content.push(text(status.as_str()));
        }

        scrollable(content).into()
    }
}

async fn save_letter(file_name: String, letter: String) -> Result<Option<PathBuf>, String> {
    let Some(handle) = AsyncFileDialog::new()
        .set_title("Lưu thư")
        .set_file_name(&file_name)
        .add_filter("Text", &["txt"])
        .save_file()
        .await
    else {
        return Ok(None);
    };
    let chosen = handle.path().to_path_buf();
    let dir = chosen
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    let name = chosen
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or(file_name);
    let path = write_letter(dir, &name, &letter).map_err(|e| format!("{:#}", e))?;
    info!(path = ?path, "letter saved from form");
    Ok(Some(path))
}
