use iced::{
    Element, Length,
    widget::{button, column, container, row, text, text_editor, text_input},
};

use crate::{
    gui::Message,
    models::{LetterField, StudentField, StudentRecord},
    render::section_letter,
};

pub fn labeled_input<'a>(
    label: &'static str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    column![
        text(label).size(14),
        text_input(label, value).on_input(on_input).padding(8),
    ]
    .spacing(4)
    .into()
}

/// Multi-line input for a letter field; keeps line breaks such as the two-line signature.
pub fn labeled_editor<'a>(
    field: LetterField,
    content: &'a text_editor::Content,
) -> Element<'a, Message> {
    column![
        text(field.label()).size(14),
        text_editor(content)
            .placeholder(field.label())
            .on_action(move |action| Message::Edited(field, action))
            .height(Length::Fixed(96.0))
            .padding(8),
    ]
    .spacing(4)
    .into()
}

/// Form card for one student. The remove button is only offered when `removable`.
pub fn student_card<'a>(
    index: usize,
    student: &'a StudentRecord,
    removable: bool,
) -> Element<'a, Message> {
    let id = student.id;
    let mut header = row![
        text(format!("#{} ({})", index + 1, section_letter(index))).size(20),
        text("Thông tin học sinh").size(20).width(Length::Fill),
    ]
    .spacing(10);
    if removable {
        header = header.push(button("Xóa học sinh").on_press(Message::RemoveStudent(id)));
    }

    let mut fields = column![header].spacing(12);
    for field in StudentField::ALL {
        fields = fields.push(labeled_input(field.label(), student.get(field), move |value| {
            Message::StudentChanged(id, field, value)
        }));
    }

    container(fields).padding(16).width(Length::Fill).into()
}
