use std::fmt::Write;

use crate::models::{LetterState, StudentRecord};

/// Substituted in the section header when the student name is empty.
pub const NAME_PLACEHOLDER: &str = "[Tên học sinh]";

/// Substituted for an empty half of the next-payment line.
pub const MISSING_PAYMENT_PART: &str = "...";

/// Section letter for the student at `index`: A..Z, then AA, AB, .. like spreadsheet columns.
pub fn section_letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    letters.into_iter().map(char::from).collect()
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

fn labeled(out: &mut String, label: &str, value: &str) {
    if !value.is_empty() {
        let _ = writeln!(out, "- {}: {}", label, value);
    }
}

fn render_student(out: &mut String, index: usize, student: &StudentRecord) {
    let _ = writeln!(
        out,
        "{}. Về bạn {}:",
        section_letter(index),
        or_fallback(&student.name, NAME_PLACEHOLDER)
    );
    labeled(out, "Điểm mạnh", &student.strengths);
    labeled(out, "Điểm cần khắc phục", &student.improvements);
    labeled(out, "Khen ngợi", &student.praise);
    labeled(out, "Đã đóng tiền học đến ngày", &student.paid_until);
    if !student.next_payment_period.is_empty() || !student.next_payment_amount.is_empty() {
        let _ = writeln!(
            out,
            "- Cần đóng từ ngày: {} với số tiền là {}",
            or_fallback(&student.next_payment_period, MISSING_PAYMENT_PART),
            or_fallback(&student.next_payment_amount, MISSING_PAYMENT_PART)
        );
    }
    labeled(out, "Chi tiết các buổi học", &student.session_details);
    labeled(out, "Ghi chú", &student.note);
    labeled(out, "Cam kết", &student.commitment);
    labeled(out, "Chiến lược sắp tới", &student.strategy);
    out.push('\n');
}

fn paragraph(out: &mut String, label: &str, value: &str) {
    if !value.is_empty() {
        let _ = write!(out, "{}: {}\n\n", label, value);
    }
}

/// Render the letter text for `state`.
///
/// Pure: the output depends only on `state`. Optional fields that are empty
/// suppress their line; recipient and signature are always written.
pub fn render(state: &LetterState) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = write!(out, "Kính gửi {},\n\n", state.recipient);
    let _ = write!(out, "Thư này là: {}\n\n", state.subject);

    for (index, student) in state.students.iter().enumerate() {
        render_student(&mut out, index, student);
    }

    paragraph(&mut out, "Tóm lại", &state.summary);
    paragraph(&mut out, "Nếu", &state.conditional);
    paragraph(&mut out, "Chúc", &state.wishing);

    let _ = write!(out, "Ký tên:\n{}", state.signature);
    out
}
