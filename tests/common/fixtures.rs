use progress_letter::{LetterState, StudentRecord};

/// A student with a fresh id, the given name, and every other field empty.
pub fn named_student(name: &str) -> StudentRecord {
    StudentRecord {
        name: name.to_string(),
        ..StudentRecord::empty()
    }
}

/// Letter with the given students and only recipient, subject and signature filled in.
pub fn letter_with(students: Vec<StudentRecord>) -> LetterState {
    LetterState {
        recipient: "Teacher".to_string(),
        subject: "Update".to_string(),
        students,
        summary: String::new(),
        conditional: String::new(),
        wishing: String::new(),
        signature: "Mr. T".to_string(),
    }
}

/// Student with every text field set to `<field>-value`.
pub fn full_student() -> StudentRecord {
    StudentRecord {
        name: "Linh".to_string(),
        strengths: "strengths-value".to_string(),
        improvements: "improvements-value".to_string(),
        praise: "praise-value".to_string(),
        paid_until: "paid-until-value".to_string(),
        next_payment_period: "period-value".to_string(),
        next_payment_amount: "amount-value".to_string(),
        session_details: "sessions-value".to_string(),
        note: "note-value".to_string(),
        commitment: "commitment-value".to_string(),
        strategy: "strategy-value".to_string(),
        ..StudentRecord::empty()
    }
}
