use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a student entry. Assigned once at creation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(Uuid);

impl StudentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StudentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for StudentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// One student (or student group) section of the letter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: StudentId,
    pub name: String,
    pub strengths: String,
    pub improvements: String,
    pub praise: String,
    pub paid_until: String,
    pub next_payment_period: String,
    pub next_payment_amount: String,
    pub session_details: String,
    pub note: String,
    pub commitment: String,
    pub strategy: String,
}

impl StudentRecord {
    /// A record with a fresh id and every text field empty.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, field: StudentField) -> &str {
        match field {
            StudentField::Name => &self.name,
            StudentField::Strengths => &self.strengths,
            StudentField::Improvements => &self.improvements,
            StudentField::Praise => &self.praise,
            StudentField::PaidUntil => &self.paid_until,
            StudentField::NextPaymentPeriod => &self.next_payment_period,
            StudentField::NextPaymentAmount => &self.next_payment_amount,
            StudentField::SessionDetails => &self.session_details,
            StudentField::Note => &self.note,
            StudentField::Commitment => &self.commitment,
            StudentField::Strategy => &self.strategy,
        }
    }

    fn slot(&mut self, field: StudentField) -> &mut String {
        match field {
            StudentField::Name => &mut self.name,
            StudentField::Strengths => &mut self.strengths,
            StudentField::Improvements => &mut self.improvements,
            StudentField::Praise => &mut self.praise,
            StudentField::PaidUntil => &mut self.paid_until,
            StudentField::NextPaymentPeriod => &mut self.next_payment_period,
            StudentField::NextPaymentAmount => &mut self.next_payment_amount,
            StudentField::SessionDetails => &mut self.session_details,
            StudentField::Note => &mut self.note,
            StudentField::Commitment => &mut self.commitment,
            StudentField::Strategy => &mut self.strategy,
        }
    }

    /// Merge the fields present in `update`; absent fields are left as they are.
    pub fn apply(&mut self, update: &StudentUpdate) {
        for field in StudentField::ALL {
            if let Some(value) = update.get(field) {
                *self.slot(field) = value.to_string();
            }
        }
    }
}

/// Editable text fields of a [`StudentRecord`]. The id is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudentField {
    Name,
    Strengths,
    Improvements,
    Praise,
    PaidUntil,
    NextPaymentPeriod,
    NextPaymentAmount,
    SessionDetails,
    Note,
    Commitment,
    Strategy,
}

impl StudentField {
    /// Form order.
    pub const ALL: [StudentField; 11] = [
        StudentField::Name,
        StudentField::Strengths,
        StudentField::Improvements,
        StudentField::Praise,
        StudentField::PaidUntil,
        StudentField::NextPaymentPeriod,
        StudentField::NextPaymentAmount,
        StudentField::SessionDetails,
        StudentField::Note,
        StudentField::Commitment,
        StudentField::Strategy,
    ];

    pub fn key(self) -> &'static str {
        match self {
            StudentField::Name => "name",
            StudentField::Strengths => "strengths",
            StudentField::Improvements => "improvements",
            StudentField::Praise => "praise",
            StudentField::PaidUntil => "paid_until",
            StudentField::NextPaymentPeriod => "next_payment_period",
            StudentField::NextPaymentAmount => "next_payment_amount",
            StudentField::SessionDetails => "session_details",
            StudentField::Note => "note",
            StudentField::Commitment => "commitment",
            StudentField::Strategy => "strategy",
        }
    }

    /// Label shown next to the input in the form.
    pub fn label(self) -> &'static str {
        match self {
            StudentField::Name => "Học sinh nào?",
            StudentField::Strengths => "Điểm mạnh là gì?",
            StudentField::Improvements => "Điểm cần khắc phục?",
            StudentField::Praise => "Khen ngợi",
            StudentField::PaidUntil => "Đã đóng tiền học đến ngày",
            StudentField::NextPaymentPeriod => "Cần đóng từ ngày",
            StudentField::NextPaymentAmount => "Số tiền cần đóng",
            StudentField::SessionDetails => "Chi tiết các buổi học",
            StudentField::Note => "Ghi chú",
            StudentField::Commitment => "Cam kết",
            StudentField::Strategy => "Chiến lược sắp tới",
        }
    }
}

impl FromStr for StudentField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        StudentField::ALL
            .into_iter()
            .find(|field| field.key().replace('_', "") == normalized)
            .ok_or_else(|| anyhow::anyhow!("Unknown student field: {}", s))
    }
}

/// Partial update of a [`StudentRecord`]. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub strengths: Option<String>,
    pub improvements: Option<String>,
    pub praise: Option<String>,
    pub paid_until: Option<String>,
    pub next_payment_period: Option<String>,
    pub next_payment_amount: Option<String>,
    pub session_details: Option<String>,
    pub note: Option<String>,
    pub commitment: Option<String>,
    pub strategy: Option<String>,
}

impl StudentUpdate {
    /// Update touching a single field.
    pub fn field(field: StudentField, value: impl Into<String>) -> Self {
        let mut update = Self::default();
        update.set(field, value);
        update
    }

    pub fn set(&mut self, field: StudentField, value: impl Into<String>) {
        *self.slot(field) = Some(value.into());
    }

    pub fn get(&self, field: StudentField) -> Option<&str> {
        match field {
            StudentField::Name => self.name.as_deref(),
            StudentField::Strengths => self.strengths.as_deref(),
            StudentField::Improvements => self.improvements.as_deref(),
            StudentField::Praise => self.praise.as_deref(),
            StudentField::PaidUntil => self.paid_until.as_deref(),
            StudentField::NextPaymentPeriod => self.next_payment_period.as_deref(),
            StudentField::NextPaymentAmount => self.next_payment_amount.as_deref(),
            StudentField::SessionDetails => self.session_details.as_deref(),
            StudentField::Note => self.note.as_deref(),
            StudentField::Commitment => self.commitment.as_deref(),
            StudentField::Strategy => self.strategy.as_deref(),
        }
    }

    fn slot(&mut self, field: StudentField) -> &mut Option<String> {
        match field {
            StudentField::Name => &mut self.name,
            StudentField::Strengths => &mut self.strengths,
            StudentField::Improvements => &mut self.improvements,
            StudentField::Praise => &mut self.praise,
            StudentField::PaidUntil => &mut self.paid_until,
            StudentField::NextPaymentPeriod => &mut self.next_payment_period,
            StudentField::NextPaymentAmount => &mut self.next_payment_amount,
            StudentField::SessionDetails => &mut self.session_details,
            StudentField::Note => &mut self.note,
            StudentField::Commitment => &mut self.commitment,
            StudentField::Strategy => &mut self.strategy,
        }
    }

    pub fn is_empty(&self) -> bool {
        StudentField::ALL.into_iter().all(|f| self.get(f).is_none())
    }
}

/// Letter-level scalar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterField {
    Recipient,
    Subject,
    Summary,
    Conditional,
    Wishing,
    Signature,
}

impl LetterField {
    pub const ALL: [LetterField; 6] = [
        LetterField::Recipient,
        LetterField::Subject,
        LetterField::Summary,
        LetterField::Conditional,
        LetterField::Wishing,
        LetterField::Signature,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LetterField::Recipient => "Thư này gửi ai?",
            LetterField::Subject => "Thư này về cái gì?",
            LetterField::Summary => "Tóm lại (Tiền học, STK ngân hàng...)",
            LetterField::Conditional => "Nếu (Hạn chót đóng học phí...)",
            LetterField::Wishing => "Chúc (Mục tiêu tương lai...)",
            LetterField::Signature => "Ký tên",
        }
    }
}

/// The whole document under composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LetterState {
    pub recipient: String,
    pub subject: String,
    pub students: Vec<StudentRecord>,
    pub summary: String,
    pub conditional: String,
    pub wishing: String,
    pub signature: String,
}

impl Default for LetterState {
    fn default() -> Self {
        Self {
            recipient: String::new(),
            subject: String::new(),
            students: vec![StudentRecord::empty()],
            summary: String::new(),
            conditional: String::new(),
            wishing: String::new(),
            signature: String::new(),
        }
    }
}

impl LetterState {
    /// Start-up state of the form, pre-filled with the tutor's usual wording.
    pub fn seeded() -> Self {
        Self {
            recipient: "Cô Tuyết Anna".to_string(),
            subject: "Cập nhật tiến độ học IELTS của học viên Tố Uyên, Tạ Khánh, Mai Hương và Thanh Sơn".to_string(),
            students: vec![StudentRecord::empty()],
            summary: "Vậy em chuyển cho anh 13.5 triệu vnd vào tài khoản BIDV 1690000157 Lê Hồng Trường tiền học của bạn Tố Uyên từ 2/1/26-1/2/26, 20 buổi của bạn Tạ Khánh, Mai Hương từ 5/12/25 đến 8/1/26, và 20 buổi của bạn Thanh Sơn từ 27/10/25 - 24/1/26".to_string(),
            conditional: "Nếu trước ngày 10/2/2026 mà anh chưa nhận được tiền của bạn nào thì anh sẽ ngưng dạy bạn ấy trong một thời gian đến khi nhận được tiền học.".to_string(),
            wishing: "chúc bạn Tố Uyên đạt 5.5, bạn Tạ Khánh đạt 5.0 và bạn Mai Hương đạt 5.5, bạn Thanh Sơn đạt 5.5 theo mục tiêu và vào được trường đại học mong ước của mình.".to_string(),
            signature: "Thầy Trường\nGiáo viên IELTS".to_string(),
        }
    }

    pub fn get(&self, field: LetterField) -> &str {
        match field {
            LetterField::Recipient => &self.recipient,
            LetterField::Subject => &self.subject,
            LetterField::Summary => &self.summary,
            LetterField::Conditional => &self.conditional,
            LetterField::Wishing => &self.wishing,
            LetterField::Signature => &self.signature,
        }
    }

    pub(crate) fn slot(&mut self, field: LetterField) -> &mut String {
        match field {
            LetterField::Recipient => &mut self.recipient,
            LetterField::Subject => &mut self.subject,
            LetterField::Summary => &mut self.summary,
            LetterField::Conditional => &mut self.conditional,
            LetterField::Wishing => &mut self.wishing,
            LetterField::Signature => &mut self.signature,
        }
    }

    pub fn student(&self, id: StudentId) -> Option<&StudentRecord> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn position(&self, id: StudentId) -> Option<usize> {
        self.students.iter().position(|s| s.id == id)
    }

    /// Give every student whose id already appeared earlier in the list a fresh id.
    /// Returns the `(old, new)` pairs that were replaced, in list order.
    pub fn ensure_unique_ids(&mut self) -> Vec<(StudentId, StudentId)> {
        let mut seen = HashSet::new();
        let mut replaced = Vec::new();
        for student in &mut self.students {
            if !seen.insert(student.id) {
                let fresh = StudentId::new();
                replaced.push((student.id, fresh));
                student.id = fresh;
                seen.insert(fresh);
            }
        }
        replaced
    }
}
