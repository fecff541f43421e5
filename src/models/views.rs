use crate::models::student::{Student, DEFAULT_CLASSE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

/// One-shot message shown by the next rendered view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Landing page and the two static forms
#[derive(Debug, Serialize, Deserialize)]
pub struct PageView {
    pub page: String,
    pub authenticated: bool,
    pub flash: Option<Flash>,
}

/// Display form of one record: every field as text, absent ones empty and
/// a missing class shown as the placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub classe: String,
}

impl StudentRow {
    /// `None` for entries that are not student objects
    pub fn from_student(student: &Student) -> Option<Self> {
        student.as_value().as_object()?;

        Some(Self {
            id: student.id().unwrap_or_default(),
            name: student.field("name").unwrap_or_default(),
            email: student.email().unwrap_or_default(),
            classe: student
                .field("classe")
                .unwrap_or_else(|| DEFAULT_CLASSE.to_string()),
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StudentListView {
    pub students: Vec<StudentRow>,
    pub flash: Option<Flash>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StudentEditView {
    pub student: StudentRow,
    pub flash: Option<Flash>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_projects_scalars_and_placeholder() {
        let student = Student::from(json!({"id": 3, "name": "Chloé", "email": null}));

        assert_eq!(
            StudentRow::from_student(&student),
            Some(StudentRow {
                id: "3".to_string(),
                name: "Chloé".to_string(),
                email: String::new(),
                classe: DEFAULT_CLASSE.to_string(),
            })
        );
    }

    #[test]
    fn test_row_skips_non_objects() {
        assert_eq!(StudentRow::from_student(&Student::from(json!(42))), None);
    }
}
