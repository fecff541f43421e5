use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Placeholder used when a record has no class field
pub const DEFAULT_CLASSE: &str = "Non spécifiée";

/// A student record exactly as it sits in the roster file.
///
/// The JSON value is kept as-is, so a record nobody edits is written back
/// byte-for-byte equivalent: numeric ids stay numeric, missing fields stay
/// missing, unknown keys and even non-object entries survive. Fields are
/// projected to text only when they are compared or displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Student(Value);

impl Student {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        classe: impl Into<String>,
    ) -> Self {
        let mut record = Map::new();
        record.insert("id".to_string(), Value::String(id.into()));
        record.insert("name".to_string(), Value::String(name.into()));
        record.insert("email".to_string(), Value::String(email.into()));
        record.insert("classe".to_string(), Value::String(classe.into()));
        Student(Value::Object(record))
    }

    /// Text form of `key`, or `None` if the entry is not an object, the key
    /// is absent, or it holds `null`
    pub fn field(&self, key: &str) -> Option<String> {
        match self.0.as_object()?.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn id(&self) -> Option<String> {
        self.field("id")
    }

    pub fn email(&self) -> Option<String> {
        self.field("email")
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.id().as_deref() == Some(id)
    }

    pub fn has_email(&self, email: &str) -> bool {
        self.email().as_deref() == Some(email)
    }

    /// Overwrite a single key, keeping its position if it already exists
    fn set(&mut self, key: &str, value: String) {
        if let Value::Object(record) = &mut self.0 {
            record.insert(key.to_string(), Value::String(value));
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for Student {
    fn from(value: Value) -> Self {
        Student(value)
    }
}

/// Registration form fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentForm {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub classe: Option<String>,
}

impl StudentForm {
    pub fn into_student(self) -> Student {
        Student::new(
            self.id,
            self.name,
            self.email,
            self.classe.unwrap_or_else(|| DEFAULT_CLASSE.to_string()),
        )
    }
}

/// Edit form fields; the identifier comes from the path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentUpdateForm {
    pub name: String,
    pub email: String,
    pub classe: Option<String>,
}

impl StudentUpdateForm {
    pub fn apply_to(self, student: &mut Student) {
        student.set("name", self.name);
        student.set("email", self.email);
        student.set(
            "classe",
            self.classe.unwrap_or_else(|| DEFAULT_CLASSE.to_string()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_form_without_classe_gets_placeholder() {
        let form = StudentForm {
            id: "1".to_string(),
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            classe: None,
        };

        let student = form.into_student();
        assert_eq!(student.field("classe").as_deref(), Some(DEFAULT_CLASSE));
    }

    #[test]
    fn test_numeric_id_matches_as_text() {
        let student: Student =
            serde_json::from_str(r#"{"id": 12, "name": "Bob", "email": "b@x.com"}"#).unwrap();

        assert!(student.has_id("12"));
        assert_eq!(student.field("classe"), None);
    }

    #[test]
    fn test_missing_and_null_fields() {
        let student: Student = serde_json::from_str(r#"{"nom": "Chloé", "email": null}"#).unwrap();

        assert_eq!(student.id(), None);
        assert_eq!(student.email(), None);
        assert!(!student.has_id(""));
    }

    #[test]
    fn test_nested_field_is_kept() {
        let raw = json!({"id": "1", "name": {"first": "Alice"}, "email": "a@x.com"});
        let student: Student = serde_json::from_value(raw.clone()).unwrap();

        assert!(student.has_id("1"));
        assert_eq!(student.field("name").as_deref(), Some(r#"{"first":"Alice"}"#));
        assert_eq!(serde_json::to_value(&student).unwrap(), raw);
    }

    #[test]
    fn test_non_object_entry_never_matches() {
        let student = Student::from(json!("just a string"));

        assert_eq!(student.id(), None);
        assert!(!student.has_email("just a string"));
    }

    #[test]
    fn test_untouched_record_serializes_unchanged() {
        let raw = r#"{"id":1,"name":"Alice","email":"a@x.com","phone":"555"}"#;
        let student: Student = serde_json::from_str(raw).unwrap();

        assert_eq!(serde_json::to_string(&student).unwrap(), raw);
    }

    #[test]
    fn test_update_form_overwrites_only_edited_keys() {
        let mut student: Student =
            serde_json::from_value(json!({"id": 1, "name": "Alice", "email": "a@x.com", "phone": "555"}))
                .unwrap();

        StudentUpdateForm {
            name: "Alicia".to_string(),
            email: "alicia@x.com".to_string(),
            classe: Some("C".to_string()),
        }
        .apply_to(&mut student);

        assert_eq!(
            serde_json::to_string(&student).unwrap(),
            r#"{"id":1,"name":"Alicia","email":"alicia@x.com","phone":"555","classe":"C"}"#
        );
    }
}
