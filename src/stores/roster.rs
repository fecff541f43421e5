// Roster mutations on an in-memory copy; callers persist the result

use crate::core::error::StudentError;
use crate::models::student::{Student, StudentUpdateForm};

pub fn find<'a>(students: &'a [Student], id: &str) -> Option<&'a Student> {
    students.iter().find(|student| student.has_id(id))
}

/// True if another record (not `except_id`) already uses `email`
pub fn email_in_use(students: &[Student], email: &str, except_id: Option<&str>) -> bool {
    students
        .iter()
        .filter(|student| except_id.map_or(true, |id| !student.has_id(id)))
        .any(|student| student.has_email(email))
}

/// Append a new record. The identifier is checked before the email.
pub fn register(students: &mut Vec<Student>, student: Student) -> Result<(), StudentError> {
    let id = student.id().unwrap_or_default();
    if id.trim().is_empty() {
        return Err(StudentError::MissingId);
    }

    if find(students, &id).is_some() {
        return Err(StudentError::DuplicateId(id));
    }

    let email = student.email().unwrap_or_default();
    if email_in_use(students, &email, None) {
        return Err(StudentError::DuplicateEmail(email));
    }

    students.push(student);
    Ok(())
}

/// Overwrite name, email and classe of the record with `id`. Every other key
/// of that record, and every other record, is left as loaded.
pub fn update(
    students: &mut [Student],
    id: &str,
    form: StudentUpdateForm,
) -> Result<(), StudentError> {
    let Some(index) = students.iter().position(|student| student.has_id(id)) else {
        return Err(StudentError::NotFound(id.to_string()));
    };

    if email_in_use(students, &form.email, Some(id)) {
        return Err(StudentError::DuplicateEmail(form.email));
    }

    form.apply_to(&mut students[index]);
    Ok(())
}

/// Remove every record with `id`; returns whether the roster shrank
pub fn remove(students: &mut Vec<Student>, id: &str) -> bool {
    let before = students.len();
    students.retain(|student| !student.has_id(id));
    students.len() < before
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alice() -> Student {
        Student::new("1", "Alice", "a@x.com", "A")
    }

    fn bob() -> Student {
        Student::new("2", "Bob", "b@x.com", "B")
    }

    fn update_form(name: &str, email: &str, classe: &str) -> StudentUpdateForm {
        StudentUpdateForm {
            name: name.to_string(),
            email: email.to_string(),
            classe: Some(classe.to_string()),
        }
    }

    #[test]
    fn test_register_fresh_record() {
        let mut students = vec![alice()];

        register(&mut students, bob()).unwrap();

        assert_eq!(students, vec![alice(), bob()]);
    }

    #[test]
    fn test_register_duplicate_id_rejected() {
        let mut students = vec![alice()];

        let err = register(&mut students, Student::new("1", "Other", "c@x.com", "C")).unwrap_err();

        assert_eq!(err, StudentError::DuplicateId("1".to_string()));
        assert_eq!(students, vec![alice()]);
    }

    #[test]
    fn test_register_duplicate_email_rejected() {
        let mut students = vec![alice()];

        let err = register(&mut students, Student::new("9", "Other", "a@x.com", "C")).unwrap_err();

        assert_eq!(err, StudentError::DuplicateEmail("a@x.com".to_string()));
        assert_eq!(students.len(), 1);
    }

    #[test]
    fn test_register_id_checked_before_email() {
        let mut students = vec![alice()];

        let err = register(&mut students, alice()).unwrap_err();

        assert!(matches!(err, StudentError::DuplicateId(_)));
    }

    #[test]
    fn test_update_keeps_own_email() {
        let mut students = vec![alice(), bob()];

        update(&mut students, "1", update_form("Alicia", "a@x.com", "C")).unwrap();

        assert_eq!(students[0], Student::new("1", "Alicia", "a@x.com", "C"));
        assert_eq!(students[1], bob());
    }

    #[test]
    fn test_update_to_fresh_email() {
        let mut students = vec![alice(), bob()];

        update(&mut students, "2", update_form("Robert", "robert@x.com", "B")).unwrap();

        assert_eq!(students[1].email().as_deref(), Some("robert@x.com"));
        assert_eq!(students[1].field("name").as_deref(), Some("Robert"));
    }

    #[test]
    fn test_update_to_taken_email_rejected() {
        let mut students = vec![alice(), bob()];

        let err = update(&mut students, "2", update_form("Bob", "a@x.com", "B")).unwrap_err();

        assert_eq!(err, StudentError::DuplicateEmail("a@x.com".to_string()));
        assert_eq!(students, vec![alice(), bob()]);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut students = vec![alice()];

        let err = update(&mut students, "404", update_form("X", "x@x.com", "X")).unwrap_err();

        assert_eq!(err, StudentError::NotFound("404".to_string()));
    }

    #[test]
    fn test_remove_existing() {
        let mut students = vec![alice(), bob()];

        assert!(remove(&mut students, "1"));
        assert_eq!(students, vec![bob()]);
    }

    #[test]
    fn test_remove_unknown_leaves_roster() {
        let mut students = vec![alice(), bob()];

        assert!(!remove(&mut students, "3"));
        assert_eq!(students.len(), 2);
    }

    #[test]
    fn test_email_in_use_excludes_record() {
        let students = vec![alice(), bob()];

        assert!(email_in_use(&students, "a@x.com", None));
        assert!(!email_in_use(&students, "a@x.com", Some("1")));
        assert!(email_in_use(&students, "a@x.com", Some("2")));
    }

    #[test]
    fn test_register_blank_id_rejected() {
        let mut students = vec![alice()];

        let err = register(&mut students, Student::new("", "Nobody", "n@x.com", "N")).unwrap_err();
        assert_eq!(err, StudentError::MissingId);

        let err = register(&mut students, Student::new("  ", "Nobody", "n@x.com", "N")).unwrap_err();
        assert_eq!(err, StudentError::MissingId);

        assert_eq!(students, vec![alice()]);
    }

    #[test]
    fn test_numeric_id_in_file_matches_form_id() {
        let mut students = vec![Student::from(json!({"id": 7, "name": "Gus", "email": "g@x.com"}))];

        assert!(find(&students, "7").is_some());
        assert!(matches!(
            register(&mut students, Student::new("7", "Other", "o@x.com", "O")),
            Err(StudentError::DuplicateId(_))
        ));
        assert!(remove(&mut students, "7"));
    }

    #[test]
    fn test_odd_entries_are_skipped_and_kept() {
        let odd = Student::from(json!(["not", "a", "record"]));
        let nested = Student::from(json!({"id": "1", "name": {"first": "Alice"}, "email": "a@x.com"}));
        let mut students = vec![odd.clone(), nested.clone()];

        register(&mut students, bob()).unwrap();
        update(&mut students, "2", update_form("Robert", "r@x.com", "B")).unwrap();
        assert!(!remove(&mut students, "404"));

        assert_eq!(students[0], odd);
        assert_eq!(students[1], nested);
        assert_eq!(students.len(), 3);
    }

    #[test]
    fn test_update_leaves_other_keys() {
        let mut students = vec![Student::from(
            json!({"id": 1, "name": "Alice", "email": "a@x.com", "phone": "555"}),
        )];

        update(&mut students, "1", update_form("Alicia", "a@x.com", "A")).unwrap();

        assert_eq!(
            students[0].as_value(),
            &json!({"id": 1, "name": "Alicia", "email": "a@x.com", "phone": "555", "classe": "A"})
        );
    }
}
