use crate::core::error::{AppError, StudentError};
use crate::core::state::AppState;
use crate::models::student::{StudentForm, StudentUpdateForm};
use crate::models::views::{Flash, StudentEditView, StudentListView, StudentRow};
use crate::security::flash::{set_flash, take_flash};
use crate::security::session::RequireAdmin;
use crate::stores::roster;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::SignedCookieJar;
use tracing::{info, instrument, warn};

fn redirect_with(jar: SignedCookieJar, flash: Flash, to: &str) -> Response {
    (set_flash(jar, flash), Redirect::to(to)).into_response()
}

/// List every student
///
/// GET /students
pub async fn list_students_handler(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Response {
    let students = state
        .store
        .load()
        .await
        .iter()
        .filter_map(StudentRow::from_student)
        .collect();
    let (jar, flash) = take_flash(jar);

    (jar, Json(StudentListView { students, flash })).into_response()
}

/// Register a new student
///
/// POST /register
///
/// Rejected without touching the file if the identifier is blank or either
/// the identifier or the email is already taken.
#[instrument(skip(state, jar, form), fields(student_id = %form.id))]
pub async fn register_handler(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<StudentForm>,
) -> Result<Response, AppError> {
    let mut students = state.store.load().await;
    let student = form.into_student();
    let email = student.email().unwrap_or_default();

    if let Err(e) = roster::register(&mut students, student) {
        warn!(error = %e, "Registration rejected");
        return Ok(redirect_with(jar, Flash::error(e.to_string()), "/register"));
    }

    state.store.save(&students).await?;

    info!(email = %email, count = students.len(), "Student registered");

    Ok(redirect_with(
        jar,
        Flash::success("Student registered successfully."),
        "/students",
    ))
}

/// Edit form for one student
///
/// GET /edit/{id}
pub async fn edit_student_handler(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    jar: SignedCookieJar,
) -> Response {
    let students = state.store.load().await;

    match roster::find(&students, &id).and_then(StudentRow::from_student) {
        Some(student) => {
            let (jar, flash) = take_flash(jar);
            (
                jar,
                Json(StudentEditView { student, flash }),
            )
                .into_response()
        }
        None => {
            warn!(student_id = %id, "Edit requested for unknown student");
            redirect_with(
                jar,
                Flash::error(StudentError::NotFound(id).to_string()),
                "/students",
            )
        }
    }
}

/// Apply an edit
///
/// POST /update/{id} and POST /edit/{id}
#[instrument(skip(_admin, state, jar, form))]
pub async fn update_student_handler(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    jar: SignedCookieJar,
    Form(form): Form<StudentUpdateForm>,
) -> Result<Response, AppError> {
    let mut students = state.store.load().await;

    match roster::update(&mut students, &id, form) {
        Ok(()) => {}
        Err(e @ StudentError::DuplicateEmail(_)) => {
            warn!(student_id = %id, error = %e, "Update rejected");

            // Re-present the stored values; nothing was changed
            return Ok(match roster::find(&students, &id).and_then(StudentRow::from_student) {
                Some(student) => (
                    StatusCode::CONFLICT,
                    Json(StudentEditView {
                        student,
                        flash: Some(Flash::error(e.to_string())),
                    }),
                )
                    .into_response(),
                None => redirect_with(jar, Flash::error(e.to_string()), "/students"),
            });
        }
        Err(e) => {
            warn!(student_id = %id, error = %e, "Update rejected");
            return Ok(redirect_with(jar, Flash::error(e.to_string()), "/students"));
        }
    }

    state.store.save(&students).await?;

    info!(student_id = %id, "Student updated");

    Ok(redirect_with(
        jar,
        Flash::success("Student details updated."),
        "/students",
    ))
}

/// Delete a student
///
/// POST /delete/{id}
#[instrument(skip(_admin, state, jar))]
pub async fn delete_student_handler(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    jar: SignedCookieJar,
) -> Result<Response, AppError> {
    let mut students = state.store.load().await;

    if !roster::remove(&mut students, &id) {
        warn!(student_id = %id, "Delete requested for unknown student");
        return Ok(redirect_with(
            jar,
            Flash::error(StudentError::NotFound(id).to_string()),
            "/students",
        ));
    }

    state.store.save(&students).await?;

    info!(student_id = %id, remaining = students.len(), "Student deleted");

    Ok(redirect_with(
        jar,
        Flash::success("Student deleted successfully."),
        "/students",
    ))
}
