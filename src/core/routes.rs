// HTTP routes configuration

use crate::core::state::AppState;
use crate::handlers::{auth, fallback, health, pages, students};
use axum::{
    routing::{get, post},
    Router,
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Public endpoints
        .route("/", get(pages::index_handler))
        .route(
            "/register",
            get(pages::register_form_handler).post(students::register_handler),
        )
        .route(
            "/login",
            get(auth::login_form_handler).post(auth::login_handler),
        )
        .route("/logout", get(auth::logout_handler))
        .route("/health", get(health::health_handler))

        // Admin endpoints (guarded by RequireAdmin in each handler)
        .route("/students", get(students::list_students_handler))
        .route(
            "/edit/{id}",
            get(students::edit_student_handler).post(students::update_student_handler),
        )
        .route("/update/{id}", post(students::update_student_handler))
        .route("/delete/{id}", post(students::delete_student_handler))

        .fallback(fallback::fallback_handler)

        .with_state(state)
}
