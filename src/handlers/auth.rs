use crate::core::error::AuthError;
use crate::core::state::AppState;
use crate::models::views::{Flash, LoginForm, PageView};
use crate::handlers::pages::render;
use crate::security::flash::set_flash;
use crate::security::session::{log_in, log_out, AdminSession};
use crate::utils::auth::verify_credentials;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::SignedCookieJar;
use tracing::{info, warn};

/// Login form
///
/// GET /login
pub async fn login_form_handler(session: AdminSession, jar: SignedCookieJar) -> Response {
    render("login", session, jar)
}

/// Check the admin credentials and open a session
///
/// POST /login
pub async fn login_handler(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let auth = &state.config.auth;

    if !verify_credentials(
        &form.username,
        &form.password,
        &auth.admin_username,
        &auth.admin_password,
    ) {
        warn!(username = %form.username, "Failed admin login attempt");

        return (
            StatusCode::UNAUTHORIZED,
            Json(PageView {
                page: "login".to_string(),
                authenticated: false,
                flash: Some(Flash::error(AuthError::InvalidCredentials.to_string())),
            }),
        )
            .into_response();
    }

    info!(username = %form.username, "Admin logged in");

    let jar = set_flash(log_in(jar), Flash::success("Login successful."));
    (jar, Redirect::to("/students")).into_response()
}

/// Close the admin session
///
/// GET /logout
pub async fn logout_handler(session: AdminSession, jar: SignedCookieJar) -> Response {
    if session.is_authenticated() {
        info!("Admin logged out");
    }

    let jar = set_flash(log_out(jar), Flash::success("You have been logged out."));
    (jar, Redirect::to("/")).into_response()
}
