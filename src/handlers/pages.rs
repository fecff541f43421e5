use crate::models::views::PageView;
use crate::security::flash::take_flash;
use crate::security::session::AdminSession;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::SignedCookieJar;

pub(crate) fn render(page: &str, session: AdminSession, jar: SignedCookieJar) -> Response {
    let (jar, flash) = take_flash(jar);

    (
        jar,
        Json(PageView {
            page: page.to_string(),
            authenticated: session.is_authenticated(),
            flash,
        }),
    )
        .into_response()
}

/// GET /
pub async fn index_handler(session: AdminSession, jar: SignedCookieJar) -> Response {
    render("index", session, jar)
}

/// GET /register
pub async fn register_form_handler(session: AdminSession, jar: SignedCookieJar) -> Response {
    render("register", session, jar)
}
