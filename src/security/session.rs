use crate::core::error::AuthError;
use crate::models::views::Flash;
use crate::security::flash::set_flash;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use sha2::{Digest, Sha512};
use std::convert::Infallible;
use tracing::warn;

pub const SESSION_COOKIE: &str = "session";
const SESSION_ADMIN: &str = "admin";

/// Derive the cookie signing key from the configured secret.
///
/// `Key::from` needs 64 bytes of material; hashing lets any non-empty
/// secret be used.
pub fn signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Per-request authentication context, read from the signed session cookie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSession {
    Authenticated,
    Anonymous,
}

impl AdminSession {
    pub fn from_jar(jar: &SignedCookieJar) -> Self {
        match jar.get(SESSION_COOKIE) {
            Some(cookie) if cookie.value() == SESSION_ADMIN => AdminSession::Authenticated,
            _ => AdminSession::Anonymous,
        }
    }

    pub fn is_authenticated(self) -> bool {
        self == AdminSession::Authenticated
    }
}

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::<Key>::from_request_parts(parts, state).await?;
        Ok(AdminSession::from_jar(&jar))
    }
}

/// Guard for protected handlers: extraction fails with a redirect to the
/// login form unless the session flag is set.
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = LoginRedirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = match SignedCookieJar::<Key>::from_request_parts(parts, state).await {
            Ok(jar) => jar,
            Err(never) => match never {},
        };

        if AdminSession::from_jar(&jar).is_authenticated() {
            Ok(RequireAdmin)
        } else {
            warn!(
                method = %parts.method,
                path = %parts.uri.path(),
                "Unauthenticated access to protected route"
            );
            Err(LoginRedirect(jar))
        }
    }
}

/// Rejection of [`RequireAdmin`]
pub struct LoginRedirect(SignedCookieJar);

impl IntoResponse for LoginRedirect {
    fn into_response(self) -> Response {
        let jar = set_flash(self.0, Flash::error(AuthError::LoginRequired.to_string()));
        (jar, Redirect::to("/login")).into_response()
    }
}

pub fn log_in(jar: SignedCookieJar) -> SignedCookieJar {
    jar.add(
        Cookie::build((SESSION_COOKIE, SESSION_ADMIN))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

pub fn log_out(jar: SignedCookieJar) -> SignedCookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}
