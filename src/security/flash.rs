use crate::models::views::Flash;
use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use tracing::debug;

pub const FLASH_COOKIE: &str = "flash";

/// Queue a flash for the next rendered view.
///
/// The value is form-urlencoded so arbitrary message text stays cookie-safe.
pub fn set_flash(jar: SignedCookieJar, flash: Flash) -> SignedCookieJar {
    let value = match serde_urlencoded::to_string(&flash) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "Failed to encode flash message, dropping it");
            return jar;
        }
    };

    jar.add(
        Cookie::build((FLASH_COOKIE, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// Pop the pending flash, if any. A tampered or undecodable cookie is
/// discarded.
pub fn take_flash(jar: SignedCookieJar) -> (SignedCookieJar, Option<Flash>) {
    let flash = match jar.get(FLASH_COOKIE) {
        Some(cookie) => serde_urlencoded::from_str(cookie.value()).ok(),
        None => return (jar, None),
    };

    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    (jar, flash)
}
