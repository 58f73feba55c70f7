use axum_extra::extract::cookie::{Cookie, CookieJar};
use quiz_core::model::SessionId;

pub const SESSION_COOKIE: &str = "nn_session";

/// Session id carried by the request, if any.
#[must_use]
pub fn session_id(jar: &CookieJar) -> Option<SessionId> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| cookie.value().parse().ok())
}

/// Browser-session cookie naming `id`: `HttpOnly`, path `/`, no expiry.
#[must_use]
pub fn session_cookie(id: &SessionId) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, id.to_string()))
        .path("/")
        .http_only(true)
        .build()
}

/// Ask the browser to drop the session cookie.
#[must_use]
pub fn forget_session(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}
