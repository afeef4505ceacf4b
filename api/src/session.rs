//! Cookie sessions.
//!
//! The session is the `user_id` cookie itself; there is no server-side
//! session table. A request is authenticated when the cookie is present and
//! the user it names still exists. Logging out deletes the cookie and nothing
//! else.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use sqlx::SqlitePool;
use time::Duration;

use crate::{
    error::AppError,
    models::user::{SessionUser, User},
    password, AppState,
};

pub const SESSION_COOKIE: &str = "user_id";
pub const SESSION_MAX_AGE: Duration = Duration::days(7);

/// Identity named by the session cookie, or `None` if the cookie is absent,
/// unparsable, or names a user that no longer exists.
pub async fn resolve(db: &SqlitePool, jar: &CookieJar) -> Result<Option<SessionUser>, AppError> {
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return Ok(None);
    };
    let Ok(user_id) = cookie.value().parse::<i64>() else {
        tracing::debug!("ignoring malformed session cookie");
        return Ok(None);
    };

    Ok(SessionUser::find_by_id(db, user_id).await?)
}

pub fn establish(jar: CookieJar, user_id: i64, secure: bool) -> CookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, user_id.to_string()))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .max_age(SESSION_MAX_AGE);
    jar.add(cookie)
}

pub fn clear(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}

/// Checks an email/password pair. Unknown emails and wrong passwords both
/// yield `None`.
pub async fn verify_credentials(
    db: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<Option<SessionUser>, AppError> {
    let Some(user) = User::find_by_email(db, email).await? else {
        return Ok(None);
    };

    let matches =
        password::verify_password(password.to_owned(), user.password_hash.clone()).await?;
    Ok(matches.then(|| user.into()))
}

/// Extractor for handlers that require a signed-in caller. Rejects with 401
/// before the request body is touched.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SessionUser);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        resolve(&state.db, &jar)
            .await?
            .map(CurrentUser)
            .ok_or(AppError::Unauthorized)
    }
}
