use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    error::AppError,
    models::{
        user::{CreateUser, LoginPayload, User, UserResponse},
        MessageResponse,
    },
    password,
    session::{self, CurrentUser},
    AppState,
};

const CREDENTIALS_REQUIRED: &str = "Email and password are required";

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CreateUser>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let email = payload.email.trim();
    if email.is_empty() || payload.password.is_empty() {
        return Err(AppError::Validation(CREDENTIALS_REQUIRED));
    }

    let password_hash = password::hash_password(payload.password, state.password).await?;
    let user = User::insert(&state.db, email, &password_hash).await?;
    tracing::info!(user_id = user.id, "user registered");

    Ok((StatusCode::CREATED, Json(UserResponse { user })))
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginPayload>,
) -> Result<(CookieJar, Json<UserResponse>), AppError> {
    let email = payload.email.trim();
    if email.is_empty() || payload.password.is_empty() {
        return Err(AppError::Validation(CREDENTIALS_REQUIRED));
    }

    let user = session::verify_credentials(&state.db, email, &payload.password)
        .await?
        .ok_or(AppError::LoginFail)?;
    tracing::info!(user_id = user.id, "user signed in");

    let jar = session::establish(jar, user.id, state.cookie_secure);
    Ok((jar, Json(UserResponse { user })))
}

pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    (session::clear(jar), Json(MessageResponse::new("Logged out")))
}

pub async fn me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(UserResponse { user })
}
