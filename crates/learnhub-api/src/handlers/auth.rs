//! Registration, activation, login and session handlers.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use learnhub_auth::TokenPair;
use learnhub_core::error::AppError;

use crate::dto::request::{
    ActivateRequest, LoginRequest, RegisterRequest, SocialAuthRequest, validate,
};
use crate::dto::response::{ActivationResponse, AuthResponse, MessageResponse, ProfileResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::extractors::auth::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};
use crate::state::AppState;

/// Build the pair of session cookies from a token pair.
///
/// No `Max-Age` is set: the cookies live for the browser session, and
/// the tokens themselves carry the real expiry.
fn session_cookies(jar: CookieJar, pair: &TokenPair) -> CookieJar {
    let mut access = Cookie::new(ACCESS_TOKEN_COOKIE, pair.access_token.clone());
    access.set_path("/");
    access.set_http_only(true);
    access.set_same_site(SameSite::Lax);

    let mut refresh = Cookie::new(REFRESH_TOKEN_COOKIE, pair.refresh_token.clone());
    refresh.set_path("/");
    refresh.set_http_only(true);
    refresh.set_same_site(SameSite::Lax);

    jar.add(access).add(refresh)
}

/// Expire both session cookies.
fn removal_cookies(jar: CookieJar) -> CookieJar {
    let mut access = Cookie::new(ACCESS_TOKEN_COOKIE, "");
    access.set_path("/");
    access.make_removal();

    let mut refresh = Cookie::new(REFRESH_TOKEN_COOKIE, "");
    refresh.set_path("/");
    refresh.make_removal();

    jar.add(access).add(refresh)
}

/// `POST /api/v1/auth/register`
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ActivationResponse>, ApiError> {
    validate(&req)?;
    let ticket = state
        .user_service
        .register(&req.name, &req.email, &req.password)
        .await?;
    Ok(Json(ActivationResponse {
        success: true,
        activation_token: ticket.activation_token,
    }))
}

/// `POST /api/v1/auth/activate`
pub async fn activate(
    State(state): State<AppState>,
    Json(req): Json<ActivateRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate(&req)?;
    state
        .user_service
        .activate(&req.activation_token, &req.activation_code)
        .await?;
    Ok(Json(MessageResponse::ok("Account activated successfully")))
}

/// `POST /api/v1/auth/login`
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), ApiError> {
    validate(&req)?;
    let (profile, pair) = state.user_service.login(&req.email, &req.password).await?;
    let jar = session_cookies(jar, &pair);
    Ok((
        jar,
        Json(AuthResponse {
            success: true,
            user: profile,
            access_token: pair.access_token,
        }),
    ))
}

/// `POST /api/v1/auth/social`
pub async fn social_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<SocialAuthRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), ApiError> {
    validate(&req)?;
    let (profile, pair) = state
        .user_service
        .social_auth(&req.name, &req.email, req.avatar.as_deref())
        .await?;
    let jar = session_cookies(jar, &pair);
    Ok((
        jar,
        Json(AuthResponse {
            success: true,
            user: profile,
            access_token: pair.access_token,
        }),
    ))
}

/// `POST /api/v1/auth/logout`
pub async fn logout(
    State(state): State<AppState>,
    user: AuthUser,
    jar: CookieJar,
) -> Result<(CookieJar, Json<MessageResponse>), ApiError> {
    state.user_service.logout(user.user_id()).await?;
    let jar = removal_cookies(jar);
    Ok((jar, Json(MessageResponse::ok("Logged out successfully"))))
}

/// `POST /api/v1/auth/refresh`
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<AuthResponse>), ApiError> {
    let token = jar
        .get(REFRESH_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| AppError::unauthorized("Could not refresh token"))?;

    let (pair, profile) = state.user_service.refresh(&token).await?;
    let jar = session_cookies(jar, &pair);
    Ok((
        jar,
        Json(AuthResponse {
            success: true,
            user: profile,
            access_token: pair.access_token,
        }),
    ))
}

/// `GET /api/v1/auth/me`
pub async fn me(user: AuthUser) -> Result<Json<ProfileResponse>, ApiError> {
    Ok(Json(ProfileResponse {
        success: true,
        user: user.0.profile,
    }))
}
