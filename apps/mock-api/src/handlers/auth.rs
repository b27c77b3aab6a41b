//! Login and current user.

use actix_web::{HttpResponse, web};

use fleet_core::ports::AuthError;
use fleet_shared::{LoginRequest, Session};

use crate::middleware::auth::ApiAccess;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    state.pause().await;
    let req = body.into_inner();
    let account = &state.account;

    let known_email = req.email.trim().eq_ignore_ascii_case(&account.user.email);
    if !known_email || !state.passwords.verify(&req.password, &account.password_hash)? {
        tracing::info!(email = %req.email, "Login rejected");
        return Err(AuthError::InvalidCredentials.into());
    }

    let token = state
        .tokens
        .generate_token(&account.user.id, &account.user.email)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    tracing::info!(user_id = %account.user.id, "Session issued");
    Ok(HttpResponse::Ok().json(Session { token }))
}

/// GET /api/me
pub async fn me(state: web::Data<AppState>, _access: ApiAccess) -> AppResult<HttpResponse> {
    state.pause().await;
    Ok(HttpResponse::Ok().json(&state.account.user))
}
