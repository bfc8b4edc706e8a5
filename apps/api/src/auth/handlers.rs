use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::password::verify_password;
use crate::auth::session::{create_session, destroy_session, AdminSession};
use crate::errors::AppError;
use crate::models::admin::AdminRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// POST /api/v1/admin/login
///
/// A wrong email and a wrong password are indistinguishable to the caller.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let admin: Option<AdminRow> = sqlx::query_as("SELECT * FROM admins WHERE email = $1")
        .bind(req.email.trim())
        .fetch_optional(&state.db)
        .await?;
    let admin = admin.ok_or(AppError::Unauthorized)?;

    let verified = verify_password(&req.password, &admin.password_hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("password verification failed: {e}")))?;
    if !verified {
        return Err(AppError::Unauthorized);
    }

    let session = create_session(&state.db, admin.id).await?;
    info!("Admin {} signed in", admin.email);

    Ok(Json(LoginResponse {
        token: session.token,
        expires_at: session.expires_at,
    }))
}

/// POST /api/v1/admin/logout
///
/// Terminates the presented session server-side.
pub async fn handle_logout(
    session: AdminSession,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    destroy_session(&state.db, &session.token_hash).await?;
    info!("Admin {} signed out", session.admin_id);
    Ok(StatusCode::NO_CONTENT)
}
