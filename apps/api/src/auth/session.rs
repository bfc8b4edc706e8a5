//! DB-backed admin sessions. Tokens are opaque random strings; only their
//! SHA-256 hash is stored server-side, so a database leak does not
//! compromise active sessions, and logout can terminate a session for real.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

/// Session lifetime. There is no refresh flow; the admin logs in again.
pub const SESSION_TTL_HOURS: i64 = 24 * 7;

/// A freshly issued session. The plaintext token is returned to the client
/// exactly once and never persisted.
#[derive(Debug)]
pub struct IssuedSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Generates an opaque session token, returning `(plaintext, sha256_hex)`.
pub fn generate_session_token() -> (String, String) {
    let plaintext = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
    let hash = hash_session_token(&plaintext);
    (plaintext, hash)
}

/// SHA-256 hex digest used to look a presented token up in the store.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Creates a session row for the admin and returns the plaintext token.
/// Expired rows are swept opportunistically on each login.
pub async fn create_session(pool: &PgPool, admin_id: Uuid) -> Result<IssuedSession, sqlx::Error> {
    sqlx::query("DELETE FROM admin_sessions WHERE expires_at < NOW()")
        .execute(pool)
        .await?;

    let (token, token_hash) = generate_session_token();
    let expires_at = Utc::now() + Duration::hours(SESSION_TTL_HOURS);

    sqlx::query(
        "INSERT INTO admin_sessions (admin_id, token_hash, expires_at) VALUES ($1, $2, $3)",
    )
    .bind(admin_id)
    .bind(&token_hash)
    .bind(expires_at)
    .execute(pool)
    .await?;

    Ok(IssuedSession { token, expires_at })
}

/// Terminates a session by its token hash. Deleting an already-terminated
/// session is a no-op.
pub async fn destroy_session(pool: &PgPool, token_hash: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM admin_sessions WHERE token_hash = $1")
        .bind(token_hash)
        .execute(pool)
        .await?;
    Ok(())
}

/// A validated admin session, extracted from the `Authorization: Bearer`
/// header. Every protected handler takes this as a parameter; there is no
/// ambient session state.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub admin_id: Uuid,
    pub token_hash: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;

        let token_hash = hash_session_token(token);
        let admin_id: Option<Uuid> = sqlx::query_scalar(
            "SELECT admin_id FROM admin_sessions WHERE token_hash = $1 AND expires_at > NOW()",
        )
        .bind(&token_hash)
        .fetch_optional(&state.db)
        .await?;

        let admin_id = admin_id.ok_or(AppError::Unauthorized)?;
        Ok(AdminSession {
            admin_id,
            token_hash,
        })
    }
}
