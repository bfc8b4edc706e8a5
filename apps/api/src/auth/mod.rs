pub mod handlers;
pub mod password;
pub mod session;

use anyhow::{anyhow, Context, Result};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::config::Config;

/// Creates the initial admin account from `ADMIN_EMAIL`/`ADMIN_PASSWORD` if
/// no account with that email exists yet. Runs once at startup; a no-op when
/// the variables are unset or the account is already present.
pub async fn ensure_bootstrap_admin(pool: &PgPool, config: &Config) -> Result<()> {
    let (Some(email), Some(pass)) = (&config.admin_email, &config.admin_password) else {
        return Ok(());
    };

    password::validate_password_strength(pass, 8)
        .map_err(|e| anyhow!("ADMIN_PASSWORD rejected: {e}"))?;

    let existing: Option<Uuid> = sqlx::query_scalar("SELECT id FROM admins WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
        .context("failed to look up bootstrap admin")?;
    if existing.is_some() {
        return Ok(());
    }

    let hash = password::hash_password(pass).map_err(|e| anyhow!("password hashing failed: {e}"))?;
    sqlx::query("INSERT INTO admins (email, password_hash) VALUES ($1, $2)")
        .bind(email)
        .bind(&hash)
        .execute(pool)
        .await
        .context("failed to insert bootstrap admin")?;

    info!("Bootstrapped admin account for {email}");
    Ok(())
}
