//! Society updates: announcements posted by an admin, readable by everyone.
//! No status machine — existence is visibility.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::session::AdminSession;
use crate::confirm::ConfirmBody;
use crate::errors::AppError;
use crate::models::society_update::SocietyUpdateRow;
use crate::state::AppState;

pub async fn fetch_updates(pool: &PgPool) -> Result<Vec<SocietyUpdateRow>, sqlx::Error> {
    sqlx::query_as::<_, SocietyUpdateRow>(
        "SELECT * FROM society_updates ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
}

/// GET /api/v1/updates
///
/// Public list. Updates are supplementary home-page content, so a store
/// failure degrades to an empty list instead of surfacing an error. This is
/// the only read in the system that swallows its backend failure.
pub async fn handle_list_updates(State(state): State<AppState>) -> Json<Vec<SocietyUpdateRow>> {
    match fetch_updates(&state.db).await {
        Ok(updates) => Json(updates),
        Err(e) => {
            warn!("Failed to fetch society updates, degrading to empty list: {e}");
            Json(Vec::new())
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateUpdateRequest {
    pub title: String,
    pub description: String,
}

fn validate_update(req: &CreateUpdateRequest) -> Result<(String, String), String> {
    let title = req.title.trim();
    let description = req.description.trim();
    if title.is_empty() {
        return Err("Title is required".to_string());
    }
    if description.is_empty() {
        return Err("Description is required".to_string());
    }
    Ok((title.to_string(), description.to_string()))
}

/// POST /api/v1/admin/updates
pub async fn handle_create_update(
    session: AdminSession,
    State(state): State<AppState>,
    Json(req): Json<CreateUpdateRequest>,
) -> Result<(StatusCode, Json<SocietyUpdateRow>), AppError> {
    let (title, description) = validate_update(&req).map_err(AppError::Validation)?;

    let update: SocietyUpdateRow = sqlx::query_as(
        r#"
        INSERT INTO society_updates (title, description, created_by)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(&title)
    .bind(&description)
    .bind(session.admin_id)
    .fetch_one(&state.db)
    .await?;

    info!("Society update {} posted", update.id);
    Ok((StatusCode::CREATED, Json(update)))
}

/// DELETE /api/v1/admin/updates/:id — confirmation-gated like every delete.
pub async fn handle_delete_update(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ConfirmBody>,
) -> Result<StatusCode, AppError> {
    body.require_confirmation(id)?;

    let result = sqlx::query("DELETE FROM society_updates WHERE id = $1")
        .bind(id)
        .execute(&state.db)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Update {id} not found")));
    }

    info!("Society update {id} deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_requires_title_and_description() {
        let req = CreateUpdateRequest {
            title: "  ".to_string(),
            description: "Body".to_string(),
        };
        assert!(validate_update(&req).is_err());

        let req = CreateUpdateRequest {
            title: "Annual meet".to_string(),
            description: "".to_string(),
        };
        assert!(validate_update(&req).is_err());
    }

    #[test]
    fn test_update_fields_are_trimmed() {
        let req = CreateUpdateRequest {
            title: " Annual meet ".to_string(),
            description: " At the community hall. ".to_string(),
        };
        let (title, description) = validate_update(&req).unwrap();
        assert_eq!(title, "Annual meet");
        assert_eq!(description, "At the community hall.");
    }
}
