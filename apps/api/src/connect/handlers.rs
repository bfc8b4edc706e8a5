//! Samaj Foundation connect workflow: public intake, admin review, and the
//! one-way `pending -> contacted` transition. No delete is defined.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::auth::session::AdminSession;
use crate::connect::validation::{validate, ConnectSubmission};
use crate::errors::AppError;
use crate::models::connect::{ConnectRequestRow, ConnectStatus};
use crate::state::AppState;

pub async fn fetch_requests(pool: &PgPool) -> Result<Vec<ConnectRequestRow>, sqlx::Error> {
    sqlx::query_as::<_, ConnectRequestRow>(
        "SELECT * FROM samaj_connect_requests ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
}

/// Marks a request contacted. One-way and idempotent: re-marking changes
/// nothing, and there is no transition back to pending. Returns false when
/// no such request exists.
pub async fn mark_contacted(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE samaj_connect_requests SET status = 'contacted' WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[derive(Serialize)]
pub struct CreateConnectResponse {
    pub id: Uuid,
    pub status: ConnectStatus,
}

/// POST /api/v1/connect — public intake; the stored status is always
/// `pending` regardless of the payload.
pub async fn handle_create_request(
    State(state): State<AppState>,
    Json(req): Json<ConnectSubmission>,
) -> Result<(StatusCode, Json<CreateConnectResponse>), AppError> {
    let request = validate(&req).map_err(AppError::Validation)?;

    let id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO samaj_connect_requests
            (full_name, age, mobile, email, address, state, district,
             block_tehsil, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'pending')
        RETURNING id
        "#,
    )
    .bind(&request.full_name)
    .bind(request.age)
    .bind(&request.mobile)
    .bind(&request.email)
    .bind(&request.address)
    .bind(&request.state)
    .bind(&request.district)
    .bind(&request.block_tehsil)
    .fetch_one(&state.db)
    .await?;

    info!("Connect request {id} received");
    Ok((
        StatusCode::CREATED,
        Json(CreateConnectResponse {
            id,
            status: ConnectStatus::Pending,
        }),
    ))
}

/// GET /api/v1/admin/connect
pub async fn handle_list_requests(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<Vec<ConnectRequestRow>>, AppError> {
    Ok(Json(fetch_requests(&state.db).await?))
}

/// POST /api/v1/admin/connect/:id/contacted
pub async fn handle_mark_contacted(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !mark_contacted(&state.db, id).await? {
        return Err(AppError::NotFound(format!("Connect request {id} not found")));
    }

    info!("Connect request {id} marked contacted");
    Ok(StatusCode::NO_CONTENT)
}
