//! Admin dashboard aggregate. The three admin datasets are independent, so
//! their fetches fan out concurrently and join before the response renders;
//! any single failure fails the whole aggregate.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::auth::session::AdminSession;
use crate::connect::handlers::fetch_requests;
use crate::errors::AppError;
use crate::models::connect::ConnectRequestRow;
use crate::models::profile::{ProfileRow, ProfileStatus};
use crate::models::society_update::SocietyUpdateRow;
use crate::profiles::moderation::list_all;
use crate::state::AppState;
use crate::updates::handlers::fetch_updates;

#[derive(Serialize)]
pub struct DashboardResponse {
    /// Primary admin-facing signal: size of the review queue.
    pub pending_count: usize,
    pub profiles: Vec<ProfileRow>,
    pub updates: Vec<SocietyUpdateRow>,
    pub connect_requests: Vec<ConnectRequestRow>,
}

/// GET /api/v1/admin/dashboard
pub async fn handle_dashboard(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let (profiles, updates, connect_requests) = tokio::try_join!(
        list_all(&state.db),
        fetch_updates(&state.db),
        fetch_requests(&state.db),
    )?;

    let pending_count = profiles
        .iter()
        .filter(|p| p.status == ProfileStatus::Pending)
        .count();

    Ok(Json(DashboardResponse {
        pending_count,
        profiles,
        updates,
        connect_requests,
    }))
}
