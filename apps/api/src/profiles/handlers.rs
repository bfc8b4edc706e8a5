use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::session::AdminSession;
use crate::confirm::ConfirmBody;
use crate::errors::AppError;
use crate::models::profile::{Gender, ProfileRow, ProfileStatus, SortOrder};
use crate::profiles::filter::ProfileFilter;
use crate::profiles::moderation;
use crate::profiles::photos::upload_photo;
use crate::profiles::validation::{validate, ProfileSubmission};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListProfilesQuery {
    pub gender: Option<Gender>,
    pub sort: Option<SortOrder>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub min_income: Option<f64>,
    pub gotra: Option<String>,
}

#[derive(Serialize)]
pub struct SubmitProfileResponse {
    pub id: Uuid,
    pub status: ProfileStatus,
}

/// GET /api/v1/profiles
///
/// Public listing: approved profiles of one gender, age-sorted server-side,
/// then refined through the pure filter engine. The listing is partitioned
/// by gender, so the parameter is mandatory; there is no combined view to
/// fall back to. Changing gender or sort is a fresh store query; the
/// remaining parameters never are.
pub async fn handle_list_profiles(
    State(state): State<AppState>,
    Query(query): Query<ListProfilesQuery>,
) -> Result<Json<Vec<ProfileRow>>, AppError> {
    let gender = required_gender(query.gender)?;
    let sort = query.sort.unwrap_or_default();
    let rows = moderation::list_approved(&state.db, gender, sort).await?;

    let filter = ProfileFilter {
        min_age: query.min_age,
        max_age: query.max_age,
        min_income: query.min_income,
        gotra: query.gotra,
    };
    Ok(Json(filter.apply(rows)))
}

fn required_gender(gender: Option<Gender>) -> Result<Gender, AppError> {
    gender.ok_or_else(|| AppError::Validation("gender query parameter is required".to_string()))
}

/// GET /api/v1/profiles/:id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfileRow>, AppError> {
    let profile = moderation::get_profile(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {id} not found")))?;
    Ok(Json(profile))
}

/// POST /api/v1/profiles (multipart)
///
/// Public submission. Validation runs before any side effect; photos (if
/// chosen) upload before the insert, and an upload failure fails the whole
/// submission. The created row is always `pending`.
pub async fn handle_submit_profile(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<SubmitProfileResponse>), AppError> {
    let mut submission = ProfileSubmission::default();
    let mut self_photo: Option<(String, Bytes)> = None;
    let mut family_photo: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed form data: {e}")))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        match name.as_str() {
            "self_photo" | "family_photo" => {
                let filename = field.file_name().unwrap_or("photo").to_owned();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Malformed form data: {e}")))?;
                // Browsers post an empty part when no file was chosen.
                if data.is_empty() {
                    continue;
                }
                if name == "self_photo" {
                    self_photo = Some((filename, data));
                } else {
                    family_photo = Some((filename, data));
                }
            }
            _ => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Malformed form data: {e}")))?;
                submission.set_field(&name, value);
            }
        }
    }

    let profile = validate(&submission).map_err(AppError::Validation)?;

    let self_photo_url = match self_photo {
        Some((filename, data)) => Some(
            upload_photo(
                &state.s3,
                &state.config.s3_bucket,
                &state.config.s3_public_url,
                &filename,
                data,
            )
            .await?,
        ),
        None => None,
    };
    let family_photo_url = match family_photo {
        Some((filename, data)) => Some(
            upload_photo(
                &state.s3,
                &state.config.s3_bucket,
                &state.config.s3_public_url,
                &filename,
                data,
            )
            .await?,
        ),
        None => None,
    };

    let id = moderation::create_profile(
        &state.db,
        &profile,
        self_photo_url.as_deref(),
        family_photo_url.as_deref(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitProfileResponse {
            id,
            status: ProfileStatus::Pending,
        }),
    ))
}

/// GET /api/v1/admin/profiles
pub async fn handle_admin_list_profiles(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<Vec<ProfileRow>>, AppError> {
    Ok(Json(moderation::list_all(&state.db).await?))
}

/// GET /api/v1/admin/profiles/pending
pub async fn handle_list_pending(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<Vec<ProfileRow>>, AppError> {
    Ok(Json(moderation::list_pending(&state.db).await?))
}

/// POST /api/v1/admin/profiles/:id/approve
pub async fn handle_approve_profile(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    set_status_or_404(&state, id, ProfileStatus::Approved).await
}

/// POST /api/v1/admin/profiles/:id/reject
pub async fn handle_reject_profile(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    set_status_or_404(&state, id, ProfileStatus::Rejected).await
}

async fn set_status_or_404(
    state: &AppState,
    id: Uuid,
    status: ProfileStatus,
) -> Result<StatusCode, AppError> {
    if moderation::set_status(&state.db, id, status).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Profile {id} not found")))
    }
}

/// DELETE /api/v1/admin/profiles/:id
///
/// Destructive and irreversible, so the body must echo the target id back
/// as confirmation. A bare DELETE request is rejected before any mutation.
pub async fn handle_delete_profile(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ConfirmBody>,
) -> Result<StatusCode, AppError> {
    body.require_confirmation(id)?;
    if moderation::delete_profile(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Profile {id} not found")))
    }
}
