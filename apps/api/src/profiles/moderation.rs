//! Profile lifecycle: creation (always `pending`), admin status transitions,
//! deletion, and the queries each audience is allowed to see. Every mutation
//! here touches only the `status` column or removes the row; no other field
//! is ever updated after creation.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::profile::{Gender, ProfileRow, ProfileStatus, SortOrder};
use crate::profiles::validation::NewProfile;

/// Inserts a validated profile with status `pending`, returning the new id.
pub async fn create_profile(
    pool: &PgPool,
    profile: &NewProfile,
    self_photo_url: Option<&str>,
    family_photo_url: Option<&str>,
) -> Result<Uuid, sqlx::Error> {
    let id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO profiles
            (status, full_name, age, gender, rashifal_symbol, height_inch,
             blood_group, manglik, father_name, father_gotra, mother_gotra,
             family_gotra, education, occupation, work_experience, income_lakh,
             address, mobile, email, social_media_link, self_photo_url,
             family_photo_url, expectations, hobbies, father_occupation,
             mother_occupation, siblings_details)
        VALUES
            ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
             $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27)
        RETURNING id
        "#,
    )
    .bind(ProfileStatus::Pending)
    .bind(&profile.full_name)
    .bind(profile.age)
    .bind(profile.gender)
    .bind(&profile.rashifal_symbol)
    .bind(profile.height_inch)
    .bind(&profile.blood_group)
    .bind(profile.manglik)
    .bind(&profile.father_name)
    .bind(&profile.father_gotra)
    .bind(&profile.mother_gotra)
    .bind(&profile.family_gotra)
    .bind(&profile.education)
    .bind(&profile.occupation)
    .bind(&profile.work_experience)
    .bind(profile.income_lakh)
    .bind(&profile.address)
    .bind(&profile.mobile)
    .bind(&profile.email)
    .bind(&profile.social_media_link)
    .bind(self_photo_url)
    .bind(family_photo_url)
    .bind(&profile.expectations)
    .bind(&profile.hobbies)
    .bind(&profile.father_occupation)
    .bind(&profile.mother_occupation)
    .bind(&profile.siblings_details)
    .fetch_one(pool)
    .await?;

    info!("Created pending profile {id}");
    Ok(id)
}

/// Sets a profile's moderation status. Idempotent: re-approving an approved
/// profile is a no-op from the caller's perspective. Returns false when no
/// such profile exists.
pub async fn set_status(
    pool: &PgPool,
    id: Uuid,
    status: ProfileStatus,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE profiles SET status = $1 WHERE id = $2")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;

    let found = result.rows_affected() > 0;
    if found {
        info!("Profile {id} moderated to {status:?}");
    }
    Ok(found)
}

/// Removes a profile entirely, from any status. Not reversible. Returns
/// false when no such profile exists.
pub async fn delete_profile(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    let found = result.rows_affected() > 0;
    if found {
        info!("Profile {id} deleted");
    }
    Ok(found)
}

/// Admin review queue: pending profiles, newest submission first.
pub async fn list_pending(pool: &PgPool) -> Result<Vec<ProfileRow>, sqlx::Error> {
    sqlx::query_as::<_, ProfileRow>(
        "SELECT * FROM profiles WHERE status = 'pending' ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
}

/// Full admin worklist across all statuses, newest first.
pub async fn list_all(pool: &PgPool) -> Result<Vec<ProfileRow>, sqlx::Error> {
    sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

/// The sole public collection read: approved profiles of one gender, ordered
/// by age. Gender and sort direction are the only server-side parameters;
/// any further narrowing belongs to the filter engine.
pub async fn list_approved(
    pool: &PgPool,
    gender: Gender,
    sort: SortOrder,
) -> Result<Vec<ProfileRow>, sqlx::Error> {
    sqlx::query_as::<_, ProfileRow>(approved_query(sort))
        .bind(gender)
        .fetch_all(pool)
        .await
}

fn approved_query(sort: SortOrder) -> &'static str {
    match sort {
        SortOrder::Asc => {
            "SELECT * FROM profiles WHERE status = 'approved' AND gender = $1 ORDER BY age ASC"
        }
        SortOrder::Desc => {
            "SELECT * FROM profiles WHERE status = 'approved' AND gender = $1 ORDER BY age DESC"
        }
    }
}

/// Single-profile detail view. `None` is the distinct not-found state.
pub async fn get_profile(pool: &PgPool, id: Uuid) -> Result<Option<ProfileRow>, sqlx::Error> {
    sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approved_query_only_varies_in_sort_direction() {
        let asc = approved_query(SortOrder::Asc);
        let desc = approved_query(SortOrder::Desc);
        assert!(asc.ends_with("ORDER BY age ASC"));
        assert!(desc.ends_with("ORDER BY age DESC"));
        // Both read only approved rows of the requested gender.
        for sql in [asc, desc] {
            assert!(sql.contains("status = 'approved'"));
            assert!(sql.contains("gender = $1"));
        }
    }
}
