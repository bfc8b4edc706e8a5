use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Moderation state of a submitted profile.
///
/// Every profile starts `pending`. An admin moves it to `approved` or
/// `rejected`; only `approved` profiles are publicly visible. There is no
/// transition back to `pending` and no resubmission path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "profile_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProfileStatus {
    Pending,
    Approved,
    Rejected,
}

/// Gender section of the listing. The public browse view is partitioned by
/// gender server-side; it is never a client-side filter, and there is no
/// default section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "gender")]
pub enum Gender {
    Male,
    Female,
}

/// Age sort direction for the public listing query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// A matrimony candidate record, one row in `profiles`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub status: ProfileStatus,

    // Personal
    pub full_name: String,
    pub age: i32,
    pub gender: Gender,
    pub rashifal_symbol: String,

    // Physical
    pub height_inch: i32,
    pub blood_group: String,
    pub manglik: bool,

    // Family & gotra
    pub father_name: String,
    pub father_gotra: String,
    pub mother_gotra: String,
    pub family_gotra: String,

    // Education & work
    pub education: String,
    pub occupation: Option<String>,
    pub work_experience: Option<String>,
    /// Annual income in lakh. Absent is semantically distinct from zero.
    pub income_lakh: Option<f64>,

    // Contact
    pub address: String,
    pub mobile: String,
    pub email: String,
    pub social_media_link: Option<String>,

    // Media & bio. Photo URLs are set once at creation and never edited.
    pub self_photo_url: Option<String>,
    pub family_photo_url: Option<String>,
    pub expectations: String,
    pub hobbies: Option<String>,

    // Extra family
    pub father_occupation: Option<String>,
    pub mother_occupation: Option<String>,
    pub siblings_details: Option<String>,
}
