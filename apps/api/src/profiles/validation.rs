//! Submission-form validation and coercion. Gatekeeps profile creation: a
//! row is only ever inserted from a fully validated payload, never partially.

use crate::models::profile::Gender;

/// Raw text fields exactly as they arrive from the multipart form. Values
/// are untrimmed strings; coercion happens in [`validate`].
#[derive(Debug, Default)]
pub struct ProfileSubmission {
    pub full_name: String,
    pub age: String,
    pub gender: String,
    pub rashifal_symbol: String,
    pub height_inch: String,
    pub blood_group: String,
    pub manglik: String,
    pub father_name: String,
    pub father_gotra: String,
    pub mother_gotra: String,
    pub family_gotra: String,
    pub education: String,
    pub occupation: String,
    pub work_experience: String,
    pub income_lakh: String,
    pub address: String,
    pub mobile: String,
    pub email: String,
    pub social_media_link: String,
    pub expectations: String,
    pub hobbies: String,
    pub father_occupation: String,
    pub mother_occupation: String,
    pub siblings_details: String,
}

impl ProfileSubmission {
    /// Routes a multipart text field into the matching slot. Unknown field
    /// names are ignored.
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "full_name" => self.full_name = value,
            "age" => self.age = value,
            "gender" => self.gender = value,
            "rashifal_symbol" => self.rashifal_symbol = value,
            "height_inch" => self.height_inch = value,
            "blood_group" => self.blood_group = value,
            "manglik" => self.manglik = value,
            "father_name" => self.father_name = value,
            "father_gotra" => self.father_gotra = value,
            "mother_gotra" => self.mother_gotra = value,
            "family_gotra" => self.family_gotra = value,
            "education" => self.education = value,
            "occupation" => self.occupation = value,
            "work_experience" => self.work_experience = value,
            "income_lakh" => self.income_lakh = value,
            "address" => self.address = value,
            "mobile" => self.mobile = value,
            "email" => self.email = value,
            "social_media_link" => self.social_media_link = value,
            "expectations" => self.expectations = value,
            "hobbies" => self.hobbies = value,
            "father_occupation" => self.father_occupation = value,
            "mother_occupation" => self.mother_occupation = value,
            "siblings_details" => self.siblings_details = value,
            _ => {}
        }
    }
}

/// Validated, typed insert payload. Photo URLs are attached by the handler
/// after upload; they are not part of form validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProfile {
    pub full_name: String,
    pub age: i32,
    pub gender: Gender,
    pub rashifal_symbol: String,
    pub height_inch: i32,
    pub blood_group: String,
    pub manglik: bool,
    pub father_name: String,
    pub father_gotra: String,
    pub mother_gotra: String,
    pub family_gotra: String,
    pub education: String,
    pub occupation: Option<String>,
    pub work_experience: Option<String>,
    pub income_lakh: Option<f64>,
    pub address: String,
    pub mobile: String,
    pub email: String,
    pub social_media_link: Option<String>,
    pub expectations: String,
    pub hobbies: Option<String>,
    pub father_occupation: Option<String>,
    pub mother_occupation: Option<String>,
    pub siblings_details: Option<String>,
}

pub const MIN_AGE: i32 = 18;
pub const MAX_AGE: i32 = 99;

/// Exactly 10 ASCII digits, nothing else. No country-code stripping, no
/// whitespace tolerance.
pub fn is_valid_mobile(mobile: &str) -> bool {
    mobile.len() == 10 && mobile.bytes().all(|b| b.is_ascii_digit())
}

fn required(value: &str, label: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{label} is required"));
    }
    Ok(trimmed.to_string())
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_age(value: &str) -> Result<i32, String> {
    let age: i32 = value
        .trim()
        .parse()
        .map_err(|_| "Age must be a whole number".to_string())?;
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(format!("Age must be between {MIN_AGE} and {MAX_AGE}"));
    }
    Ok(age)
}

fn parse_height(value: &str) -> Result<i32, String> {
    let height: i32 = value
        .trim()
        .parse()
        .map_err(|_| "Height must be a whole number of inches".to_string())?;
    if height <= 0 {
        return Err("Height must be a positive number of inches".to_string());
    }
    Ok(height)
}

/// Empty input means "not provided" and is stored as absent, never as zero.
fn parse_income(value: &str) -> Result<Option<f64>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let income: f64 = trimmed
        .parse()
        .map_err(|_| "Annual income must be a number (in lakh)".to_string())?;
    if !income.is_finite() || income < 0.0 {
        return Err("Annual income must be a non-negative number".to_string());
    }
    Ok(Some(income))
}

fn parse_gender(value: &str) -> Result<Gender, String> {
    match value.trim() {
        "Male" => Ok(Gender::Male),
        "Female" => Ok(Gender::Female),
        _ => Err("Gender must be 'Male' or 'Female'".to_string()),
    }
}

/// Checkbox-style boolean: the form posts "true"/"on" when ticked and may
/// omit or post "false" otherwise.
fn parse_manglik(value: &str) -> bool {
    matches!(value.trim(), "true" | "on" | "1")
}

/// Validates and coerces a raw submission into a typed insert payload.
/// Returns the first violation as a user-facing message; the caller must
/// not issue the insert on error.
pub fn validate(sub: &ProfileSubmission) -> Result<NewProfile, String> {
    if !is_valid_mobile(sub.mobile.trim()) {
        return Err("Invalid mobile number: please enter exactly 10 digits".to_string());
    }

    Ok(NewProfile {
        full_name: required(&sub.full_name, "Full name")?,
        age: parse_age(&sub.age)?,
        gender: parse_gender(&sub.gender)?,
        rashifal_symbol: required(&sub.rashifal_symbol, "Rashifal symbol")?,
        height_inch: parse_height(&sub.height_inch)?,
        blood_group: required(&sub.blood_group, "Blood group")?,
        manglik: parse_manglik(&sub.manglik),
        father_name: required(&sub.father_name, "Father's name")?,
        father_gotra: required(&sub.father_gotra, "Father's gotra")?,
        mother_gotra: required(&sub.mother_gotra, "Mother's gotra")?,
        family_gotra: required(&sub.family_gotra, "Family gotra")?,
        education: required(&sub.education, "Education")?,
        occupation: optional(&sub.occupation),
        work_experience: optional(&sub.work_experience),
        income_lakh: parse_income(&sub.income_lakh)?,
        address: required(&sub.address, "Address")?,
        mobile: sub.mobile.trim().to_string(),
        email: required(&sub.email, "Email")?,
        social_media_link: optional(&sub.social_media_link),
        expectations: required(&sub.expectations, "Expectations")?,
        hobbies: optional(&sub.hobbies),
        father_occupation: optional(&sub.father_occupation),
        mother_occupation: optional(&sub.mother_occupation),
        siblings_details: optional(&sub.siblings_details),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> ProfileSubmission {
        let mut sub = ProfileSubmission::default();
        for (name, value) in [
            ("full_name", "Ramesh Lodha"),
            ("age", "25"),
            ("gender", "Male"),
            ("rashifal_symbol", "Mesh"),
            ("height_inch", "68"),
            ("blood_group", "B+"),
            ("manglik", "false"),
            ("father_name", "Suresh Lodha"),
            ("father_gotra", "Kashyap"),
            ("mother_gotra", "Bharadwaj"),
            ("family_gotra", "Kashyap"),
            ("education", "B.Tech"),
            ("address", "12 Gandhi Road, Bhopal"),
            ("mobile", "9123456789"),
            ("email", "ramesh@example.com"),
            ("expectations", "Educated, family-oriented partner"),
        ] {
            sub.set_field(name, value.to_string());
        }
        sub
    }

    #[test]
    fn test_valid_submission_passes() {
        let profile = validate(&valid_submission()).expect("submission should validate");
        assert_eq!(profile.age, 25);
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.height_inch, 68);
        assert!(!profile.manglik);
        assert_eq!(profile.mobile, "9123456789");
    }

    #[test]
    fn test_mobile_ten_digits_passes() {
        assert!(is_valid_mobile("9876543210"));
    }

    #[test]
    fn test_mobile_five_digits_fails() {
        assert!(!is_valid_mobile("98765"));
    }

    #[test]
    fn test_mobile_eleven_digits_fails() {
        assert!(!is_valid_mobile("98765432100"));
    }

    #[test]
    fn test_mobile_with_hyphens_fails() {
        assert!(!is_valid_mobile("987-654-3210"));
    }

    #[test]
    fn test_mobile_with_spaces_fails() {
        assert!(!is_valid_mobile("98765 43210"));
    }

    #[test]
    fn test_invalid_mobile_rejects_submission() {
        let mut sub = valid_submission();
        sub.set_field("mobile", "12345".to_string());
        let err = validate(&sub).unwrap_err();
        assert!(err.contains("10 digits"));
    }

    #[test]
    fn test_age_bounds_inclusive() {
        for age in ["18", "99"] {
            let mut sub = valid_submission();
            sub.set_field("age", age.to_string());
            assert!(validate(&sub).is_ok(), "age {age} should be accepted");
        }
        for age in ["17", "100"] {
            let mut sub = valid_submission();
            sub.set_field("age", age.to_string());
            assert!(validate(&sub).is_err(), "age {age} should be rejected");
        }
    }

    #[test]
    fn test_age_must_be_integer() {
        let mut sub = valid_submission();
        sub.set_field("age", "twenty five".to_string());
        assert!(validate(&sub).is_err());
    }

    #[test]
    fn test_height_must_be_positive_integer() {
        let mut sub = valid_submission();
        sub.set_field("height_inch", "five five".to_string());
        assert!(validate(&sub).is_err());

        sub.set_field("height_inch", "0".to_string());
        assert!(validate(&sub).is_err());
    }

    #[test]
    fn test_empty_income_stored_as_absent() {
        let profile = validate(&valid_submission()).unwrap();
        assert_eq!(profile.income_lakh, None, "empty income must not become 0");
    }

    #[test]
    fn test_decimal_income_parses() {
        let mut sub = valid_submission();
        sub.set_field("income_lakh", "5.5".to_string());
        assert_eq!(validate(&sub).unwrap().income_lakh, Some(5.5));
    }

    #[test]
    fn test_negative_income_rejected() {
        let mut sub = valid_submission();
        sub.set_field("income_lakh", "-2".to_string());
        assert!(validate(&sub).is_err());
    }

    #[test]
    fn test_non_numeric_income_rejected() {
        let mut sub = valid_submission();
        sub.set_field("income_lakh", "five lakh".to_string());
        assert!(validate(&sub).is_err());
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let mut sub = valid_submission();
        sub.set_field("family_gotra", "   ".to_string());
        let err = validate(&sub).unwrap_err();
        assert!(err.contains("Family gotra"));
    }

    #[test]
    fn test_unknown_gender_rejected() {
        let mut sub = valid_submission();
        sub.set_field("gender", "Other".to_string());
        assert!(validate(&sub).is_err());
    }

    #[test]
    fn test_manglik_checkbox_values() {
        for (raw, expected) in [("true", true), ("on", true), ("1", true), ("false", false), ("", false)] {
            let mut sub = valid_submission();
            sub.set_field("manglik", raw.to_string());
            assert_eq!(validate(&sub).unwrap().manglik, expected, "manglik={raw:?}");
        }
    }

    #[test]
    fn test_optional_fields_trim_to_none() {
        let mut sub = valid_submission();
        sub.set_field("hobbies", "  ".to_string());
        sub.set_field("occupation", "Engineer".to_string());
        let profile = validate(&sub).unwrap();
        assert_eq!(profile.hobbies, None);
        assert_eq!(profile.occupation, Some("Engineer".to_string()));
    }

    #[test]
    fn test_unknown_field_names_ignored() {
        let mut sub = valid_submission();
        sub.set_field("csrf_token", "abc".to_string());
        assert!(validate(&sub).is_ok());
    }
}
