//! Intake validation for Samaj Foundation connect requests. Lighter than the
//! profile validator on purpose: no 10-digit mobile rule applies here, and
//! email is the one contact field allowed to be blank.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConnectSubmission {
    pub full_name: String,
    pub age: i32,
    pub mobile: String,
    #[serde(default)]
    pub email: String,
    pub address: String,
    pub state: String,
    pub district: String,
    pub block_tehsil: String,
}

/// Validated intake payload with trimmed fields.
#[derive(Debug, Clone, PartialEq)]
pub struct NewConnectRequest {
    pub full_name: String,
    pub age: i32,
    pub mobile: String,
    pub email: String,
    pub address: String,
    pub state: String,
    pub district: String,
    pub block_tehsil: String,
}

fn required(value: &str, label: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{label} is required"));
    }
    Ok(trimmed.to_string())
}

pub fn validate(sub: &ConnectSubmission) -> Result<NewConnectRequest, String> {
    if sub.age <= 0 {
        return Err("Age must be a positive number".to_string());
    }
    Ok(NewConnectRequest {
        full_name: required(&sub.full_name, "Full name")?,
        age: sub.age,
        mobile: required(&sub.mobile, "Mobile number")?,
        email: sub.email.trim().to_string(),
        address: required(&sub.address, "Address")?,
        state: required(&sub.state, "State")?,
        district: required(&sub.district, "District")?,
        block_tehsil: required(&sub.block_tehsil, "Block/Tehsil")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ConnectSubmission {
        ConnectSubmission {
            full_name: "Kamla Devi".to_string(),
            age: 42,
            mobile: "9811122233".to_string(),
            email: String::new(),
            address: "Village Khera".to_string(),
            state: "Madhya Pradesh".to_string(),
            district: "Sagar".to_string(),
            block_tehsil: "Rehli".to_string(),
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        let req = validate(&submission()).expect("submission should validate");
        assert_eq!(req.full_name, "Kamla Devi");
        assert_eq!(req.age, 42);
    }

    #[test]
    fn test_email_may_be_blank() {
        let req = validate(&submission()).unwrap();
        assert_eq!(req.email, "");
    }

    #[test]
    fn test_blank_location_fields_rejected() {
        let mut sub = submission();
        sub.district = "  ".to_string();
        let err = validate(&sub).unwrap_err();
        assert!(err.contains("District"));
    }

    #[test]
    fn test_non_positive_age_rejected() {
        let mut sub = submission();
        sub.age = 0;
        assert!(validate(&sub).is_err());
        sub.age = -3;
        assert!(validate(&sub).is_err());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut sub = submission();
        sub.full_name = "  Kamla Devi  ".to_string();
        assert_eq!(validate(&sub).unwrap().full_name, "Kamla Devi");
    }
}
