//! Destructive-action confirmation gate. Delete endpoints require the
//! request body to echo the target id, so no delete is reachable from a
//! single accidental call.

use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct ConfirmBody {
    pub confirm: String,
}

impl ConfirmBody {
    /// Passes only when the body names exactly the record being deleted.
    pub fn require_confirmation(&self, id: Uuid) -> Result<(), AppError> {
        if self.confirm.trim() == id.to_string() {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "Deletion must be confirmed by sending {{\"confirm\": \"{id}\"}}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_id_confirms() {
        let id = Uuid::new_v4();
        let body = ConfirmBody {
            confirm: id.to_string(),
        };
        assert!(body.require_confirmation(id).is_ok());
    }

    #[test]
    fn test_different_id_is_rejected() {
        let body = ConfirmBody {
            confirm: Uuid::new_v4().to_string(),
        };
        assert!(body.require_confirmation(Uuid::new_v4()).is_err());
    }

    #[test]
    fn test_empty_confirmation_is_rejected() {
        let body = ConfirmBody {
            confirm: String::new(),
        };
        assert!(body.require_confirmation(Uuid::new_v4()).is_err());
    }

    #[test]
    fn test_whitespace_around_id_is_tolerated() {
        let id = Uuid::new_v4();
        let body = ConfirmBody {
            confirm: format!(" {id} "),
        };
        assert!(body.require_confirmation(id).is_ok());
    }
}
