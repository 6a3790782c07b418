//! Guest model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Guest model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Guest {
    pub id: i32,
    pub name: String,
    /// Identity document number (passport, ID card)
    pub document: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_active: bool,
    pub archived_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Guest list query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct GuestQuery {
    /// Case-insensitive substring match against name OR document
    pub search: Option<String>,
}

/// Create guest request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGuest {
    #[validate(length(min = 1, message = "Guest name must not be empty"))]
    pub name: String,
    pub document: Option<String>,
    pub phone: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

/// Update guest request (partial; only supplied fields are written)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateGuest {
    #[validate(length(min = 1, message = "Guest name must not be empty"))]
    pub name: Option<String>,
    pub document: Option<String>,
    pub phone: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

impl UpdateGuest {
    /// True when no field is supplied; such an update is a silent no-op.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.document.is_none()
            && self.phone.is_none()
            && self.email.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_guest_requires_name() {
        let guest = CreateGuest {
            name: String::new(),
            document: None,
            phone: None,
            email: None,
        };
        assert!(guest.validate().is_err());
    }

    #[test]
    fn create_guest_rejects_malformed_email() {
        let guest = CreateGuest {
            name: "Jane Doe".to_string(),
            document: None,
            phone: None,
            email: Some("not-an-email".to_string()),
        };
        assert!(guest.validate().is_err());

        let guest = CreateGuest {
            email: Some("jane@example.com".to_string()),
            ..guest
        };
        assert!(guest.validate().is_ok());
    }
}
