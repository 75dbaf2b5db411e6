//! Registrations against records with a capacity ceiling

use crate::core::error::ValidationError;
use crate::core::validation::FieldChecks;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One accepted registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: Uuid,
    pub activity_id: Uuid,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
    /// 1-based position; equals the activity's counter right after this registration
    pub seat: u32,
}

impl Registration {
    pub fn new(activity_id: Uuid, user_name: String, seat: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            activity_id,
            user_name,
            created_at: Utc::now(),
            seat,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationDraft {
    #[serde(default, alias = "userName", alias = "name")]
    pub user_name: Option<String>,
}

impl RegistrationDraft {
    pub fn new(user_name: &str) -> Self {
        Self {
            user_name: Some(user_name.to_string()),
        }
    }

    pub fn validate(&self) -> Result<String, ValidationError> {
        let mut checks = FieldChecks::new();
        let user_name = checks.required_text("user_name", self.user_name.as_deref(), 1, 100);
        checks.finish()?;
        Ok(user_name)
    }
}
